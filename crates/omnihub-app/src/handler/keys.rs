//! Key event handlers for tabs and input modes
//!
//! Keys either mutate purely-visual state in place (cursors, text buffers,
//! form focus) or translate into a semantic [`Message`] for the update
//! function. Anything with a side effect beyond the keyboard surface goes
//! through a message.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::remote::RemoteState;
use crate::state::{AddDeviceForm, AddField, AppState, InputMode, Tab};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.tab {
        Tab::Dashboard => match state.mode {
            InputMode::Normal => handle_dashboard_key(state, key),
            InputMode::Search => handle_search_key(state, key),
            InputMode::AddDevice => handle_add_form_key(state, key),
        },
        Tab::Remotes => handle_remote_key(state, key),
        Tab::Fm => handle_fm_key(state, key),
        Tab::Assistant => handle_assistant_key(state, key),
    }
}

/// Tab-bar shortcuts shared by every non-text surface
fn tab_shortcut(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => Some(Message::SelectTab(state.tab.next())),
        InputKey::BackTab => Some(Message::SelectTab(state.tab.prev())),
        InputKey::Char('1') => Some(Message::SelectTab(Tab::Dashboard)),
        InputKey::Char('2') => Some(Message::SelectTab(Tab::Remotes)),
        InputKey::Char('3') => Some(Message::SelectTab(Tab::Fm)),
        InputKey::Char('4') => Some(Message::SelectTab(Tab::Assistant)),
        _ => None,
    }
}

fn handle_dashboard_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = tab_shortcut(state, key) {
        return Some(msg);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') => {
            state.cursor = state.cursor.saturating_sub(1);
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            state.cursor += 1;
            state.clamp_cursor();
            None
        }
        InputKey::Enter => state
            .highlighted_device_id()
            .map(|device_id| Message::ActivateDevice { device_id }),
        InputKey::Char('p') | InputKey::Char(' ') => state
            .highlighted_device_id()
            .map(|device_id| Message::TogglePower { device_id }),
        InputKey::Char('a') => {
            state.add_form = AddDeviceForm::default();
            state.mode = InputMode::AddDevice;
            None
        }
        InputKey::Char('/') => {
            state.mode = InputMode::Search;
            None
        }
        InputKey::Esc => {
            state.search.clear();
            state.clamp_cursor();
            None
        }
        _ => None,
    }
}

fn handle_search_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => {
            state.search.clear();
            state.mode = InputMode::Normal;
            state.clamp_cursor();
        }
        InputKey::Enter => {
            state.mode = InputMode::Normal;
        }
        InputKey::Backspace => {
            state.search.pop();
            state.clamp_cursor();
        }
        InputKey::Char(c) => {
            state.search.push(c);
            state.clamp_cursor();
        }
        _ => {}
    }
    None
}

fn handle_add_form_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => {
            state.mode = InputMode::Normal;
            state.add_form = AddDeviceForm::default();
            None
        }
        InputKey::Tab | InputKey::Down => {
            state.add_form.focus = state.add_form.focus.next();
            None
        }
        InputKey::BackTab | InputKey::Up => {
            state.add_form.focus = state.add_form.focus.prev();
            None
        }
        InputKey::Enter => Some(Message::SubmitAddDevice),
        InputKey::Left if state.add_form.focus == AddField::Kind => {
            state.add_form.cycle_kind(false);
            None
        }
        InputKey::Right if state.add_form.focus == AddField::Kind => {
            state.add_form.cycle_kind(true);
            None
        }
        InputKey::Backspace => {
            match state.add_form.focus {
                AddField::Name => {
                    state.add_form.name.pop();
                }
                AddField::Brand => {
                    state.add_form.brand.pop();
                }
                AddField::Kind => {}
            }
            None
        }
        InputKey::Char(c) => {
            match state.add_form.focus {
                AddField::Name => state.add_form.name.push(c),
                AddField::Brand => state.add_form.brand.push(c),
                AddField::Kind => {}
            }
            None
        }
        _ => None,
    }
}

/// Decoder keypad command labels (digits never allocate)
const DIGIT_COMMANDS: [&str; 10] = [
    "DIGIT_0", "DIGIT_1", "DIGIT_2", "DIGIT_3", "DIGIT_4", "DIGIT_5", "DIGIT_6", "DIGIT_7",
    "DIGIT_8", "DIGIT_9",
];

fn handle_remote_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Without a selection there is nothing to drive; only navigation works.
    if state.remote.is_none() {
        return match key {
            InputKey::Esc => Some(Message::SelectTab(Tab::Dashboard)),
            InputKey::Char('q') => Some(Message::Quit),
            _ => tab_shortcut(state, key),
        };
    }

    // Decoder keypad digits win over the numeric tab shortcuts while a
    // decoder remote is mounted.
    if let (Some(RemoteState::Decoder), InputKey::Char(c)) = (&state.remote, key) {
        if let Some(digit) = c.to_digit(10) {
            return Some(Message::RemoteButton {
                command: DIGIT_COMMANDS[digit as usize],
            });
        }
    }

    if let Some(msg) = tab_shortcut(state, key) {
        return Some(msg);
    }

    if key == InputKey::Esc {
        return Some(Message::SelectTab(Tab::Dashboard));
    }
    if key == InputKey::Char('q') {
        return Some(Message::Quit);
    }
    if key == InputKey::Char('p') {
        return Some(Message::RemoteButton { command: "POWER" });
    }

    let command = match state.remote.as_ref()? {
        RemoteState::Tv { .. } => match key {
            InputKey::Up => "NAV_UP",
            InputKey::Down => "NAV_DOWN",
            InputKey::Left => "NAV_LEFT",
            InputKey::Right => "NAV_RIGHT",
            InputKey::Enter => "OK",
            InputKey::Char('+') | InputKey::Char('=') => "VOL_UP",
            InputKey::Char('-') => "VOL_DOWN",
            InputKey::Char(']') => "CH_UP",
            InputKey::Char('[') => "CH_DOWN",
            InputKey::Char('h') => "HOME",
            InputKey::Char('m') => "MENU",
            InputKey::Char('x') => "EXIT",
            _ => return None,
        },
        RemoteState::Ac { .. } => match key {
            InputKey::Char('+') | InputKey::Char('=') | InputKey::Up => "TEMP_UP",
            InputKey::Char('-') | InputKey::Down => "TEMP_DOWN",
            InputKey::Char('a') => "MODE_AUTO",
            InputKey::Char('s') => "MODE_SWING",
            InputKey::Char('t') => "MODE_TURBO",
            _ => return None,
        },
        RemoteState::Decoder => match key {
            InputKey::Up => "NAV_UP",
            InputKey::Down => "NAV_DOWN",
            InputKey::Left => "NAV_LEFT",
            InputKey::Right => "NAV_RIGHT",
            InputKey::Enter => "OK",
            InputKey::Backspace => "BACK",
            InputKey::Char('g') => "GUIDE",
            InputKey::Char('v') => "PVR",
            InputKey::Char('i') => "INFO",
            _ => return None,
        },
        RemoteState::Light { .. } => match key {
            InputKey::Char('+') | InputKey::Char('=') | InputKey::Up => "BRIGHT_UP",
            InputKey::Char('-') | InputKey::Down => "BRIGHT_DOWN",
            InputKey::Char('c') => "COLOR_CYCLE",
            InputKey::Char('w') => "COLOR_WHEEL",
            _ => return None,
        },
        RemoteState::Soundbar { .. } => match key {
            InputKey::Char('+') | InputKey::Char('=') | InputKey::Up => "VOL_UP",
            InputKey::Char('-') | InputKey::Down => "VOL_DOWN",
            InputKey::Char('e') => "EQUALIZER",
            InputKey::Char('i') => "INPUT_SELECT",
            _ => return None,
        },
    };

    Some(Message::RemoteButton { command })
}

fn handle_fm_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = tab_shortcut(state, key) {
        return Some(msg);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::SelectTab(Tab::Dashboard)),
        InputKey::Up | InputKey::Char('+') | InputKey::Char('=') => {
            Some(Message::FmStep { up: true })
        }
        InputKey::Down | InputKey::Char('-') => Some(Message::FmStep { up: false }),
        InputKey::Char('s') => Some(Message::FmScan),
        InputKey::Char('b') => Some(Message::FmTogglePairing),
        InputKey::Char(' ') => Some(Message::FmTogglePlayback),
        InputKey::Char('t') => Some(Message::FmToggleTransmit),
        _ => None,
    }
}

fn handle_assistant_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        // Tab still cycles screens; every printable char belongs to the
        // input buffer, so the numeric shortcuts don't apply here.
        InputKey::Tab => Some(Message::SelectTab(state.tab.next())),
        InputKey::BackTab => Some(Message::SelectTab(state.tab.prev())),
        InputKey::Esc => Some(Message::SelectTab(Tab::Dashboard)),
        InputKey::Enter => Some(Message::AssistantSubmit),
        InputKey::Backspace => {
            state.assistant.backspace();
            None
        }
        InputKey::Char(c) => {
            state.assistant.push_char(c);
            None
        }
        _ => None,
    }
}
