//! Broadcast panel: the simulated FM transmitter
//!
//! Entirely local state, independent of the device store. The frequency is
//! held in tenths of MHz so the 0.1 step and the [87.5, 108.0] band bounds
//! are exact integer arithmetic.

use std::time::Duration;

use rand::seq::SliceRandom;

/// Lower band edge, tenths of MHz (87.5)
pub const FREQ_MIN_TENTHS: u16 = 875;
/// Upper band edge, tenths of MHz (108.0)
pub const FREQ_MAX_TENTHS: u16 = 1080;
/// Frequency shown on first open (94.5)
pub const FREQ_DEFAULT_TENTHS: u16 = 945;

/// "Known clear" stations the scan picks from, tenths of MHz
pub const CLEAR_CHANNELS_TENTHS: [u16; 4] = [883, 915, 1079, 945];

/// Simulated tuner sweep duration
pub const SCAN_DELAY: Duration = Duration::from_millis(1500);
/// Simulated source pairing latency
pub const PAIRING_DELAY: Duration = Duration::from_millis(1000);

/// Cosmetic "now playing" metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self {
            title: "Summer Vibes Mix".to_string(),
            artist: "DJ Omni".to_string(),
        }
    }
}

/// Outcome of a pairing toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingAction {
    /// Source unlinked immediately (playback stops too)
    Unpaired,
    /// Pairing started; completion arrives via timer with this token
    Started(u64),
    /// Another scan/pairing is in flight; request dropped
    Ignored,
}

/// FM transmitter state
#[derive(Debug)]
pub struct BroadcastState {
    tenths: u16,
    pub is_transmitting: bool,
    pub is_paired: bool,
    pub is_playing: bool,
    pub track: TrackInfo,
    /// Token of the in-flight scan or pairing timer, if any
    busy: Option<u64>,
    next_token: u64,
}

impl Default for BroadcastState {
    fn default() -> Self {
        Self {
            tenths: FREQ_DEFAULT_TENTHS,
            is_transmitting: false,
            is_paired: false,
            is_playing: false,
            track: TrackInfo::default(),
            busy: None,
            next_token: 0,
        }
    }
}

impl BroadcastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequency in MHz
    pub fn mhz(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Frequency formatted for the dial readout, e.g. `"94.5"`
    pub fn display(&self) -> String {
        format!("{}.{}", self.tenths / 10, self.tenths % 10)
    }

    pub fn tenths(&self) -> u16 {
        self.tenths
    }

    /// Step up 0.1 MHz; no-op at the upper band edge.
    pub fn step_up(&mut self) {
        if self.tenths < FREQ_MAX_TENTHS {
            self.tenths += 1;
        }
    }

    /// Step down 0.1 MHz; no-op at the lower band edge.
    pub fn step_down(&mut self) {
        if self.tenths > FREQ_MIN_TENTHS {
            self.tenths -= 1;
        }
    }

    pub fn toggle_transmitting(&mut self) {
        self.is_transmitting = !self.is_transmitting;
    }

    /// Playback toggle, gated on a paired source.
    pub fn toggle_playback(&mut self) {
        if self.is_paired {
            self.is_playing = !self.is_playing;
        }
    }

    /// A scan or pairing timer is running
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    /// Start a scan: picks a pseudo-random clear channel now, applied when
    /// the sweep timer completes. Returns `None` (request ignored) while
    /// another scan/pairing is in flight.
    pub fn start_scan(&mut self) -> Option<(u64, u16)> {
        if self.busy.is_some() {
            return None;
        }
        let token = self.issue_token();
        let tenths = *CLEAR_CHANNELS_TENTHS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&FREQ_DEFAULT_TENTHS);
        Some((token, tenths))
    }

    /// Apply a completed scan. Stale tokens are dropped.
    pub fn complete_scan(&mut self, token: u64, tenths: u16) {
        if self.busy == Some(token) {
            self.busy = None;
            self.tenths = tenths.clamp(FREQ_MIN_TENTHS, FREQ_MAX_TENTHS);
        }
    }

    /// Link or unlink the audio source. Unlinking is immediate; linking
    /// completes after the pairing timer.
    pub fn toggle_pairing(&mut self) -> PairingAction {
        if self.is_paired {
            self.is_paired = false;
            self.is_playing = false;
            return PairingAction::Unpaired;
        }
        if self.busy.is_some() {
            return PairingAction::Ignored;
        }
        PairingAction::Started(self.issue_token())
    }

    /// Complete a pairing request. Stale tokens are dropped.
    pub fn complete_pairing(&mut self, token: u64) {
        if self.busy == Some(token) {
            self.busy = None;
            self.is_paired = true;
        }
    }

    fn issue_token(&mut self) -> u64 {
        self.next_token += 1;
        self.busy = Some(self.next_token);
        self.next_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_respects_band_edges() {
        let mut fm = BroadcastState::new();

        // Walk to the bottom edge and keep pushing
        while fm.tenths() > FREQ_MIN_TENTHS {
            fm.step_down();
        }
        assert_eq!(fm.display(), "87.5");
        fm.step_down();
        assert_eq!(fm.tenths(), FREQ_MIN_TENTHS);

        while fm.tenths() < FREQ_MAX_TENTHS {
            fm.step_up();
        }
        assert_eq!(fm.display(), "108.0");
        fm.step_up();
        assert_eq!(fm.tenths(), FREQ_MAX_TENTHS);
    }

    #[test]
    fn test_scan_is_single_in_flight() {
        let mut fm = BroadcastState::new();
        let (token, tenths) = fm.start_scan().unwrap();
        assert!(fm.is_busy());

        // Second request while sweeping is dropped
        assert!(fm.start_scan().is_none());

        fm.complete_scan(token, tenths);
        assert!(!fm.is_busy());
        assert_eq!(fm.tenths(), tenths);
        assert!(CLEAR_CHANNELS_TENTHS.contains(&tenths));
    }

    #[test]
    fn test_stale_scan_completion_is_dropped() {
        let mut fm = BroadcastState::new();
        let before = fm.tenths();
        fm.complete_scan(99, 883);
        assert_eq!(fm.tenths(), before);
    }

    #[test]
    fn test_pairing_gates_playback() {
        let mut fm = BroadcastState::new();

        // Not paired yet: playback stays off
        fm.toggle_playback();
        assert!(!fm.is_playing);

        let PairingAction::Started(token) = fm.toggle_pairing() else {
            panic!("expected pairing to start");
        };
        // Still pending
        assert!(!fm.is_paired);
        fm.toggle_playback();
        assert!(!fm.is_playing);

        fm.complete_pairing(token);
        assert!(fm.is_paired);
        fm.toggle_playback();
        assert!(fm.is_playing);
    }

    #[test]
    fn test_unpairing_stops_playback() {
        let mut fm = BroadcastState::new();
        let PairingAction::Started(token) = fm.toggle_pairing() else {
            panic!("expected pairing to start");
        };
        fm.complete_pairing(token);
        fm.toggle_playback();
        assert!(fm.is_playing);

        assert_eq!(fm.toggle_pairing(), PairingAction::Unpaired);
        assert!(!fm.is_paired);
        assert!(!fm.is_playing);
    }

    #[test]
    fn test_pairing_ignored_while_scanning() {
        let mut fm = BroadcastState::new();
        fm.start_scan().unwrap();
        assert_eq!(fm.toggle_pairing(), PairingAction::Ignored);
    }
}
