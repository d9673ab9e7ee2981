//! Add-device modal form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use omnihub_app::state::{AddDeviceForm, AddField};

use crate::theme::styles;

/// Centered modal with name, brand and kind fields
pub struct AddDeviceModal<'a> {
    form: &'a AddDeviceForm,
}

impl<'a> AddDeviceModal<'a> {
    pub fn new(form: &'a AddDeviceForm) -> Self {
        Self { form }
    }

    fn field_line(&self, label: &'static str, value: String, field: AddField) -> Line<'static> {
        let focused = self.form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        let cursor = if focused && field != AddField::Kind {
            "▏"
        } else {
            ""
        };

        Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(format!("{label:<7}"), styles::text_secondary()),
            Span::styled(format!("{value}{cursor}"), value_style),
        ])
    }
}

impl Widget for AddDeviceModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = styles::glass_block(true)
            .title(Span::styled(" Add Device ", styles::text_primary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let kind = format!("◂ {} ▸", self.form.kind().display_name());
        let lines = vec![
            Line::default(),
            self.field_line("Name", self.form.name.clone(), AddField::Name),
            self.field_line("Brand", self.form.brand.clone(), AddField::Brand),
            self.field_line("Kind", kind, AddField::Kind),
            Line::default(),
            Line::from(Span::styled(
                "  Tab next field · ←→ kind · Enter add · Esc cancel",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_form_fields_render() {
        let form = AddDeviceForm {
            name: "Office Fan".to_string(),
            brand: "Hisense".to_string(),
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AddDeviceModal::new(&form), area);

        assert!(term.buffer_contains("Add Device"));
        assert!(term.buffer_contains("Office Fan"));
        assert!(term.buffer_contains("Hisense"));
        // Kind defaults to the first selectable entry
        assert!(term.buffer_contains("TV"));
    }
}
