use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub struct Header {
    total: usize,
    visible: usize,
    busy: bool,
    frame: usize,
}

impl Header {
    pub fn new(total: usize, visible: usize, busy: bool, frame: usize) -> Self {
        Self {
            total,
            visible,
            busy,
            frame,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count = if self.visible == self.total {
            format!("{} contacts", self.total)
        } else {
            format!("{} of {} contacts", self.visible, self.total)
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Address Book",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
        ];
        if self.busy {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                SPINNER[self.frame % SPINNER.len()],
                Style::default().fg(ACCENT),
            ));
            spans.push(Span::styled(" working", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
