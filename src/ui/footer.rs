use crate::ui::app::{Notice, NoticeLevel};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    hints: &'a str,
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str, notice: Option<&'a Notice>) -> Self {
        Self { hints, notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(format!(" {}", self.hints), text_style)];
        let mut used = self.hints.chars().count() + 1;
        if let Some(notice) = self.notice {
            let color = match notice.level {
                NoticeLevel::Info => STATUS_OK,
                NoticeLevel::Error => STATUS_ERROR,
            };
            let text = format!(" │ {}", notice.message);
            used += text.chars().count();
            spans.push(Span::styled(text, Style::default().fg(color)));
        }

        // Char count, not byte count (box-drawing separators)
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
