use crate::session::{SessionPhase, SessionState};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &SessionState) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = Style::default().fg(DIM_TEXT);

        let mut spans = vec![Span::styled(" pixelrover", title_style)];

        if !session.query.is_empty() {
            spans.push(Span::styled(" │ ", dim_style));
            spans.push(Span::styled(session.query.clone(), text_style));
        }

        let status = match session.phase {
            SessionPhase::Idle => Span::styled(" │ type a query to search", dim_style),
            SessionPhase::Searching => Span::styled(" │ searching…", dim_style),
            SessionPhase::Results => {
                let progress = if session.is_loading() {
                    format!(
                        " │ {} of {} images (loading…)",
                        session.cumulative_hits, session.total_hits
                    )
                } else {
                    format!(
                        " │ {} of {} images",
                        session.cumulative_hits, session.total_hits
                    )
                };
                Span::styled(progress, text_style)
            }
            SessionPhase::Empty => Span::styled(" │ no matches", dim_style),
            SessionPhase::Error => {
                Span::styled(" │ search failed", Style::default().fg(STATUS_ERROR))
            }
        };
        spans.push(status);

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
