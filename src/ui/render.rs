use crate::gallery;
use crate::session::{NoticeKind, SessionPhase, SessionState};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::gallery_view::GalleryView;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_INFO, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let session = app.session();

    frame.render_widget(Header::new().widget(session), regions.header);
    draw_search_form(frame, app, regions.search);
    draw_gallery(frame, app, regions.gallery);
    frame.render_widget(Footer::new().widget(regions.footer.width), regions.footer);

    if let Some(notice) = &session.notice {
        draw_notice(frame, regions.gallery, &notice.text, notice.kind);
    }

    if let Some(index) = app.lightbox().index() {
        draw_lightbox(frame, session, index);
    }
}

fn draw_search_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Search && !app.lightbox().is_visible();
    let border = if focused { ACCENT } else { GLOBAL_BORDER };

    let input = Paragraph::new(app.input().to_string())
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" search "),
        );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        let cursor_x = area.x + 1 + app.input().chars().count().min(area.width as usize - 2) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_gallery(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.session();
    let focused = app.focus() == Focus::Gallery && !app.lightbox().is_visible();
    let border = if focused { ACCENT } else { GLOBAL_BORDER };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" gallery ");

    let lines = match session.phase {
        SessionPhase::Idle => vec![Line::from(Span::styled(
            "  Search for images above.",
            Style::default().fg(DIM_TEXT),
        ))],
        SessionPhase::Searching => vec![Line::from(Span::styled(
            "  Searching…",
            Style::default().fg(DIM_TEXT),
        ))],
        SessionPhase::Empty => Vec::new(),
        SessionPhase::Results | SessionPhase::Error => {
            card_lines(session, app.gallery_view().selected)
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.gallery_view().offset, 0));
    frame.render_widget(paragraph, area);
}

fn card_lines(session: &SessionState, selected: usize) -> Vec<Line<'static>> {
    let caption_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let url_style = Style::default().fg(DIM_TEXT);
    let stats_style = Style::default().fg(DIM_TEXT);
    let selected_style = Style::default().bg(ACTIVE_HIGHLIGHT);

    let mut lines = Vec::with_capacity(GalleryView::total_rows(session.hits.len()) as usize);
    for (i, card) in gallery::cards(&session.hits).into_iter().enumerate() {
        let marker = if i == selected { "▸ " } else { "  " };
        let mut caption = Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(ACCENT)),
            Span::styled(card.caption, caption_style),
        ]);
        let mut thumb = Line::from(Span::styled(format!("    {}", card.thumbnail_url), url_style));
        let mut stats = Line::from(Span::styled(format!("    {}", card.stats), stats_style));
        if i == selected {
            caption = caption.style(selected_style);
            thumb = thumb.style(selected_style);
            stats = stats.style(selected_style);
        }
        lines.push(caption);
        lines.push(thumb);
        lines.push(stats);
        lines.push(Line::from(""));
    }

    // Tail line: the load-more control or the end-of-collection marker.
    if session.show_load_more() {
        let label = if session.is_loading() {
            "  [ Loading… ]"
        } else {
            "  [ Load more (m) ]"
        };
        lines.push(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    } else if session.show_end_marker() {
        lines.push(Line::from(Span::styled(
            "  — end of search results —",
            Style::default().fg(DIM_TEXT),
        )));
    }

    lines
}

fn draw_notice(frame: &mut Frame<'_>, gallery: Rect, text: &str, kind: NoticeKind) {
    if gallery.height < 3 || gallery.width < 4 {
        return;
    }

    let color = match kind {
        NoticeKind::Success => STATUS_OK,
        NoticeKind::Info => STATUS_INFO,
        NoticeKind::Failure => STATUS_ERROR,
    };

    let width = (text.chars().count() as u16 + 4).min(gallery.width.saturating_sub(2));
    let area = Rect {
        x: gallery.x + gallery.width.saturating_sub(width + 1),
        y: gallery.y + 1,
        width,
        height: 1,
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!(" {} ", text)).style(Style::default().fg(color)),
        area,
    );
}

fn draw_lightbox(frame: &mut Frame<'_>, session: &SessionState, index: usize) {
    let Some(hit) = session.hits.get(index) else {
        return;
    };

    let area = centered_rect(80, 70, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" image {} of {} ", index + 1, session.hits.len());
    let dim = Style::default().fg(DIM_TEXT);
    let text = Style::default().fg(HEADER_TEXT);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", hit.tags), text.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  full size: ", dim),
            Span::styled(hit.large_image_url.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("  thumbnail: ", dim),
            Span::styled(hit.webformat_url.clone(), text),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "  likes {}  views {}  comments {}  downloads {}",
                hit.likes, hit.views, hit.comments, hit.downloads
            ),
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled("  ←/→ browse · Esc close", dim)),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER))
                .title(title),
        ),
        area,
    );
}
