use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::session::{
    FetchOutcome, RequestTicket, SessionIntent, SessionPhase, SessionReducer, SessionState,
};
use crate::ui::gallery_view::GalleryView;
use crate::ui::layout::gallery_body_rows;
use crate::ui::lightbox::LightboxState;
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Gallery,
}

/// Top-level UI model.
///
/// Owns the session state and every view-local piece (input line, scroll
/// position, lightbox). All session transitions go through `dispatch`,
/// which runs the pure reducer and then performs the bookkeeping the new
/// state calls for: queueing the fetch the reducer asked for, re-scanning
/// the lightbox, arming the notice TTL.
pub struct App {
    should_quit: bool,
    focus: Focus,
    session: SessionState,
    input: String,
    gallery_view: GalleryView,
    lightbox: LightboxState,
    /// Fetch the reducer requested but the runtime has not dispatched yet.
    pending_fetch: Option<RequestTicket>,
    notice_deadline: Option<Instant>,
    notice_ttl: Duration,
    scroll_threshold_rows: u16,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Search,
            session: SessionState::new(config.search.per_page),
            input: String::new(),
            gallery_view: GalleryView::new(),
            lightbox: LightboxState::Hidden,
            pending_fetch: None,
            notice_deadline: None,
            notice_ttl: Duration::from_millis(config.ui.notice_ttl_ms),
            scroll_threshold_rows: config.ui.scroll_threshold_rows,
            size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Gallery,
            Focus::Gallery => Focus::Search,
        };
    }

    pub fn focus_gallery(&mut self) {
        self.focus = Focus::Gallery;
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_push(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    pub fn input_clear(&mut self) {
        self.input.clear();
    }

    pub fn gallery_view(&self) -> &GalleryView {
        &self.gallery_view
    }

    pub fn lightbox(&self) -> &LightboxState {
        &self.lightbox
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    fn viewport_rows(&self) -> u16 {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        gallery_body_rows(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        })
    }

    /// Submit the current input as a new search.
    pub fn submit(&mut self) {
        let query = self.input.clone();
        self.dispatch(SessionIntent::Submit { query });
    }

    /// Load-more trigger from the control or keybinding.
    pub fn load_more(&mut self) {
        self.dispatch(SessionIntent::LoadMore);
    }

    pub fn on_fetch(&mut self, ticket: RequestTicket, outcome: FetchOutcome) {
        self.dispatch(SessionIntent::Completed { ticket, outcome });
    }

    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.notice_deadline {
            if Instant::now() >= deadline {
                self.notice_deadline = None;
                self.dispatch(SessionIntent::DismissNotice);
            }
        }
    }

    /// Fetch requested by the last transition, if unclaimed. The runtime
    /// drains this exactly once per transition.
    pub fn take_pending_fetch(&mut self) -> Option<RequestTicket> {
        self.pending_fetch.take()
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.session.hits.len();
        self.gallery_view.move_selection(delta, len);
        self.after_scroll();
    }

    pub fn select_first(&mut self) {
        self.gallery_view.select_first();
        self.after_scroll();
    }

    pub fn select_last(&mut self) {
        self.gallery_view.select_last(self.session.hits.len());
        self.after_scroll();
    }

    /// Single persistent scroll listener: consults current state on every
    /// movement instead of being attached and detached per cycle.
    fn after_scroll(&mut self) {
        let rows = self.viewport_rows();
        self.gallery_view.ensure_visible(rows);
        let near = self.gallery_view.near_bottom(
            self.session.hits.len(),
            rows,
            self.scroll_threshold_rows,
        );
        if near && self.session.can_load_more() {
            self.dispatch(SessionIntent::LoadMore);
        }
    }

    pub fn open_lightbox(&mut self) {
        if !self.session.hits.is_empty() {
            self.lightbox.open(self.gallery_view.selected);
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn lightbox_step(&mut self, delta: isize) {
        self.lightbox.step(delta, self.session.hits.len());
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        let prev_phase = self.session.phase;
        let prev_ticket = self.session.in_flight.clone();
        let prev_notice = self.session.notice.clone();

        self.session = SessionReducer::reduce(std::mem::take(&mut self.session), intent);

        // A transition that recorded a new in-flight ticket is asking the
        // runtime to dispatch that request.
        if let Some(ticket) = self.session.in_flight.clone() {
            if prev_ticket.as_ref() != Some(&ticket) {
                tracing::debug!(
                    query = %ticket.query,
                    page = ticket.page,
                    generation = ticket.generation,
                    "queueing search request"
                );
                self.pending_fetch = Some(ticket);
            }
        }

        // Scroll back to the top of fresh results.
        if prev_phase == SessionPhase::Searching && self.session.phase == SessionPhase::Results {
            self.gallery_view.reset();
            self.focus = Focus::Gallery;
        }

        self.gallery_view.clamp(self.session.hits.len());
        self.lightbox.refresh(self.session.hits.len());

        if self.session.notice != prev_notice {
            self.notice_deadline = self
                .session
                .notice
                .as_ref()
                .map(|_| Instant::now() + self.notice_ttl);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Hit, SearchResponse};

    fn app() -> App {
        App::new(&Config::default())
    }

    fn hits(n: usize) -> Vec<Hit> {
        (0..n)
            .map(|i| Hit {
                webformat_url: format!("https://cdn.example/web{}.jpg", i),
                large_image_url: format!("https://cdn.example/large{}.jpg", i),
                tags: "cat".to_string(),
                likes: 0,
                views: 0,
                comments: 0,
                downloads: 0,
            })
            .collect()
    }

    #[test]
    fn submit_queues_one_fetch() {
        let mut app = app();
        app.input_push('c');
        app.submit();
        let ticket = app.take_pending_fetch().expect("fetch queued");
        assert_eq!(ticket.query, "c");
        assert_eq!(ticket.page, 1);
        assert!(app.take_pending_fetch().is_none(), "drained exactly once");
    }

    #[test]
    fn empty_submit_queues_nothing() {
        let mut app = app();
        app.submit();
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn successful_search_moves_focus_and_resets_scroll() {
        let mut app = app();
        app.input_push('c');
        app.submit();
        let ticket = app.take_pending_fetch().unwrap();
        app.on_fetch(
            ticket,
            FetchOutcome::Loaded(SearchResponse {
                total_hits: 97,
                hits: hits(40),
            }),
        );
        assert_eq!(app.focus(), Focus::Gallery);
        assert_eq!(app.gallery_view().selected, 0);
        assert_eq!(app.gallery_view().offset, 0);
    }

    #[test]
    fn scrolling_near_the_bottom_queues_the_next_page() {
        let mut app = app();
        app.on_resize(80, 24);
        app.input_push('c');
        app.submit();
        let ticket = app.take_pending_fetch().unwrap();
        app.on_fetch(
            ticket,
            FetchOutcome::Loaded(SearchResponse {
                total_hits: 97,
                hits: hits(40),
            }),
        );

        // Moving the selection to the last card scrolls the viewport
        // within the proximity threshold of the gallery bottom.
        app.select_last();
        let ticket = app.take_pending_fetch().expect("load-more dispatched");
        assert_eq!(ticket.page, 2);
        assert_eq!(ticket.query, "c");

        // The same movement while that request is in flight stays inert.
        app.select_last();
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn lightbox_closes_when_gallery_is_cleared() {
        let mut app = app();
        app.input_push('c');
        app.submit();
        let ticket = app.take_pending_fetch().unwrap();
        app.on_fetch(
            ticket,
            FetchOutcome::Loaded(SearchResponse {
                total_hits: 5,
                hits: hits(5),
            }),
        );
        app.open_lightbox();
        assert!(app.lightbox().is_visible());

        // A new search clears the hit list; the overlay must not point at
        // a stale index while the first page is in flight.
        app.input_clear();
        app.input_push('d');
        app.submit();
        assert!(!app.lightbox().is_visible());
    }
}
