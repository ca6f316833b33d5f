use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The lightbox swallows everything while open.
    if app.lightbox().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_lightbox(),
            KeyCode::Left => app.lightbox_step(-1),
            KeyCode::Right => app.lightbox_step(1),
            _ => {}
        }
        return;
    }

    if matches!(key.code, KeyCode::Tab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Enter => app.submit(),
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Esc => app.input_clear(),
            KeyCode::Down => app.focus_gallery(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.input_push(ch)
            }
            _ => {}
        },
        Focus::Gallery => match key.code {
            KeyCode::Up => app.move_selection(-1),
            KeyCode::Down => app.move_selection(1),
            KeyCode::PageUp => app.move_selection(-5),
            KeyCode::PageDown => app.move_selection(5),
            KeyCode::Home => app.select_first(),
            KeyCode::End => app.select_last(),
            KeyCode::Enter => app.open_lightbox(),
            KeyCode::Char(' ') | KeyCode::Char('m') => app.load_more(),
            KeyCode::Char('/') | KeyCode::Esc => app.focus_search(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(&Config::default());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn typed_chars_reach_the_input_line() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('c')));
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('t')));
        assert_eq!(app.input(), "cat");
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.input(), "ca");
    }

    #[test]
    fn tab_toggles_focus() {
        let mut app = App::new(&Config::default());
        assert_eq!(app.focus(), Focus::Search);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Gallery);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Search);
    }
}
