//! Input handling — maps key events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Action;

use super::state::AppState;

/// Process a key event through the configurable bindings.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.config.match_key(key) {
        Some(Action::ToggleTheme) => toggle_theme(state),
        Some(Action::TogglePause) => state.paused = !state.paused,
        Some(Action::Reseed) => state.pool.reseed(),
        Some(Action::ToggleStatusBar) => state.show_status = !state.show_status,
        Some(Action::Quit) => state.should_quit = true,
        None => {}
    }
}

/// Flip the palette and remember the choice across runs, like the original
/// page stored its theme preference.
fn toggle_theme(state: &mut AppState) {
    state.dark_theme = !state.dark_theme;
    state.config.dark_theme = state.dark_theme;
    if let Err(err) = state.config.save() {
        tracing::warn!("failed to persist theme choice: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::pool::RowPool;

    const SNIPPETS: &[&str] = &["fn tick() {}"];

    fn state() -> AppState {
        let pool = RowPool::new(80, 24, 3, fastrand::Rng::with_seed(5), SNIPPETS).unwrap();
        AppState::new(pool, AppConfig::defaults(), true)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_set_the_quit_flag() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('q')));
        assert!(s.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut s = state();
        handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(s.should_quit);
    }

    #[test]
    fn pause_toggles_without_touching_rows() {
        let mut s = state();
        let before = s.pool.rows.len();
        handle_key(&mut s, press(KeyCode::Char(' ')));
        assert!(s.paused);
        assert_eq!(s.pool.rows.len(), before);
        handle_key(&mut s, press(KeyCode::Char('p')));
        assert!(!s.paused);
    }

    #[test]
    fn reseed_keeps_the_row_count() {
        let mut s = state();
        let before = s.pool.rows.len();
        handle_key(&mut s, press(KeyCode::Char('r')));
        assert_eq!(s.pool.rows.len(), before);
        assert!(s.pool.rows.iter().all(|r| r.revealed == 0));
    }
}
