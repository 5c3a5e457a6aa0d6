//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling).

use crate::config::AppConfig;
use crate::core::pool::RowPool;

/// Top-level application state.
pub struct AppState {
    /// The animated rows and their seeded randomness.
    pub pool: RowPool,
    /// Active palette flag: `true` = light ink on dark.  Passed explicitly
    /// to the renderer each frame.
    pub dark_theme: bool,
    /// When paused the update pass is skipped; rendering continues.
    pub paused: bool,
    /// Whether the bottom hint bar is visible.
    pub show_status: bool,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// User-configurable keybindings and persisted settings.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: RowPool, config: AppConfig, dark_theme: bool) -> Self {
        Self {
            pool,
            dark_theme,
            paused: false,
            show_status: true,
            should_quit: false,
            config,
        }
    }
}
