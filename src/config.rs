//! User configuration — persisted theme choice, tunables, and keybindings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/codedrift/config.toml` (default
//! `~/.config/codedrift/config.toml`).  The theme entry is the terminal
//! analogue of the original page remembering dark/light across visits.

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleTheme,
    TogglePause,
    Reseed,
    ToggleStatusBar,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used when serialising).
    pub const ALL: &[Action] = &[
        Action::ToggleTheme,
        Action::TogglePause,
        Action::Reseed,
        Action::ToggleStatusBar,
        Action::Quit,
    ];

    /// Human-readable label for the hint bar.
    pub fn label(self) -> &'static str {
        match self {
            Action::ToggleTheme => "theme",
            Action::TogglePause => "pause",
            Action::Reseed => "reseed",
            Action::ToggleStatusBar => "hide bar",
            Action::Quit => "quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ToggleTheme => "toggle_theme",
            Action::TogglePause => "toggle_pause",
            Action::Reseed => "reseed",
            Action::ToggleStatusBar => "toggle_status_bar",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "toggle_theme" => Some(Action::ToggleTheme),
            "toggle_pause" => Some(Action::TogglePause),
            "reseed" => Some(Action::Reseed),
            "toggle_status_bar" => Some(Action::ToggleStatusBar),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Ctrl+r"`, `"Space"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+r"`, `"Space"`, `"q"`, `"Esc"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            s if s.chars().count() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }

    /// Serialise to config-file format.  `display` already emits it.
    fn to_config_string(&self) -> String {
        self.display()
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — persisted settings and keybindings.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Remembered theme choice.  `true` = dark.
    pub dark_theme: bool,
    /// Terminal rows between animated lines.
    pub row_spacing: u16,
    /// Target frame interval in milliseconds.
    pub frame_ms: u64,
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(ToggleTheme, vec![KeyBind::new(Char('t'), n)]);
        m.insert(TogglePause, vec![KeyBind::new(Char(' '), n), KeyBind::new(Char('p'), n)]);
        m.insert(Reseed, vec![KeyBind::new(Char('r'), n)]);
        m.insert(ToggleStatusBar, vec![KeyBind::new(Char('b'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the hint bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the hint-bar string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        Action::ALL
            .iter()
            .map(|&a| format!("{}: {}", self.short_binding(a), a.label()))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::defaults()
    }

    /// Built-in defaults (dark theme, 3-row spacing, ~30 fps).
    pub fn defaults() -> Self {
        Self {
            bindings: Self::default_bindings(),
            dark_theme: true,
            row_spacing: 3,
            frame_ms: 33,
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::defaults();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "theme" => {
                    config.dark_theme = value == "dark";
                    continue;
                }
                "row_spacing" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.row_spacing = v.clamp(1, 16);
                    }
                    continue;
                }
                "frame_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        // ~6 fps to ~100 fps.
                        config.frame_ms = v.clamp(10, 160);
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                if let Some(bind) = KeyBind::parse(part) {
                    parsed.push(bind);
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# codedrift configuration".to_string(),
            String::new(),
            "# Appearance & pacing".to_string(),
            format!("theme = {}", if self.dark_theme { "dark" } else { "light" }),
            format!("row_spacing = {}", self.row_spacing),
            format!("frame_ms = {}", self.frame_ms),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Space, Enter, Esc, Tab".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/codedrift/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("codedrift").join("config.toml")
}
