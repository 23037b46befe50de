//! Styling for the filter screen.
//!
//! Selection highlighting uses modifiers only, so it stays visible with
//! colors disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Explicitly enable or disable color.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== FilterStyles =====

/// Styles for the result pane, separator and input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStyles {
    /// Row under the cursor.
    pub selected: Style,
    /// Every other record row.
    pub unselected: Style,
    /// Separator line.
    pub separator: Style,
    /// Match counter on the separator.
    pub counter: Style,
    /// Input prompt.
    pub prompt: Style,
    /// Typed pattern text.
    pub pattern: Style,
}

impl FilterStyles {
    /// Create styles honouring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }

    /// Create styles for the given color configuration.
    ///
    /// If colors are disabled only modifiers are applied.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let selected = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        if config.colors_enabled() {
            Self {
                selected,
                unselected: Style::default(),
                separator: Style::default().fg(Color::DarkGray),
                counter: Style::default().fg(Color::Yellow),
                prompt: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                pattern: Style::default(),
            }
        } else {
            Self {
                selected,
                unselected: Style::default(),
                separator: Style::default(),
                counter: Style::default(),
                prompt: Style::default().add_modifier(Modifier::BOLD),
                pattern: Style::default(),
            }
        }
    }
}

impl Default for FilterStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
