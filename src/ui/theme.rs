//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes come either from the built-in Catppuccin palettes shipped in
//! `themes/` or from a custom TOML file. Colors are hex strings converted to
//! 24-bit ANSI escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! card_accent = "#cba6f7"
//! status_loading = "#f9e2af"
//! status_success = "#a6e3a1"
//! status_error = "#f38ba8"
//! ```

use crate::app::StatusKind;
use crate::domain::{Result, UserdeckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, email and location lines).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Filter match highlight foreground.
    pub match_highlight_fg: String,
    /// Filter match highlight background.
    pub match_highlight_bg: String,

    /// Placeholder message color.
    pub empty_state_fg: String,

    /// Avatar badge and card edge color.
    pub card_accent: String,

    /// Status line color while a load is in flight.
    pub status_loading: String,
    /// Status line color after a successful load or filter.
    pub status_success: String,
    /// Status line color after a failed load.
    pub status_error: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use userdeck::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Theme`] if the file cannot be read or its
    /// content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| UserdeckError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| UserdeckError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the status line color for a status kind.
    #[must_use]
    pub fn status_color(&self, kind: StatusKind) -> &str {
        match kind {
            StatusKind::Neutral => &self.colors.text_dim,
            StatusKind::Loading => &self.colors.status_loading,
            StatusKind::Success => &self.colors.status_success,
            StatusKind::Error => &self.colors.status_error,
        }
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the test suite rules out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_truecolor_sequences() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let builtin = include_str!("../../themes/catppuccin-frappe.toml")
            .replace("catppuccin-frappe", "custom");
        file.write_all(builtin.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.status_color(StatusKind::Error), "#e78284");
    }

    #[test]
    fn incomplete_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nheader_fg = \"#000000\"\n")
            .unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, UserdeckError::Theme(_)));
    }
}
