// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Construction options for the terminal façade, plus an optional
//! `serde`/`toml` deserialization path for hosts that want to load a subset
//! from a file, following the layered `Config`/`ConfigError` idiom used
//! elsewhere in this family of crates — but as a plain library function,
//! with no CLI wrapper.

use crate::cursor::CursorStyle;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    pub cols: usize,
    pub rows: usize,
    pub scrollback: usize,
    pub cursor_blink: bool,
    pub cursor_style: CursorStyle,
    pub theme: Theme,
    pub font_size: f32,
    pub font_family: String,
    pub allow_transparency: bool,
    pub wasm_path: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            scrollback: 1000,
            cursor_blink: false,
            cursor_style: CursorStyle::Block,
            theme: Theme::default(),
            font_size: 15.0,
            font_family: "monospace".to_string(),
            allow_transparency: false,
            wasm_path: None,
        }
    }
}

/// Named color slots a host theme may override; any entry left `None` falls
/// back to the built-in default for that slot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub cursor: Option<String>,
    pub cursor_accent: Option<String>,
    pub selection_background: Option<String>,
    pub selection_foreground: Option<String>,
    pub black: Option<String>,
    pub red: Option<String>,
    pub green: Option<String>,
    pub yellow: Option<String>,
    pub blue: Option<String>,
    pub magenta: Option<String>,
    pub cyan: Option<String>,
    pub white: Option<String>,
    pub bright_black: Option<String>,
    pub bright_red: Option<String>,
    pub bright_green: Option<String>,
    pub bright_yellow: Option<String>,
    pub bright_blue: Option<String>,
    pub bright_magenta: Option<String>,
    pub bright_cyan: Option<String>,
    pub bright_white: Option<String>,
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid options: {0}")]
    Validation(String),
}

impl Options {
    /// Parse a partial TOML document into [`Options`], leaving unspecified
    /// fields at their default. Only ever called by a host explicitly; the
    /// core never reads the filesystem on its own.
    pub fn from_toml_str(contents: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(contents)?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(OptionsError::Validation(
                "cols and rows must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_have_expected_values() {
        let o = Options::default();
        assert_eq!(o.cols, 80);
        assert_eq!(o.rows, 24);
        assert_eq!(o.scrollback, 1000);
        assert!(!o.cursor_blink);
    }

    #[test]
    fn partial_toml_overrides_only_given_fields() {
        let o = Options::from_toml_str("cols = 120\n").unwrap();
        assert_eq!(o.cols, 120);
        assert_eq!(o.rows, 24);
    }

    #[test]
    fn zero_dimensions_fail_validation() {
        let err = Options::from_toml_str("cols = 0\n").unwrap_err();
        assert!(matches!(err, OptionsError::Validation(_)));
    }
}
