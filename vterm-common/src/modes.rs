// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Terminal mode flags addressed by CSI `h`/`l` (DEC private and ANSI),
//! trimmed to the set the screen buffer tracks: origin mode, application
//! cursor keys, DECAWM, DECTCEM, IRM, bracketed paste, and the
//! alternate-screen switch.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetMode {
    Set,
    Reset,
}

/// A closed set of the modes this core understands; anything else parses to
/// `Unknown` and is a no-op, absorbing malformed or unrecognized input
/// silently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    ApplicationCursorKeys,
    AutoWrap,
    CursorVisible,
    InsertMode,
    BracketedPaste,
    AlternateScreen,
    AlternateScreenSaveCursor,
    OriginMode,
    Unknown,
}

impl Mode {
    /// Classify a CSI private-mode parameter byte string (e.g. `b"?7"`,
    /// `b"?1049"`, `b"4"`) into a known [`Mode`].
    #[must_use]
    pub fn from_param(raw: &[u8]) -> Self {
        match raw {
            b"?1" => Self::ApplicationCursorKeys,
            b"?6" => Self::OriginMode,
            b"?7" => Self::AutoWrap,
            b"?25" => Self::CursorVisible,
            b"4" => Self::InsertMode,
            b"?2004" => Self::BracketedPaste,
            b"?47" | b"?1047" => Self::AlternateScreen,
            b"?1049" => Self::AlternateScreenSaveCursor,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ApplicationCursorKeys => "application cursor keys",
            Self::AutoWrap => "auto-wrap",
            Self::CursorVisible => "cursor visible",
            Self::InsertMode => "insert mode",
            Self::BracketedPaste => "bracketed paste",
            Self::AlternateScreen => "alternate screen",
            Self::AlternateScreenSaveCursor => "alternate screen (save cursor)",
            Self::OriginMode => "origin mode",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Bundle of mode flags carried on the screen's state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TerminalModes {
    pub origin_mode: bool,
    pub auto_wrap: bool,
    pub insert_mode: bool,
    pub application_cursor_keys: bool,
    pub cursor_visible: bool,
    pub bracketed_paste: bool,
    pub alternate_screen_active: bool,
}

impl Default for TerminalModes {
    fn default() -> Self {
        Self {
            origin_mode: false,
            auto_wrap: true,
            insert_mode: false,
            application_cursor_keys: false,
            cursor_visible: true,
            bracketed_paste: false,
            alternate_screen_active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_auto_wrap_is_on() {
        assert!(TerminalModes::default().auto_wrap);
    }

    #[test]
    fn unrecognized_param_is_unknown() {
        assert_eq!(Mode::from_param(b"?9999"), Mode::Unknown);
    }

    #[test]
    fn param_6_is_origin_mode() {
        assert_eq!(Mode::from_param(b"?6"), Mode::OriginMode);
    }
}
