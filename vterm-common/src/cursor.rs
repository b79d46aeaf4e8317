// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cursor position and saved-cursor state: the `Cursor`/`SavedCursor` data
//! model.

use crate::attributes::Attributes;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct CursorPos {
    pub col: usize,
    pub row: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Block,
    Underline,
    Bar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cursor {
    pub pos: CursorPos,
    /// Set when the last write landed on the rightmost column; deferred
    /// until the next printable write (the pending-wrap rule).
    pub pending_wrap: bool,
    pub attrs: Attributes,
    pub visible: bool,
    pub blink: bool,
    pub style: CursorStyle,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            pos: CursorPos::default(),
            pending_wrap: false,
            attrs: Attributes::default(),
            visible: true,
            blink: false,
            style: CursorStyle::default(),
        }
    }
}

/// Recorded by `DECSC` (`ESC 7`), restored by `DECRC` (`ESC 8`).
#[derive(Clone, Debug, PartialEq)]
pub struct SavedCursor {
    pub pos: CursorPos,
    pub attrs: Attributes,
    pub origin_mode: bool,
}

impl Cursor {
    #[must_use]
    pub fn save(&self, origin_mode: bool) -> SavedCursor {
        SavedCursor {
            pos: self.pos,
            attrs: self.attrs.clone(),
            origin_mode,
        }
    }

    pub fn restore(&mut self, saved: &SavedCursor) {
        self.pos = saved.pos;
        self.attrs = saved.attrs.clone();
        self.pending_wrap = false;
    }
}
