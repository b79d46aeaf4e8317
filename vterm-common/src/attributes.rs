// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-cell style attributes: colors plus a bitset of style flags.

use crate::colors::Color;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
    pub struct StyleFlags: u16 {
        const BOLD          = 1 << 0;
        const DIM            = 1 << 1;
        const ITALIC         = 1 << 2;
        const UNDERLINE      = 1 << 3;
        const BLINK          = 1 << 4;
        const INVERSE        = 1 << 5;
        const INVISIBLE      = 1 << 6;
        const STRIKETHROUGH  = 1 << 7;
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Attributes {
    pub fg: Color,
    pub bg: Color,
    pub underline_color: Color,
    pub flags: StyleFlags,
    /// Reserved hyperlink slot for host extension; this core never populates it.
    pub url: Option<String>,
}

impl Attributes {
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Attributes carrying only the background, used by erase operations —
    /// erased cells keep only the current background, not the full SGR
    /// state.
    #[must_use]
    pub fn background_only(&self) -> Self {
        Self {
            bg: self.bg,
            ..Self::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attributes_are_default() {
        assert!(Attributes::default().is_default());
    }

    #[test]
    fn background_only_drops_fg_and_flags() {
        let mut a = Attributes::default();
        a.fg = Color::RED;
        a.bg = Color::BLUE;
        a.flags = StyleFlags::BOLD;
        let erased = a.background_only();
        assert_eq!(erased.fg, Color::Default);
        assert_eq!(erased.bg, Color::BLUE);
        assert!(erased.flags.is_empty());
    }
}
