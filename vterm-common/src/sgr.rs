// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Select Graphic Rendition parameter model: parameters are applied
//! left-to-right, `0` resets defaults, style-setting/clearing params toggle
//! [`StyleFlags`] bits, and
//! `30-37/90-97`/`40-47/100-107`/`38;5;n`/`48;5;n`/`38;2;r;g;b`/`48;2;r;g;b`
//! set foreground/background colors. Unknown parameters are skipped without
//! aborting the sequence.

use crate::attributes::{Attributes, StyleFlags};
use crate::colors::Color;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sgr {
    Reset,
    SetFlag(StyleFlags),
    ClearFlag(StyleFlags),
    Foreground(Color),
    Background(Color),
    UnderlineColor(Color),
    Unknown(u32),
}

impl Sgr {
    #[must_use]
    pub const fn from_param(param: u32) -> Self {
        match param {
            0 => Self::Reset,
            1 => Self::SetFlag(StyleFlags::BOLD),
            2 => Self::SetFlag(StyleFlags::DIM),
            3 => Self::SetFlag(StyleFlags::ITALIC),
            4 => Self::SetFlag(StyleFlags::UNDERLINE),
            5 => Self::SetFlag(StyleFlags::BLINK),
            7 => Self::SetFlag(StyleFlags::INVERSE),
            8 => Self::SetFlag(StyleFlags::INVISIBLE),
            9 => Self::SetFlag(StyleFlags::STRIKETHROUGH),
            22 => Self::ClearFlag(StyleFlags::from_bits_truncate(
                StyleFlags::BOLD.bits() | StyleFlags::DIM.bits(),
            )),
            23 => Self::ClearFlag(StyleFlags::ITALIC),
            24 => Self::ClearFlag(StyleFlags::UNDERLINE),
            25 => Self::ClearFlag(StyleFlags::BLINK),
            27 => Self::ClearFlag(StyleFlags::INVERSE),
            28 => Self::ClearFlag(StyleFlags::INVISIBLE),
            29 => Self::ClearFlag(StyleFlags::STRIKETHROUGH),
            30..=37 => Self::Foreground(Color::Indexed((param - 30) as u8)),
            39 => Self::Foreground(Color::Default),
            40..=47 => Self::Background(Color::Indexed((param - 40) as u8)),
            49 => Self::Background(Color::Default),
            59 => Self::UnderlineColor(Color::Default),
            90..=97 => Self::Foreground(Color::Indexed((param - 90) as u8 + 8)),
            100..=107 => Self::Background(Color::Indexed((param - 100) as u8 + 8)),
            other => Self::Unknown(other),
        }
    }

    /// Builds the foreground/background/underline-color SGR emitted by the
    /// `38;5;n` / `48;5;n` / `38;2;r;g;b` / `48;2;r;g;b` / `58;...` forms.
    /// `channel` is 38 (foreground), 48 (background), or 58 (underline).
    #[must_use]
    pub const fn custom_color(channel: u32, color: Color) -> Self {
        match channel {
            48 => Self::Background(color),
            58 => Self::UnderlineColor(color),
            _ => Self::Foreground(color),
        }
    }

    pub fn apply(self, attrs: &mut Attributes) {
        match self {
            Self::Reset => attrs.reset(),
            Self::SetFlag(f) => attrs.flags.insert(f),
            Self::ClearFlag(f) => attrs.flags.remove(f),
            Self::Foreground(c) => attrs.fg = c,
            Self::Background(c) => attrs.bg = c,
            Self::UnderlineColor(c) => attrs.underline_color = c,
            Self::Unknown(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_then_reset_round_trips() {
        let mut attrs = Attributes::default();
        Sgr::from_param(1).apply(&mut attrs);
        assert!(attrs.flags.contains(StyleFlags::BOLD));
        Sgr::from_param(0).apply(&mut attrs);
        assert!(attrs.is_default());
    }

    #[test]
    fn bright_foreground_maps_to_indexed_8_15() {
        assert_eq!(Sgr::from_param(91), Sgr::Foreground(Color::Indexed(9)));
    }

    #[test]
    fn unknown_param_does_not_mutate() {
        let mut attrs = Attributes::default();
        attrs.fg = Color::RED;
        Sgr::from_param(12345).apply(&mut attrs);
        assert_eq!(attrs.fg, Color::RED);
    }
}
