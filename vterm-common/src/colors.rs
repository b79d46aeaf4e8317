// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Color model: a tagged value — default, an 8/256-color palette index, or
//! a 24-bit RGB triple. Resolution of a
//! palette index to an actual RGB triple (e.g. for a renderer) is left to
//! the host via [`resolve_indexed_to_rgb`]; this core never resolves a
//! `Color::Indexed` internally so that host themes remain in control of the
//! first 16 slots.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Color {
    #[default]
    Default,
    /// Palette index 0-255: 0-7 standard, 8-15 bright, 16-255 xterm 256-color cube/grayscale.
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);

    #[must_use]
    pub const fn bright(self) -> Self {
        match self {
            Self::Indexed(n) if n < 8 => Self::Indexed(n + 8),
            other => other,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Indexed(n) => write!(f, "indexed({n})"),
            Self::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
        }
    }
}

/// Resolve a 256-color palette index to an RGB triple using the standard
/// xterm cube/grayscale layout. Indices 0-15 resolve to the 16 standard ANSI
/// slots' *conventional* RGB values; a host with a custom theme should
/// prefer its own theme table for those instead of this function.
#[must_use]
pub fn resolve_indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    const STANDARD: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (205, 0, 0),
        (0, 205, 0),
        (205, 205, 0),
        (0, 0, 238),
        (205, 0, 205),
        (0, 205, 205),
        (229, 229, 229),
        (127, 127, 127),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (92, 92, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];

    match index {
        0..=15 => STANDARD[index as usize],
        232..=255 => {
            let v = 8 + 10 * u16::from(index - 232);
            let v = u8::try_from(v).unwrap_or(u8::MAX);
            (v, v, v)
        }
        _ => {
            let r = cube_component(index, 36);
            let g = cube_component(index, 6);
            let b = cube_component(index, 1);
            (r, g, b)
        }
    }
}

#[must_use]
const fn cube_component(index: u8, modifier: u8) -> u8 {
    let i = ((index - 16) / modifier) % 6;
    if i == 0 { 0 } else { 55 + 40 * i }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_maps_standard_slots_only() {
        assert_eq!(Color::RED.bright(), Color::Indexed(9));
        assert_eq!(Color::Indexed(200).bright(), Color::Indexed(200));
        assert_eq!(Color::Default.bright(), Color::Default);
    }

    #[test]
    fn grayscale_ramp_is_monotonic() {
        let first = resolve_indexed_to_rgb(232);
        let last = resolve_indexed_to_rgb(255);
        assert!(first.0 < last.0);
    }

    #[test]
    fn cube_zero_component_is_black() {
        assert_eq!(resolve_indexed_to_rgb(16), (0, 0, 0));
    }
}
