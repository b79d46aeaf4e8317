// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use proptest::prelude::*;
use vterm_buffer::screen::Screen;

proptest! {
    /// A random stream of cursor/scroll-region/erase operations must never
    /// panic and must never leave the grid at the wrong dimensions,
    /// regardless of how the scroll region is juggled mid-stream.
    #[test]
    fn decstbm_random_ops_do_not_panic(
        cols in 2usize..15,
        rows in 2usize..15,
        ops in prop::collection::vec(0u8..=9, 10..200),
    ) {
        let mut screen = Screen::new(cols, rows, 32);
        for op in ops {
            match op {
                0 => screen.print('x', 1),
                1 => screen.carriage_return(),
                2 => screen.line_feed(),
                3 => screen.reverse_index(),
                4 => screen.set_scroll_region(Some(1), Some(rows as u32)),
                5 => screen.set_scroll_region(Some(2), Some((rows as u32).saturating_sub(1).max(1))),
                6 => screen.cursor_position(Some(1), Some(1)),
                7 => screen.erase_in_display(0),
                8 => screen.insert_lines(1),
                _ => screen.delete_lines(1),
            }
        }
        prop_assert_eq!(screen.dimensions(), (cols, rows));
    }
}
