// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The active grid pair, cursor, scroll region, tab stops, and dirty
//! tracking. Implements the operations the VT parser's dispatch contract
//! calls into.

use crate::cell::Cell;
use crate::line::Line;
use crate::scrollback::Scrollback;
use crate::tabstops::TabStops;
use std::collections::BTreeSet;
use vterm_common::attributes::Attributes;
use vterm_common::cursor::{Cursor, CursorPos};
use vterm_common::modes::{Mode, SetMode, TerminalModes};
use vterm_common::sgr::Sgr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Which {
    Primary,
    Alternate,
}

pub struct Screen {
    cols: usize,
    rows: usize,
    primary: Vec<Line>,
    alternate: Vec<Line>,
    scrollback: Scrollback,
    cursor: Cursor,
    saved_cursor: Option<vterm_common::cursor::SavedCursor>,
    modes: TerminalModes,
    scroll_top: usize,
    scroll_bottom: usize,
    tab_stops: TabStops,
    dirty: BTreeSet<usize>,
}

impl Screen {
    #[must_use]
    pub fn new(cols: usize, rows: usize, scrollback_capacity: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            primary: (0..rows).map(|_| Line::blank(cols)).collect(),
            alternate: (0..rows).map(|_| Line::blank(cols)).collect(),
            scrollback: Scrollback::new(scrollback_capacity),
            cursor: Cursor::default(),
            saved_cursor: None,
            modes: TerminalModes::default(),
            scroll_top: 0,
            scroll_bottom: rows.saturating_sub(1),
            tab_stops: TabStops::every_eight(cols),
            dirty: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub fn line_at(&self, row: usize) -> Option<&Line> {
        self.active().get(row)
    }

    #[must_use]
    pub fn scrollback_line_at(&self, n: usize) -> Option<&Line> {
        self.scrollback.line_at(n)
    }

    #[must_use]
    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    pub fn consume_dirty(&mut self) -> BTreeSet<usize> {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self, row: usize) {
        self.dirty.insert(row);
    }

    fn mark_all_dirty(&mut self) {
        for row in 0..self.rows {
            self.dirty.insert(row);
        }
    }

    const fn which(&self) -> Which {
        if self.modes.alternate_screen_active {
            Which::Alternate
        } else {
            Which::Primary
        }
    }

    fn active(&self) -> &[Line] {
        match self.which() {
            Which::Primary => &self.primary,
            Which::Alternate => &self.alternate,
        }
    }

    fn active_mut(&mut self) -> &mut Vec<Line> {
        match self.which() {
            Which::Primary => &mut self.primary,
            Which::Alternate => &mut self.alternate,
        }
    }

    fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.active_mut().get_mut(row)
    }

    // ------------------------------------------------------------------
    // Printing
    // ------------------------------------------------------------------

    /// Main print path. `width` is 1 or 2; width-0 combining marks are
    /// attached via [`Self::attach_combining`] instead.
    pub fn print(&mut self, ch: char, width: u8) {
        if width == 0 {
            return;
        }

        if self.cursor.pending_wrap && self.modes.auto_wrap {
            self.carriage_return();
            self.line_feed();
        }
        self.cursor.pending_wrap = false;

        let cols = self.cols;
        let col = self.cursor.pos.col;

        if width == 2 && col == cols.saturating_sub(1) {
            let attrs = self.cursor.attrs.clone();
            if self.modes.auto_wrap {
                self.carriage_return();
                self.line_feed();
                let row = self.cursor.pos.row;
                self.write_cell(row, 0, Cell::printable(ch, 2, attrs.clone()));
                self.write_cell(row, 1, Cell::padding(attrs));
                self.mark_dirty(row);
                self.advance_cursor(2);
            } else {
                let row = self.cursor.pos.row;
                self.write_cell(row, col, Cell::blank(attrs));
                self.mark_dirty(row);
                self.advance_cursor(1);
            }
            return;
        }

        let attrs = self.cursor.attrs.clone();
        if self.modes.insert_mode {
            self.shift_row_right(width);
        }
        let row = self.cursor.pos.row;
        self.write_cell(row, col, Cell::printable(ch, width, attrs.clone()));
        if width == 2 {
            self.write_cell(row, col + 1, Cell::padding(attrs));
        }
        self.mark_dirty(row);
        self.advance_cursor(width);
    }

    /// Attach a combining mark to the most recently printed cell's codepoint
    /// sequence rather than starting a new cell.
    pub fn attach_combining(&mut self, mark: char) {
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let target_col = if col == 0 { 0 } else { col - 1 };
        if let Some(line) = self.active_mut().get_mut(row)
            && let Some(cell) = line.cells_mut().get_mut(target_col)
        {
            cell.attach_combining(mark);
            self.mark_dirty(row);
        }
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(line) = self.active_mut().get_mut(row) {
            line.set(col, cell);
        }
    }

    fn advance_cursor(&mut self, width: u8) {
        let new_col = self.cursor.pos.col + usize::from(width);
        if new_col >= self.cols {
            self.cursor.pos.col = self.cols.saturating_sub(1);
            self.cursor.pending_wrap = true;
        } else {
            self.cursor.pos.col = new_col;
            self.cursor.pending_wrap = false;
        }
    }

    fn shift_row_right(&mut self, width: u8) {
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let cols = self.cols;
        let attrs = self.cursor.attrs.clone();
        let w = usize::from(width);
        let Some(line) = self.line_mut(row) else {
            return;
        };
        let mut idx = cols;
        while idx > col + w {
            if let Some(src) = line.get(idx - w - 1).cloned() {
                line.set(idx - 1, src);
            }
            idx -= 1;
        }
        for c in col..(col + w).min(cols) {
            line.set(c, Cell::blank(attrs.clone()));
        }
    }

    // ------------------------------------------------------------------
    // C0 controls
    // ------------------------------------------------------------------

    pub fn carriage_return(&mut self) {
        self.cursor.pos.col = 0;
        self.cursor.pending_wrap = false;
    }

    pub fn backspace(&mut self) {
        if self.cursor.pos.col > 0 {
            self.cursor.pos.col -= 1;
        }
        self.cursor.pending_wrap = false;
    }

    pub fn tab(&mut self) {
        let next = self.tab_stops.next_stop(self.cursor.pos.col, self.cols);
        self.cursor.pos.col = next;
        self.cursor.pending_wrap = false;
    }

    /// `LF` — moves down one row; scrolls the region up if already at
    /// `scroll_bottom`.
    pub fn line_feed(&mut self) {
        self.cursor.pending_wrap = false;
        if self.cursor.pos.row == self.scroll_bottom {
            self.scroll_region_up(1);
        } else if self.cursor.pos.row + 1 < self.rows {
            self.cursor.pos.row += 1;
        }
    }

    /// `RI` — reverse index, symmetric to `LF`.
    pub fn reverse_index(&mut self) {
        self.cursor.pending_wrap = false;
        if self.cursor.pos.row == self.scroll_top {
            self.scroll_region_down(1);
        } else if self.cursor.pos.row > 0 {
            self.cursor.pos.row -= 1;
        }
    }

    pub fn next_line(&mut self) {
        self.carriage_return();
        self.line_feed();
    }

    pub fn index(&mut self) {
        self.line_feed();
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    fn scroll_region_up(&mut self, n: usize) {
        for _ in 0..n {
            let top = self.scroll_top;
            let bottom = self.scroll_bottom;
            if top >= bottom || bottom >= self.rows {
                continue;
            }
            let retire_to_scrollback =
                top == 0 && matches!(self.which(), Which::Primary);
            let cols = self.cols;
            let rows = self.active_mut();
            let retired = rows.remove(top);
            if retire_to_scrollback {
                self.scrollback.push(retired);
            }
            let blank = Line::blank(cols);
            self.active_mut().insert(bottom, blank);
        }
        self.mark_all_dirty();
    }

    fn scroll_region_down(&mut self, n: usize) {
        for _ in 0..n {
            let top = self.scroll_top;
            let bottom = self.scroll_bottom;
            if top >= bottom || bottom >= self.rows {
                continue;
            }
            let cols = self.cols;
            let rows = self.active_mut();
            rows.remove(bottom);
            rows.insert(top, Line::blank(cols));
        }
        self.mark_all_dirty();
    }

    pub fn scroll_up(&mut self, n: u32) {
        self.scroll_region_up(n as usize);
    }

    pub fn scroll_down(&mut self, n: u32) {
        self.scroll_region_down(n as usize);
    }

    // ------------------------------------------------------------------
    // Cursor motion
    // ------------------------------------------------------------------

    pub fn cursor_up(&mut self, n: u32) {
        let limit = if self.modes.origin_mode { self.scroll_top } else { 0 };
        self.cursor.pos.row = self.cursor.pos.row.saturating_sub(n as usize).max(limit);
        self.cursor.pending_wrap = false;
    }

    pub fn cursor_down(&mut self, n: u32) {
        let limit = if self.modes.origin_mode {
            self.scroll_bottom
        } else {
            self.rows.saturating_sub(1)
        };
        self.cursor.pos.row = (self.cursor.pos.row + n as usize).min(limit);
        self.cursor.pending_wrap = false;
    }

    pub fn cursor_forward(&mut self, n: u32) {
        let max = self.cols.saturating_sub(1);
        self.cursor.pos.col = (self.cursor.pos.col + n as usize).min(max);
        self.cursor.pending_wrap = false;
    }

    pub fn cursor_back(&mut self, n: u32) {
        self.cursor.pos.col = self.cursor.pos.col.saturating_sub(n as usize);
        self.cursor.pending_wrap = false;
    }

    /// `H`/`f` — 1-based, origin-mode aware.
    pub fn cursor_position(&mut self, row: Option<u32>, col: Option<u32>) {
        let row0 = row.map_or(0, |r| (r as usize).saturating_sub(1));
        let col0 = col.map_or(0, |c| (c as usize).saturating_sub(1));
        if self.modes.origin_mode {
            self.cursor.pos.row = (self.scroll_top + row0).min(self.scroll_bottom);
        } else {
            self.cursor.pos.row = row0.min(self.rows.saturating_sub(1));
        }
        self.cursor.pos.col = col0.min(self.cols.saturating_sub(1));
        self.cursor.pending_wrap = false;
    }

    pub fn cursor_horizontal_absolute(&mut self, col: u32) {
        self.cursor.pos.col = (col as usize)
            .saturating_sub(1)
            .min(self.cols.saturating_sub(1));
        self.cursor.pending_wrap = false;
    }

    pub fn cursor_vertical_absolute(&mut self, row: u32) {
        let row0 = (row as usize).saturating_sub(1);
        self.cursor.pos.row = if self.modes.origin_mode {
            (self.scroll_top + row0).min(self.scroll_bottom)
        } else {
            row0.min(self.rows.saturating_sub(1))
        };
        self.cursor.pending_wrap = false;
    }

    // ------------------------------------------------------------------
    // Erase
    // ------------------------------------------------------------------

    fn erase_attrs(&self) -> Attributes {
        self.cursor.attrs.background_only()
    }

    pub fn erase_in_display(&mut self, mode: u32) {
        let attrs = self.erase_attrs();
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let cols = self.cols;
        match mode {
            0 => {
                if let Some(line) = self.line_mut(row) {
                    line.erase_range(col, cols, &attrs);
                }
                let rows = self.rows;
                for r in (row + 1)..rows {
                    if let Some(line) = self.line_mut(r) {
                        line.clear(&attrs);
                    }
                }
                self.mark_all_dirty();
            }
            1 => {
                for r in 0..row {
                    if let Some(line) = self.line_mut(r) {
                        line.clear(&attrs);
                    }
                }
                if let Some(line) = self.line_mut(row) {
                    line.erase_range(0, col + 1, &attrs);
                }
                self.mark_all_dirty();
            }
            2 => {
                let rows = self.rows;
                for r in 0..rows {
                    if let Some(line) = self.line_mut(r) {
                        line.clear(&attrs);
                    }
                }
                self.mark_all_dirty();
            }
            3 => {
                self.scrollback.clear();
                let rows = self.rows;
                for r in 0..rows {
                    if let Some(line) = self.line_mut(r) {
                        line.clear(&attrs);
                    }
                }
                self.mark_all_dirty();
            }
            _ => {}
        }
    }

    pub fn erase_in_line(&mut self, mode: u32) {
        let attrs = self.erase_attrs();
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let cols = self.cols;
        if let Some(line) = self.line_mut(row) {
            match mode {
                0 => line.erase_range(col, cols, &attrs),
                1 => line.erase_range(0, col + 1, &attrs),
                2 => line.clear(&attrs),
                _ => {}
            }
        }
        self.mark_dirty(row);
    }

    pub fn erase_chars(&mut self, n: u32) {
        let attrs = self.erase_attrs();
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let end = col.saturating_add(n.max(1) as usize);
        if let Some(line) = self.line_mut(row) {
            line.erase_range(col, end, &attrs);
        }
        self.mark_dirty(row);
    }

    // ------------------------------------------------------------------
    // Insert / delete lines and characters
    // ------------------------------------------------------------------

    pub fn insert_lines(&mut self, n: u32) {
        let row = self.cursor.pos.row;
        if row < self.scroll_top || row > self.scroll_bottom {
            return;
        }
        let cols = self.cols;
        for _ in 0..n.max(1) {
            self.active_mut().remove(self.scroll_bottom);
            self.active_mut().insert(row, Line::blank(cols));
        }
        self.mark_all_dirty();
    }

    pub fn delete_lines(&mut self, n: u32) {
        let row = self.cursor.pos.row;
        if row < self.scroll_top || row > self.scroll_bottom {
            return;
        }
        let cols = self.cols;
        for _ in 0..n.max(1) {
            self.active_mut().remove(row);
            self.active_mut().insert(self.scroll_bottom, Line::blank(cols));
        }
        self.mark_all_dirty();
    }

    pub fn insert_chars(&mut self, n: u32) {
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let cols = self.cols;
        let attrs = self.erase_attrs();
        let n = n.max(1) as usize;
        if let Some(line) = self.line_mut(row) {
            let mut idx = cols;
            while idx > col + n {
                if let Some(src) = line.get(idx - n - 1).cloned() {
                    line.set(idx - 1, src);
                }
                idx -= 1;
            }
            for c in col..(col + n).min(cols) {
                line.set(c, Cell::blank(attrs.clone()));
            }
        }
        self.mark_dirty(row);
    }

    pub fn delete_chars(&mut self, n: u32) {
        let row = self.cursor.pos.row;
        let col = self.cursor.pos.col;
        let cols = self.cols;
        let attrs = self.erase_attrs();
        let n = n.max(1) as usize;
        if let Some(line) = self.line_mut(row) {
            for c in col..cols {
                let src = line.get(c + n).cloned();
                match src {
                    Some(cell) => line.set(c, cell),
                    None => line.set(c, Cell::blank(attrs.clone())),
                }
            }
        }
        self.mark_dirty(row);
    }

    // ------------------------------------------------------------------
    // Scroll region, tab stops, modes
    // ------------------------------------------------------------------

    pub fn set_scroll_region(&mut self, top: Option<u32>, bottom: Option<u32>) {
        let top0 = top.map_or(0, |t| (t as usize).saturating_sub(1));
        let bottom0 = bottom.map_or(self.rows.saturating_sub(1), |b| {
            (b as usize).saturating_sub(1)
        });
        if top0 >= bottom0 || bottom0 >= self.rows {
            self.reset_scroll_region();
            return;
        }
        self.scroll_top = top0;
        self.scroll_bottom = bottom0;
        self.cursor.pos.row = self.scroll_top;
        self.cursor.pos.col = 0;
        self.cursor.pending_wrap = false;
    }

    fn reset_scroll_region(&mut self) {
        self.scroll_top = 0;
        self.scroll_bottom = self.rows.saturating_sub(1);
    }

    pub fn set_tab_stop(&mut self) {
        self.tab_stops.set(self.cursor.pos.col);
    }

    pub fn clear_tab_stop(&mut self) {
        self.tab_stops.clear(self.cursor.pos.col);
    }

    pub fn clear_all_tab_stops(&mut self) {
        self.tab_stops.clear_all();
    }

    pub fn set_mode(&mut self, mode: Mode, set: SetMode) {
        let on = matches!(set, SetMode::Set);
        match mode {
            Mode::ApplicationCursorKeys => self.modes.application_cursor_keys = on,
            Mode::AutoWrap => self.modes.auto_wrap = on,
            Mode::CursorVisible => {
                self.modes.cursor_visible = on;
                self.cursor.visible = on;
            }
            Mode::InsertMode => self.modes.insert_mode = on,
            Mode::BracketedPaste => self.modes.bracketed_paste = on,
            Mode::AlternateScreen => {
                if on {
                    self.enter_alternate(false);
                } else {
                    self.leave_alternate(false);
                }
            }
            Mode::AlternateScreenSaveCursor => {
                if on {
                    self.enter_alternate(true);
                } else {
                    self.leave_alternate(true);
                }
            }
            Mode::OriginMode => {
                self.modes.origin_mode = on;
                if on {
                    self.cursor.pos.row = self.scroll_top;
                } else {
                    self.cursor.pos.row = 0;
                }
                self.cursor.pos.col = 0;
                self.cursor.pending_wrap = false;
            }
            Mode::Unknown => {}
        }
    }

    #[must_use]
    pub const fn modes(&self) -> &TerminalModes {
        &self.modes
    }

    // ------------------------------------------------------------------
    // SGR
    // ------------------------------------------------------------------

    pub fn apply_sgr(&mut self, params: &[Sgr]) {
        for sgr in params {
            sgr.apply(&mut self.cursor.attrs);
        }
    }

    // ------------------------------------------------------------------
    // Save/restore cursor (DECSC/DECRC and CSI s/u)
    // ------------------------------------------------------------------

    pub fn save_cursor(&mut self) {
        self.saved_cursor = Some(self.cursor.save(self.modes.origin_mode));
    }

    pub fn restore_cursor(&mut self) {
        if let Some(saved) = self.saved_cursor.clone() {
            self.cursor.restore(&saved);
            self.modes.origin_mode = saved.origin_mode;
        }
    }

    // ------------------------------------------------------------------
    // Alternate screen
    // ------------------------------------------------------------------

    fn enter_alternate(&mut self, save_cursor: bool) {
        if self.modes.alternate_screen_active {
            return;
        }
        if save_cursor {
            self.save_cursor();
        }
        self.modes.alternate_screen_active = true;
        let cols = self.cols;
        self.alternate = (0..self.rows).map(|_| Line::blank(cols)).collect();
        self.cursor = Cursor::default();
        self.reset_scroll_region();
        self.mark_all_dirty();
    }

    fn leave_alternate(&mut self, restore_cursor: bool) {
        if !self.modes.alternate_screen_active {
            return;
        }
        self.modes.alternate_screen_active = false;
        if restore_cursor {
            self.restore_cursor();
        }
        self.mark_all_dirty();
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Returns `true` if the dimensions actually changed.
    pub fn resize(&mut self, cols: usize, rows: usize) -> bool {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if cols == self.cols && rows == self.rows {
            return false;
        }

        self.resize_rows(rows);
        self.resize_cols(cols);

        self.cols = cols;
        self.rows = rows;
        self.reset_scroll_region();
        self.tab_stops.reset(cols);
        self.cursor.pos.col = self.cursor.pos.col.min(cols.saturating_sub(1));
        self.cursor.pos.row = self.cursor.pos.row.min(rows.saturating_sub(1));
        self.mark_all_dirty();
        true
    }

    fn resize_cols(&mut self, cols: usize) {
        let attrs = Attributes::default();
        for line in self.primary.iter_mut().chain(self.alternate.iter_mut()) {
            line.set_width(cols, &attrs);
        }
    }

    fn resize_rows(&mut self, new_rows: usize) {
        match new_rows.cmp(&self.rows) {
            std::cmp::Ordering::Greater => {
                let grown = new_rows - self.rows;
                let cols = self.cols;
                self.alternate
                    .extend((0..grown).map(|_| Line::blank(cols)));
                self.primary.extend((0..grown).map(|_| Line::blank(cols)));

                // Resolved open question: pull from the tail of scrollback
                // (most-recently-retired first) to keep the cursor in view.
                let pull = grown.min(self.scrollback.len());
                for _ in 0..pull {
                    if let Some(line) = self.scrollback.pop_most_recent() {
                        self.primary.insert(0, line);
                        self.cursor.pos.row += 1;
                    }
                }
                // Grid length is now rows_old + grown + pull; trim the
                // oldest synthesized blank rows back down to rows_old + grown.
                while self.primary.len() > self.rows + grown {
                    self.primary.remove(self.rows + grown);
                }
            }
            std::cmp::Ordering::Less => {
                let shrink = self.rows - new_rows;
                for _ in 0..shrink {
                    if self.primary.len() <= new_rows {
                        break;
                    }
                    let retired = self.primary.remove(0);
                    self.scrollback.push(retired);
                    self.cursor.pos.row = self.cursor.pos.row.saturating_sub(1);
                }
                while self.alternate.len() > new_rows {
                    self.alternate.remove(0);
                }
            }
            std::cmp::Ordering::Equal => {}
        }
    }

    // ------------------------------------------------------------------
    // Full reset (RIS)
    // ------------------------------------------------------------------

    pub fn reset(&mut self) {
        let cols = self.cols;
        let rows = self.rows;
        self.primary = (0..rows).map(|_| Line::blank(cols)).collect();
        self.alternate = (0..rows).map(|_| Line::blank(cols)).collect();
        self.scrollback.clear();
        self.cursor = Cursor::default();
        self.cursor.pos = CursorPos::default();
        self.saved_cursor = None;
        self.modes = TerminalModes::default();
        self.reset_scroll_region();
        self.tab_stops = TabStops::every_eight(cols);
        self.mark_all_dirty();
    }

    /// Erase the visible grid only, keeping scrollback — the façade's
    /// `clear` operation.
    pub fn clear_visible(&mut self) {
        let attrs = self.erase_attrs();
        let rows = self.rows;
        for r in 0..rows {
            if let Some(line) = self.line_mut(r) {
                line.clear(&attrs);
            }
        }
        self.cursor.pos = CursorPos::default();
        self.cursor.pending_wrap = false;
        self.mark_all_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_write_moves_cursor_and_marks_dirty() {
        let mut screen = Screen::new(80, 24, 100);
        for ch in "Hello".chars() {
            screen.print(ch, 1);
        }
        assert_eq!(screen.cursor().pos, CursorPos { col: 5, row: 0 });
        let dirty = screen.consume_dirty();
        assert!(dirty.contains(&0));
    }

    #[test]
    fn pending_wrap_defers_until_next_printable() {
        let mut screen = Screen::new(5, 3, 10);
        for ch in "ABCDE".chars() {
            screen.print(ch, 1);
        }
        assert_eq!(screen.cursor().pos, CursorPos { col: 4, row: 0 });
        assert!(screen.cursor().pending_wrap);
        screen.print('F', 1);
        assert_eq!(screen.cursor().pos, CursorPos { col: 1, row: 1 });
    }

    #[test]
    fn wide_char_wraps_without_splitting() {
        let mut screen = Screen::new(5, 3, 10);
        for ch in "ABCD".chars() {
            screen.print(ch, 1);
        }
        screen.print('\u{3042}', 2);
        assert_eq!(screen.line_at(0).unwrap().get(4).unwrap().codepoint, 0);
        let row1 = screen.line_at(1).unwrap();
        assert_eq!(row1.get(0).unwrap().width, 2);
        assert_eq!(row1.get(1).unwrap().width, 0);
    }

    #[test]
    fn line_feed_at_bottom_scrolls_region_and_retires_to_scrollback() {
        let mut screen = Screen::new(5, 2, 10);
        screen.print('A', 1);
        screen.line_feed();
        screen.line_feed();
        assert_eq!(screen.scrollback_line_at(0).unwrap().get(0).unwrap().codepoint, u32::from('A'));
    }

    #[test]
    fn scroll_region_bounds_insert_delete_lines() {
        let mut screen = Screen::new(5, 5, 10);
        screen.set_scroll_region(Some(2), Some(4));
        screen.cursor_position(Some(5), Some(1));
        screen.insert_lines(1);
        // cursor row 4 (0-based) is inside region [1,3]? row0=4 -> outside region top=1,bottom=3
        // so insert_lines should be a no-op here; just assert no panic and dims held
        assert_eq!(screen.dimensions(), (5, 5));
    }

    #[test]
    fn resize_hard_truncates_without_reflow() {
        let mut screen = Screen::new(5, 3, 10);
        for ch in "ABCDE".chars() {
            screen.print(ch, 1);
        }
        assert!(screen.resize(3, 3));
        assert_eq!(screen.line_at(0).unwrap().len(), 3);
    }

    #[test]
    fn resize_same_dims_is_noop() {
        let mut screen = Screen::new(5, 3, 10);
        assert!(!screen.resize(5, 3));
    }

    #[test]
    fn alternate_screen_round_trips_primary_contents() {
        let mut screen = Screen::new(5, 3, 10);
        screen.print('A', 1);
        let before = screen.line_at(0).unwrap().clone();
        screen.set_mode(Mode::AlternateScreenSaveCursor, SetMode::Set);
        screen.print('Z', 1);
        screen.set_mode(Mode::AlternateScreenSaveCursor, SetMode::Reset);
        assert_eq!(screen.line_at(0).unwrap(), &before);
    }

    #[test]
    fn origin_mode_confines_cursor_motion_to_the_scroll_region() {
        let mut screen = Screen::new(5, 10, 10);
        screen.set_scroll_region(Some(3), Some(6));
        screen.set_mode(Mode::OriginMode, SetMode::Set);
        assert_eq!(screen.cursor().pos, CursorPos { col: 0, row: 2 });
        screen.cursor_up(5);
        assert_eq!(screen.cursor().pos.row, 2);
        screen.cursor_down(20);
        assert_eq!(screen.cursor().pos.row, 5);
        screen.set_mode(Mode::OriginMode, SetMode::Reset);
        screen.cursor_down(20);
        assert_eq!(screen.cursor().pos.row, 9);
    }

    #[test]
    fn erase_in_line_uses_background_only_attrs() {
        let mut screen = Screen::new(5, 3, 10);
        use vterm_common::colors::Color;
        screen.apply_sgr(&[Sgr::Foreground(Color::RED), Sgr::SetFlag(
            vterm_common::attributes::StyleFlags::BOLD,
        )]);
        screen.erase_in_line(2);
        let cell = screen.line_at(0).unwrap().get(0).unwrap();
        assert_eq!(cell.attrs.fg, Color::Default);
        assert!(cell.attrs.flags.is_empty());
    }
}
