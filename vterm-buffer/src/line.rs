// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A single grid row: exactly `cols` cells plus a `wrapped` flag. Resizing
//! is the sole mutator of line length — [`Line::set_width`] hard-truncates
//! or pads, it never reflows.

use crate::cell::Cell;
use vterm_common::attributes::Attributes;

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    cells: Vec<Cell>,
    /// Set when this logical line continues onto the row below it.
    pub wrapped: bool,
}

impl Line {
    #[must_use]
    pub fn blank(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| Cell::blank(Attributes::default())).collect(),
            wrapped: false,
        }
    }

    #[must_use]
    pub fn blank_with_attrs(cols: usize, attrs: &Attributes) -> Self {
        Self {
            cells: (0..cols).map(|_| Cell::blank(attrs.clone())).collect(),
            wrapped: false,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn set(&mut self, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(col) {
            *slot = cell;
        }
    }

    /// Hard-truncate (shrink) or right-pad with blank cells (grow) to
    /// `cols`. Never reflows existing content onto adjacent rows.
    pub fn set_width(&mut self, cols: usize, fill_attrs: &Attributes) {
        match cols.cmp(&self.cells.len()) {
            std::cmp::Ordering::Less => {
                self.cells.truncate(cols);
                // If truncation split a wide char from its padding, blank the
                // now-dangling wide head so no width-2 cell lacks its pair.
                if let Some(last) = self.cells.last()
                    && last.width == 2
                {
                    let attrs = last.attrs.clone();
                    if let Some(last_mut) = self.cells.last_mut() {
                        *last_mut = Cell::blank(attrs);
                    }
                }
            }
            std::cmp::Ordering::Greater => {
                self.cells
                    .resize_with(cols, || Cell::blank(fill_attrs.clone()));
            }
            std::cmp::Ordering::Equal => {}
        }
    }

    pub fn erase_range(&mut self, from: usize, to_exclusive: usize, attrs: &Attributes) {
        let end = to_exclusive.min(self.cells.len());
        for col in from..end {
            self.cells[col] = Cell::blank(attrs.clone());
        }
    }

    pub fn clear(&mut self, attrs: &Attributes) {
        let cols = self.cells.len();
        self.erase_range(0, cols, attrs);
        self.wrapped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_has_exact_width() {
        let line = Line::blank(10);
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn set_width_grow_pads_with_blanks() {
        let mut line = Line::blank(5);
        line.set_width(8, &Attributes::default());
        assert_eq!(line.len(), 8);
        assert_eq!(line.get(7).unwrap().codepoint, 0);
    }

    #[test]
    fn set_width_shrink_truncates_without_reflow() {
        let mut line = Line::blank(5);
        line.set(4, Cell::printable('x', 1, Attributes::default()));
        line.set_width(3, &Attributes::default());
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn shrink_blanks_dangling_wide_head() {
        let mut line = Line::blank(5);
        line.set(3, Cell::printable('\u{3042}', 2, Attributes::default()));
        line.set(4, Cell::padding(Attributes::default()));
        line.set_width(4, &Attributes::default());
        assert_eq!(line.get(3).unwrap().width, 1);
        assert_eq!(line.get(3).unwrap().codepoint, 0);
    }
}
