// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Selection over the active grid. Scoped to the visible screen only — it
//! does not span into scrollback.

use vterm_buffer::screen::Screen;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

impl Anchor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Range {
    pub start: Anchor,
    pub end: Anchor,
}

impl Range {
    #[must_use]
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        if (self.start.row, self.start.col) <= (self.end.row, self.end.col) {
            self
        } else {
            Self { start: self.end, end: self.start }
        }
    }

    /// The single cell (or wide-character pair) under `pos`.
    #[must_use]
    pub fn char_at(pos: Anchor, screen: &Screen) -> Self {
        let (cols, _) = screen.dimensions();
        if cols == 0 {
            return Self::new(pos, pos);
        }
        let col = pos.col.min(cols - 1);
        let lead = normalize_to_wide_lead(pos.row, col, screen);
        let end_col = wide_end_col(pos.row, lead, screen, cols);
        Self::new(Anchor::new(pos.row, lead), Anchor::new(pos.row, end_col))
    }

    /// The entire row.
    #[must_use]
    pub fn row_at(row: usize, screen: &Screen) -> Self {
        let (cols, rows) = screen.dimensions();
        if cols == 0 || rows == 0 {
            return Self::new(Anchor::new(row, 0), Anchor::new(row, 0));
        }
        let row = row.min(rows - 1);
        Self::new(Anchor::new(row, 0), Anchor::new(row, cols - 1))
    }

    /// Every row of the active grid.
    #[must_use]
    pub fn all(screen: &Screen) -> Self {
        let (cols, rows) = screen.dimensions();
        if cols == 0 || rows == 0 {
            return Self::new(Anchor::new(0, 0), Anchor::new(0, 0));
        }
        Self::new(Anchor::new(0, 0), Anchor::new(rows - 1, cols - 1))
    }

    /// A contiguous run of `is_word_char` cells around `pos`. Returns `None`
    /// if `pos` is not itself a word character — no word is selected.
    #[must_use]
    pub fn word_at(pos: Anchor, screen: &Screen) -> Option<Self> {
        let (cols, rows) = screen.dimensions();
        if cols == 0 || rows == 0 {
            return None;
        }
        let row = pos.row.min(rows - 1);
        let col = normalize_to_wide_lead(row, pos.col.min(cols - 1), screen);

        let ch = cell_char(row, col, screen).unwrap_or(' ');
        let class = classify(ch);
        if class != CharClass::Word {
            return None;
        }

        let mut start_col = col;
        let mut end_col = wide_end_col(row, col, screen, cols);

        while start_col > 0 {
            let probe = normalize_to_wide_lead(row, start_col - 1, screen);
            if classify(cell_char(row, probe, screen).unwrap_or(' ')) != class {
                break;
            }
            start_col = probe;
        }

        loop {
            let next = end_col.saturating_add(1);
            if next >= cols {
                break;
            }
            let next = normalize_to_wide_lead(row, next, screen);
            if classify(cell_char(row, next, screen).unwrap_or(' ')) != class {
                break;
            }
            end_col = wide_end_col(row, next, screen, cols);
            if end_col >= cols - 1 {
                break;
            }
        }

        Some(Self::new(Anchor::new(row, start_col), Anchor::new(row, end_col)))
    }

    /// Extracted text; wide continuation cells are skipped and one `\n` is
    /// inserted between rows unless the following row is a soft-wrap
    /// continuation. Trailing spaces are preserved, not trimmed.
    #[must_use]
    pub fn extract_text(&self, screen: &Screen) -> String {
        let (cols, rows) = screen.dimensions();
        if cols == 0 || rows == 0 {
            return String::new();
        }
        let sel = self.normalized();
        let start_row = sel.start.row.min(rows - 1);
        let end_row = sel.end.row.min(rows - 1);

        let mut out = String::new();
        for row in start_row..=end_row {
            let sc = if row == start_row { sel.start.col.min(cols - 1) } else { 0 };
            let ec = if row == end_row { sel.end.col.min(cols - 1) } else { cols - 1 };

            if sc <= ec {
                if let Some(line) = screen.line_at(row) {
                    for col in sc..=ec {
                        match line.get(col) {
                            Some(cell) if cell.is_padding() => {}
                            Some(cell) => out.push(cell.base_char()),
                            None => out.push(' '),
                        }
                    }
                }
            }

            if row != end_row && !next_row_is_wrap_continuation(row + 1, screen) {
                out.push('\n');
            } else if row != end_row {
                // soft-wrapped: no newline inserted
            }
        }
        out
    }
}

fn next_row_is_wrap_continuation(row: usize, screen: &Screen) -> bool {
    screen.line_at(row).is_some_and(|l| l.wrapped)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Word,
    Whitespace,
    Other,
}

fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if is_word_char(ch) {
        CharClass::Word
    } else {
        CharClass::Other
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-')
}

fn cell_char(row: usize, col: usize, screen: &Screen) -> Option<char> {
    screen.line_at(row).and_then(|l| l.get(col)).map(vterm_buffer::cell::Cell::base_char)
}

fn normalize_to_wide_lead(row: usize, col: usize, screen: &Screen) -> usize {
    if col == 0 {
        return col;
    }
    match screen.line_at(row).and_then(|l| l.get(col)) {
        Some(cell) if cell.is_padding() => col - 1,
        _ => col,
    }
}

fn wide_end_col(row: usize, lead_col: usize, screen: &Screen, cols: usize) -> usize {
    match screen.line_at(row).and_then(|l| l.get(lead_col)) {
        Some(cell) if cell.width == 2 => lead_col.saturating_add(1).min(cols - 1),
        _ => lead_col,
    }
}

/// Click-drag selection state machine: `begin`, `extend`, `finish`.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    anchor: Option<Anchor>,
    range: Option<Range>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { anchor: None, range: None }
    }

    #[must_use]
    pub const fn range(&self) -> Option<Range> {
        self.range
    }

    pub fn begin_at(&mut self, pos: Anchor) {
        self.anchor = Some(pos);
        self.range = Some(Range::new(pos, pos));
    }

    pub fn extend_to(&mut self, pos: Anchor) {
        if let Some(anchor) = self.anchor {
            self.range = Some(Range::new(anchor, pos));
        }
    }

    pub fn finish(&mut self) {
        self.anchor = None;
    }

    pub fn select_word(&mut self, pos: Anchor, screen: &Screen) {
        self.range = Range::word_at(pos, screen);
        self.anchor = None;
    }

    pub fn select_row(&mut self, row: usize, screen: &Screen) {
        self.range = Some(Range::row_at(row, screen));
        self.anchor = None;
    }

    pub fn select_all(&mut self, screen: &Screen) {
        self.range = Some(Range::all(screen));
        self.anchor = None;
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.range = None;
    }

    #[must_use]
    pub fn extract_text(&self, screen: &Screen) -> Option<String> {
        self.range.map(|r| r.extract_text(screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with(cols: usize, rows: &[&str]) -> Screen {
        let mut screen = Screen::new(cols, rows.len(), 0);
        for (r, text) in rows.iter().enumerate() {
            for ch in text.chars() {
                screen.print(ch, 1);
            }
            if r + 1 < rows.len() {
                screen.carriage_return();
                screen.line_feed();
            }
        }
        screen
    }

    #[test]
    fn word_selection_stops_at_hyphen_underscore_boundary() {
        let screen = screen_with(20, &["abc_def-ghi baz"]);
        let sel = Range::word_at(Anchor::new(0, 4), &screen).unwrap();
        assert_eq!(sel.extract_text(&screen), "abc_def-ghi");
    }

    #[test]
    fn word_selection_stops_at_a_path_separator() {
        let screen = screen_with(20, &["foo/bar"]);
        let sel = Range::word_at(Anchor::new(0, 1), &screen).unwrap();
        assert_eq!(sel.extract_text(&screen), "foo");
    }

    #[test]
    fn word_selection_on_whitespace_anchor_selects_nothing() {
        let screen = screen_with(20, &["foo bar"]);
        assert!(Range::word_at(Anchor::new(0, 3), &screen).is_none());

        let mut selection = Selection::new();
        selection.select_word(Anchor::new(0, 3), &screen);
        assert_eq!(selection.range(), None);
        assert_eq!(selection.extract_text(&screen), None);
    }

    #[test]
    fn extract_text_preserves_trailing_spaces() {
        let screen = screen_with(10, &["ab   "]);
        let sel = Range::row_at(0, &screen);
        let extracted = sel.extract_text(&screen);
        assert_eq!(extracted.len(), 10);
        assert!(extracted.starts_with("ab"));
        assert!(extracted.ends_with(' '));
    }

    #[test]
    fn row_selection_spans_exactly_one_row_with_trailing_newline_suppressed_on_last() {
        let screen = screen_with(5, &["ab", "cd"]);
        let sel = Range::new(Anchor::new(0, 0), Anchor::new(1, 1));
        assert_eq!(sel.extract_text(&screen), "ab   \ncd");
    }

    #[test]
    fn click_drag_round_trips_through_controller() {
        let screen = screen_with(10, &["hello"]);
        let mut selection = Selection::new();
        selection.begin_at(Anchor::new(0, 0));
        selection.extend_to(Anchor::new(0, 4));
        selection.finish();
        assert_eq!(selection.extract_text(&screen).as_deref(), Some("hello"));
    }
}
