// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `Terminal` — the façade that wires the parser, screen buffer, and
//! selection engine together behind one lifecycle: construct, open, write,
//! resize, clear, reset, focus, blur, load addon, dispose.

use crate::addon::{Addon, CoreHandle};
use crate::events::{Disposable, Emitter};
use crate::selection::{Anchor, Selection};
use std::cell::RefCell;
use vterm_buffer::dispatch::{self, DispatchEvents};
use vterm_buffer::line::Line;
use vterm_buffer::screen::Screen;
use vterm_common::cursor::Cursor;
use vterm_common::error::TerminalError;
use vterm_common::options::Options;
use vterm_parser::Parser;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Lifecycle {
    Closed,
    Open,
    Disposed,
}

pub struct Terminal {
    lifecycle: Lifecycle,
    options: Options,
    screen: Screen,
    parser: Parser,
    selection: Selection,
    focused: bool,
    on_resize: RefCell<Emitter<(usize, usize)>>,
    on_bell: RefCell<Emitter<()>>,
    on_title_change: RefCell<Emitter<String>>,
    on_response: RefCell<Emitter<Vec<u8>>>,
    addons: Vec<Box<dyn Addon>>,
}

impl Terminal {
    #[must_use]
    pub fn new(options: Options) -> Self {
        let screen = Screen::new(options.cols, options.rows, options.scrollback);
        Self {
            lifecycle: Lifecycle::Closed,
            options,
            screen,
            parser: Parser::new(),
            selection: Selection::new(),
            focused: false,
            on_resize: RefCell::new(Emitter::new()),
            on_bell: RefCell::new(Emitter::new()),
            on_title_change: RefCell::new(Emitter::new()),
            on_response: RefCell::new(Emitter::new()),
            addons: Vec::new(),
        }
    }

    fn require_not_disposed(&self) -> Result<(), TerminalError> {
        if self.lifecycle == Lifecycle::Disposed {
            warn!("operation attempted on a disposed terminal");
            return Err(TerminalError::Disposed);
        }
        Ok(())
    }

    fn require_open(&self) -> Result<(), TerminalError> {
        match self.lifecycle {
            Lifecycle::Open => Ok(()),
            Lifecycle::Closed => {
                warn!("operation requires an open terminal");
                Err(TerminalError::NotOpen)
            }
            Lifecycle::Disposed => {
                warn!("operation attempted on a disposed terminal");
                Err(TerminalError::Disposed)
            }
        }
    }

    pub fn open(&mut self) -> Result<(), TerminalError> {
        match self.lifecycle {
            Lifecycle::Closed => {
                self.lifecycle = Lifecycle::Open;
                Ok(())
            }
            Lifecycle::Open => {
                warn!("open() called on an already-open terminal");
                Err(TerminalError::AlreadyOpen)
            }
            Lifecycle::Disposed => {
                warn!("open() called on a disposed terminal");
                Err(TerminalError::Disposed)
            }
        }
    }

    /// Feeds host-produced bytes through the parser and applies the
    /// resulting actions to the screen, forwarding any side-channel events
    /// (bell, title, device status reports) to subscribers.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        self.require_open()?;
        let actions = self.parser.feed(bytes);
        let mut events = DispatchEvents::default();
        for action in actions {
            dispatch::dispatch(&mut self.screen, action, &mut events);
        }
        if events.bell {
            self.on_bell.borrow_mut().emit(&());
        }
        if let Some(title) = events.title {
            self.on_title_change.borrow_mut().emit(&title);
        }
        if let Some(kind) = events.device_status_report {
            if let Some(reply) = self.device_status_reply(kind) {
                self.on_response.borrow_mut().emit(&reply);
            }
        }
        Ok(())
    }

    pub fn writeln(&mut self, text: &str) -> Result<(), TerminalError> {
        self.write(text.as_bytes())?;
        self.write(b"\r\n")
    }

    fn device_status_reply(&self, kind: u32) -> Option<Vec<u8>> {
        match kind {
            5 => Some(b"\x1b[0n".to_vec()),
            6 => {
                let cursor = self.screen.cursor();
                Some(format!("\x1b[{};{}R", cursor.pos.row + 1, cursor.pos.col + 1).into_bytes())
            }
            _ => None,
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<(), TerminalError> {
        self.require_open()?;
        if cols == 0 || rows == 0 {
            warn!("resize called with non-positive dimensions");
            return Err(TerminalError::InvalidDimensions);
        }
        if self.screen.resize(cols, rows) {
            self.on_resize.borrow_mut().emit(&(cols, rows));
        }
        Ok(())
    }

    /// Erases the visible grid, keeping scrollback. Per the façade contract
    /// this has no error of its own beyond the general disposed-state rule.
    pub fn clear(&mut self) -> Result<(), TerminalError> {
        self.require_not_disposed()?;
        self.screen.clear_visible();
        Ok(())
    }

    /// Full RIS: default attrs, home cursor, clear scrollback, tab stops
    /// every 8. Same error discipline as `clear`.
    pub fn reset(&mut self) -> Result<(), TerminalError> {
        self.require_not_disposed()?;
        self.screen.reset();
        self.parser = Parser::new();
        self.selection.clear();
        Ok(())
    }

    /// Passes through to the input adapter; per the façade contract this
    /// never fails, even on an unopened or disposed terminal.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Invokes `activate(core)` and retains the addon for disposal. Per the
    /// façade contract this has no error of its own beyond the general
    /// disposed-state rule — it does not require `open` first.
    pub fn load_addon(&mut self, mut addon: Box<dyn Addon>) -> Result<(), TerminalError> {
        self.require_not_disposed()?;
        {
            let handle = CoreHandle::new(self);
            addon.activate(&handle);
        }
        self.addons.push(addon);
        Ok(())
    }

    pub fn dispose(&mut self) {
        for addon in &mut self.addons {
            addon.dispose();
        }
        self.addons.clear();
        self.lifecycle = Lifecycle::Disposed;
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        self.screen.cursor()
    }

    #[must_use]
    pub fn line_at(&self, row: usize) -> Option<&Line> {
        self.screen.line_at(row)
    }

    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        self.screen.dimensions()
    }

    pub fn begin_selection(&mut self, row: usize, col: usize) {
        self.selection.begin_at(Anchor::new(row, col));
    }

    pub fn extend_selection(&mut self, row: usize, col: usize) {
        self.selection.extend_to(Anchor::new(row, col));
    }

    pub fn finish_selection(&mut self) {
        self.selection.finish();
    }

    pub fn select_word(&mut self, row: usize, col: usize) {
        self.selection.select_word(Anchor::new(row, col), &self.screen);
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.screen);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    #[must_use]
    pub fn selection_text(&self) -> Option<String> {
        self.selection.extract_text(&self.screen)
    }

    pub fn on_resize(&self, callback: impl FnMut(&(usize, usize)) + 'static) -> Disposable {
        self.on_resize.borrow_mut().on(callback)
    }

    /// Removes a listener previously registered via [`Self::on_resize`].
    pub fn unsubscribe_resize(&self, handle: &Disposable) {
        self.on_resize.borrow_mut().dispose(handle);
    }

    pub fn on_bell(&self, callback: impl FnMut(&()) + 'static) -> Disposable {
        self.on_bell.borrow_mut().on(callback)
    }

    /// Removes a listener previously registered via [`Self::on_bell`].
    pub fn unsubscribe_bell(&self, handle: &Disposable) {
        self.on_bell.borrow_mut().dispose(handle);
    }

    pub fn on_title_change(&self, callback: impl FnMut(&String) + 'static) -> Disposable {
        self.on_title_change.borrow_mut().on(callback)
    }

    /// Removes a listener previously registered via [`Self::on_title_change`].
    pub fn unsubscribe_title_change(&self, handle: &Disposable) {
        self.on_title_change.borrow_mut().dispose(handle);
    }

    pub fn on_response(&self, callback: impl FnMut(&Vec<u8>) + 'static) -> Disposable {
        self.on_response.borrow_mut().on(callback)
    }

    /// Removes a listener previously registered via [`Self::on_response`].
    pub fn unsubscribe_response(&self, handle: &Disposable) {
        self.on_response.borrow_mut().dispose(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_before_open_is_rejected() {
        let mut terminal = Terminal::new(Options::default());
        assert_eq!(terminal.write(b"hi"), Err(TerminalError::NotOpen));
    }

    #[test]
    fn double_open_is_rejected() {
        let mut terminal = Terminal::new(Options::default());
        terminal.open().unwrap();
        assert_eq!(terminal.open(), Err(TerminalError::AlreadyOpen));
    }

    #[test]
    fn operations_after_dispose_are_rejected() {
        let mut terminal = Terminal::new(Options::default());
        terminal.open().unwrap();
        terminal.dispose();
        assert_eq!(terminal.write(b"hi"), Err(TerminalError::Disposed));
    }

    #[test]
    fn write_prints_to_screen() {
        let mut terminal = Terminal::new(Options::default());
        terminal.open().unwrap();
        terminal.write(b"hi").unwrap();
        assert_eq!(terminal.line_at(0).unwrap().get(0).unwrap().codepoint, u32::from('h'));
    }

    #[test]
    fn clear_and_reset_do_not_require_open() {
        let mut terminal = Terminal::new(Options::default());
        terminal.clear().unwrap();
        terminal.reset().unwrap();
    }

    #[test]
    fn focus_and_blur_never_fail_even_when_disposed() {
        let mut terminal = Terminal::new(Options::default());
        terminal.dispose();
        terminal.focus();
        assert!(terminal.is_focused());
        terminal.blur();
        assert!(!terminal.is_focused());
    }

    #[test]
    fn resize_rejects_zero_dimensions() {
        let mut terminal = Terminal::new(Options::default());
        terminal.open().unwrap();
        assert_eq!(terminal.resize(0, 10), Err(TerminalError::InvalidDimensions));
    }

    #[test]
    fn cursor_position_report_synthesizes_reply() {
        let mut terminal = Terminal::new(Options::default());
        terminal.open().unwrap();
        let log = std::rc::Rc::new(RefCell::new(Vec::new()));
        let log2 = std::rc::Rc::clone(&log);
        terminal.on_response(move |bytes| log2.borrow_mut().push(bytes.clone()));
        terminal.write(b"\x1b[6n").unwrap();
        assert_eq!(log.borrow()[0], b"\x1b[1;1R".to_vec());
    }

    #[test]
    fn unsubscribe_through_the_facade_stops_delivery() {
        let mut terminal = Terminal::new(Options::default());
        terminal.open().unwrap();
        let fired = std::rc::Rc::new(RefCell::new(false));
        let fired2 = std::rc::Rc::clone(&fired);
        let handle = terminal.on_bell(move |(): &()| *fired2.borrow_mut() = true);
        terminal.unsubscribe_bell(&handle);
        terminal.write(b"\x07").unwrap();
        assert!(!*fired.borrow());
    }

    #[test]
    fn select_all_extracts_full_grid_text() {
        let mut terminal = Terminal::new(Options { cols: 5, rows: 1, ..Options::default() });
        terminal.open().unwrap();
        terminal.write(b"ab").unwrap();
        terminal.select_all();
        assert_eq!(terminal.selection_text().unwrap().len(), 5);
    }
}
