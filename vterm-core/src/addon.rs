// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The addon extension point: a third party registers a type implementing
//! [`Addon`] via `Terminal::load_addon`, gets a [`CoreHandle`] to subscribe
//! to core events, and is disposed when the terminal is disposed.

use crate::events::Disposable;
use crate::facade::Terminal;

pub trait Addon {
    fn activate(&mut self, core: &CoreHandle<'_>);
    fn dispose(&mut self) {}
}

/// A narrow, read-mostly view of the terminal handed to addons on
/// activation. Addons subscribe to events through this handle rather than
/// holding a direct reference to `Terminal`, keeping the dependency
/// one-directional (core owns addons, not the reverse).
pub struct CoreHandle<'a> {
    terminal: &'a Terminal,
}

impl<'a> CoreHandle<'a> {
    pub(crate) const fn new(terminal: &'a Terminal) -> Self {
        Self { terminal }
    }

    pub fn on_bell(&self, callback: impl FnMut(&()) + 'static) -> Disposable {
        self.terminal.on_bell(callback)
    }

    pub fn unsubscribe_bell(&self, handle: &Disposable) {
        self.terminal.unsubscribe_bell(handle);
    }

    pub fn on_resize(&self, callback: impl FnMut(&(usize, usize)) + 'static) -> Disposable {
        self.terminal.on_resize(callback)
    }

    pub fn unsubscribe_resize(&self, handle: &Disposable) {
        self.terminal.unsubscribe_resize(handle);
    }

    pub fn on_title_change(&self, callback: impl FnMut(&String) + 'static) -> Disposable {
        self.terminal.on_title_change(callback)
    }

    pub fn unsubscribe_title_change(&self, handle: &Disposable) {
        self.terminal.unsubscribe_title_change(handle);
    }

    pub fn on_response(&self, callback: impl FnMut(&Vec<u8>) + 'static) -> Disposable {
        self.terminal.on_response(callback)
    }

    pub fn unsubscribe_response(&self, handle: &Disposable) {
        self.terminal.unsubscribe_response(handle);
    }
}
