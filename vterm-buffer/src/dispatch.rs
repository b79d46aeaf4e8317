// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maps the parser's [`Action`] contract onto [`Screen`] calls. Unhandled
//! or out-of-scope actions are silently ignored rather than raising an
//! error.

use crate::screen::Screen;
use vterm_common::action::{Action, CsiAction, EscAction, OscAction};
use vterm_common::width::char_width;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchEvents {
    pub bell: bool,
    pub title: Option<String>,
    /// Set when the host asked for a device status report (CSI `Ps n`); the
    /// façade owns synthesizing and sending the reply, since the screen
    /// buffer has no notion of a host connection.
    pub device_status_report: Option<u32>,
}

/// Applies one parser action to `screen`, returning any side-channel
/// events the façade needs to forward (bell, title changes). OSC 52
/// clipboard requests are accepted and otherwise ignored, matching the
/// documented core policy.
pub fn dispatch(screen: &mut Screen, action: Action, events: &mut DispatchEvents) {
    match action {
        Action::Print(ch) => {
            let width = char_width(ch);
            if width == 0 {
                screen.attach_combining(ch);
            } else {
                screen.print(ch, width);
            }
        }
        Action::Execute(byte) => execute(screen, byte, events),
        Action::Csi(csi) => dispatch_csi(screen, csi, events),
        Action::Osc(osc) => dispatch_osc(osc, events),
        Action::Esc(esc) => dispatch_esc(screen, esc),
        Action::Dcs { .. } => {
            trace!("ignoring device control string");
        }
        Action::Bell => events.bell = true,
    }
}

fn execute(screen: &mut Screen, byte: u8, events: &mut DispatchEvents) {
    match byte {
        0x07 => events.bell = true,
        0x08 => screen.backspace(),
        0x09 => screen.tab(),
        0x0a | 0x0b | 0x0c => screen.line_feed(),
        0x0d => screen.carriage_return(),
        _ => {}
    }
}

fn dispatch_csi(screen: &mut Screen, csi: CsiAction, events: &mut DispatchEvents) {
    match csi {
        CsiAction::CursorUp(n) => screen.cursor_up(n),
        CsiAction::CursorDown(n) => screen.cursor_down(n),
        CsiAction::CursorForward(n) => screen.cursor_forward(n),
        CsiAction::CursorBack(n) => screen.cursor_back(n),
        CsiAction::CursorPosition { row, col } => screen.cursor_position(row, col),
        CsiAction::CursorHorizontalAbsolute(col) => screen.cursor_horizontal_absolute(col),
        CsiAction::CursorVerticalAbsolute(row) => screen.cursor_vertical_absolute(row),
        CsiAction::EraseInDisplay(mode) => screen.erase_in_display(mode),
        CsiAction::EraseInLine(mode) => screen.erase_in_line(mode),
        CsiAction::InsertLines(n) => screen.insert_lines(n),
        CsiAction::DeleteLines(n) => screen.delete_lines(n),
        CsiAction::InsertChars(n) => screen.insert_chars(n),
        CsiAction::DeleteChars(n) => screen.delete_chars(n),
        CsiAction::EraseChars(n) => screen.erase_chars(n),
        CsiAction::ScrollUp(n) => screen.scroll_up(n),
        CsiAction::ScrollDown(n) => screen.scroll_down(n),
        CsiAction::SetScrollRegion { top, bottom } => screen.set_scroll_region(top, bottom),
        CsiAction::SetMode { mode, set } => screen.set_mode(mode, set),
        CsiAction::Sgr(params) => screen.apply_sgr(&params),
        CsiAction::DeviceStatusReport(kind) => events.device_status_report = Some(kind),
        CsiAction::SaveCursor => screen.save_cursor(),
        CsiAction::RestoreCursor => screen.restore_cursor(),
        CsiAction::Unknown => {}
    }
}

fn dispatch_osc(osc: OscAction, events: &mut DispatchEvents) {
    match osc {
        OscAction::SetTitle(title) => events.title = Some(title),
        OscAction::Clipboard { .. } => {
            trace!("ignoring OSC 52 clipboard request");
        }
        OscAction::SetPalette { .. }
        | OscAction::SetForeground(_)
        | OscAction::SetBackground(_)
        | OscAction::ResetPalette
        | OscAction::Unknown => {}
    }
}

fn dispatch_esc(screen: &mut Screen, esc: EscAction) {
    match esc {
        EscAction::SaveCursor => screen.save_cursor(),
        EscAction::RestoreCursor => screen.restore_cursor(),
        EscAction::Index => screen.index(),
        EscAction::ReverseIndex => screen.reverse_index(),
        EscAction::NextLine => screen.next_line(),
        EscAction::ResetToInitialState => screen.reset(),
        EscAction::Unknown => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_common::modes::{Mode, SetMode};

    #[test]
    fn print_action_writes_cell() {
        let mut screen = Screen::new(10, 3, 10);
        let mut events = DispatchEvents::default();
        dispatch(&mut screen, Action::Print('x'), &mut events);
        assert_eq!(screen.line_at(0).unwrap().get(0).unwrap().codepoint, u32::from('x'));
    }

    #[test]
    fn bell_execute_sets_event_flag() {
        let mut screen = Screen::new(10, 3, 10);
        let mut events = DispatchEvents::default();
        dispatch(&mut screen, Action::Execute(0x07), &mut events);
        assert!(events.bell);
    }

    #[test]
    fn osc_title_is_forwarded_as_event() {
        let mut screen = Screen::new(10, 3, 10);
        let mut events = DispatchEvents::default();
        dispatch(
            &mut screen,
            Action::Osc(OscAction::SetTitle("hi".into())),
            &mut events,
        );
        assert_eq!(events.title.as_deref(), Some("hi"));
    }

    #[test]
    fn set_mode_alternate_screen_is_applied() {
        let mut screen = Screen::new(10, 3, 10);
        let mut events = DispatchEvents::default();
        dispatch(
            &mut screen,
            Action::Csi(CsiAction::SetMode {
                mode: Mode::AlternateScreen,
                set: SetMode::Set,
            }),
            &mut events,
        );
        assert!(screen.modes().alternate_screen_active);
    }
}
