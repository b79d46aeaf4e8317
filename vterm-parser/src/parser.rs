// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Byte-stream parser: a Paul Williams-style state machine that turns raw
//! terminal output into a stream of [`Action`]s. Malformed sequences are
//! silently dropped — the parser never panics and never rejects input.

use crate::tracer::SequenceTracer;
use vterm_common::action::{Action, CsiAction, EscAction, OscAction};
use vterm_common::colors::Color;
use vterm_common::modes::Mode;
use vterm_common::sgr::Sgr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    CsiIgnore,
    OscString,
    DcsEntry,
    DcsParam,
    DcsIntermediate,
    DcsPassthrough,
    DcsIgnore,
    SosPmApcString,
}

#[derive(Clone, Copy, Debug)]
struct Utf8Pending {
    need: u8,
    got: u8,
    value: u32,
}

enum Utf8Step {
    Continue(Utf8Pending),
    Done(char),
    Invalid,
}

impl Utf8Pending {
    const fn start(lead: u8) -> Option<Self> {
        match lead {
            0xC2..=0xDF => Some(Self { need: 1, got: 0, value: (lead & 0x1F) as u32 }),
            0xE0..=0xEF => Some(Self { need: 2, got: 0, value: (lead & 0x0F) as u32 }),
            0xF0..=0xF4 => Some(Self { need: 3, got: 0, value: (lead & 0x07) as u32 }),
            _ => None,
        }
    }

    fn push(mut self, byte: u8) -> Utf8Step {
        if !(0x80..=0xBF).contains(&byte) {
            return Utf8Step::Invalid;
        }
        self.value = (self.value << 6) | u32::from(byte & 0x3F);
        self.got += 1;
        if self.got == self.need {
            char::from_u32(self.value).map_or(Utf8Step::Invalid, Utf8Step::Done)
        } else {
            Utf8Step::Continue(self)
        }
    }
}

/// A single long-lived VT byte-stream parser. Feed it bytes as they arrive
/// from the PTY; splitting input at any byte boundary produces the same
/// actions as feeding it whole.
pub struct Parser {
    state: State,
    utf8: Option<Utf8Pending>,
    params: Vec<Option<u32>>,
    current_param: Option<u32>,
    csi_prefix: Option<u8>,
    intermediates: Vec<u8>,
    osc_buf: Vec<u8>,
    dcs_payload: Vec<u8>,
    dcs_is_decrqss: bool,
    pending_st_esc: bool,
    trace: SequenceTracer,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Ground,
            utf8: None,
            params: Vec::new(),
            current_param: None,
            csi_prefix: None,
            intermediates: Vec::new(),
            osc_buf: Vec::new(),
            dcs_payload: Vec::new(),
            dcs_is_decrqss: false,
            pending_st_esc: false,
            trace: SequenceTracer::new(),
        }
    }

    /// Diagnostic-only view of the most recently seen bytes.
    #[must_use]
    pub fn current_trace(&self) -> String {
        self.trace.as_str()
    }

    #[must_use]
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Action> {
        let mut actions = Vec::new();
        for &byte in bytes {
            self.feed_byte(byte, &mut actions);
        }
        actions
    }

    fn feed_byte(&mut self, byte: u8, out: &mut Vec<Action>) {
        self.trace.push(byte);

        if let Some(pending) = self.utf8.take() {
            match pending.push(byte) {
                Utf8Step::Continue(p) => {
                    self.utf8 = Some(p);
                    return;
                }
                Utf8Step::Done(ch) => {
                    out.push(Action::Print(ch));
                    return;
                }
                Utf8Step::Invalid => {
                    out.push(Action::Print(char::REPLACEMENT_CHARACTER));
                    // fall through: byte may itself begin a new sequence
                }
            }
        }

        match byte {
            0x18 => {
                self.abort();
                return;
            }
            0x1a => {
                self.abort();
                out.push(Action::Print(char::REPLACEMENT_CHARACTER));
                return;
            }
            0x1b if !matches!(
                self.state,
                State::OscString | State::DcsPassthrough | State::SosPmApcString | State::DcsIgnore
            ) =>
            {
                self.abort();
                self.state = State::Escape;
                return;
            }
            _ => {}
        }

        match self.state {
            State::Ground => self.in_ground(byte, out),
            State::Escape => self.in_escape(byte, out),
            State::EscapeIntermediate => self.in_escape_intermediate(byte, out),
            State::CsiEntry => self.in_csi_entry(byte, out),
            State::CsiParam => self.in_csi_param(byte, out),
            State::CsiIntermediate => self.in_csi_intermediate(byte, out),
            State::CsiIgnore => self.in_csi_ignore(byte),
            State::OscString => self.in_osc_string(byte, out),
            State::DcsEntry => self.in_dcs_entry(byte, out),
            State::DcsParam => self.in_dcs_param(byte, out),
            State::DcsIntermediate => self.in_dcs_intermediate(byte, out),
            State::DcsPassthrough => self.in_dcs_passthrough(byte, out),
            State::DcsIgnore => self.in_dcs_ignore(byte),
            State::SosPmApcString => self.in_sos_pm_apc(byte),
        }
    }

    fn abort(&mut self) {
        self.state = State::Ground;
        self.params.clear();
        self.current_param = None;
        self.csi_prefix = None;
        self.intermediates.clear();
        self.osc_buf.clear();
        self.dcs_payload.clear();
        self.dcs_is_decrqss = false;
        self.pending_st_esc = false;
    }

    fn enter(&mut self, state: State) {
        self.abort();
        self.state = state;
    }

    // ------------------------------------------------------------------
    // Ground
    // ------------------------------------------------------------------

    fn in_ground(&mut self, byte: u8, out: &mut Vec<Action>) {
        match byte {
            0x07 => out.push(Action::Bell),
            0x00..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f => out.push(Action::Execute(byte)),
            0x7f => {}
            0x90 => self.enter(State::DcsEntry),
            0x98 | 0x9e | 0x9f => self.enter(State::SosPmApcString),
            0x9b => self.enter(State::CsiEntry),
            0x9c => {}
            0x9d => self.enter(State::OscString),
            0x80..=0x8f | 0x91..=0x97 | 0x99 | 0x9a => {}
            0x20..=0x7e => out.push(Action::Print(byte as char)),
            _ => self.start_utf8_lead(byte, out),
        }
    }

    fn start_utf8_lead(&mut self, byte: u8, out: &mut Vec<Action>) {
        match Utf8Pending::start(byte) {
            Some(pending) => self.utf8 = Some(pending),
            None => out.push(Action::Print(char::REPLACEMENT_CHARACTER)),
        }
    }

    fn is_c0_execute(byte: u8) -> bool {
        matches!(byte, 0x00..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f)
    }

    // ------------------------------------------------------------------
    // Escape
    // ------------------------------------------------------------------

    fn in_escape(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::EscapeIntermediate;
            }
            b'[' => self.enter(State::CsiEntry),
            b']' => self.enter(State::OscString),
            b'P' => self.enter(State::DcsEntry),
            b'X' | b'^' | b'_' => self.enter(State::SosPmApcString),
            0x30..=0x7e => self.finish_escape(byte, out),
            _ => self.state = State::Ground,
        }
    }

    fn in_escape_intermediate(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            0x20..=0x2f => self.intermediates.push(byte),
            0x30..=0x7e => self.finish_escape(byte, out),
            _ => self.state = State::Ground,
        }
    }

    fn finish_escape(&mut self, final_byte: u8, out: &mut Vec<Action>) {
        let action = match final_byte {
            b'7' => EscAction::SaveCursor,
            b'8' => EscAction::RestoreCursor,
            b'D' => EscAction::Index,
            b'M' => EscAction::ReverseIndex,
            b'E' => EscAction::NextLine,
            b'c' => EscAction::ResetToInitialState,
            _ => EscAction::Unknown,
        };
        out.push(Action::Esc(action));
        self.state = State::Ground;
        self.intermediates.clear();
    }

    // ------------------------------------------------------------------
    // CSI
    // ------------------------------------------------------------------

    fn in_csi_entry(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            b'0'..=b'9' | b';' | b':' => {
                self.state = State::CsiParam;
                self.in_csi_param(byte, out);
            }
            b'<' | b'=' | b'>' | b'?' => {
                self.csi_prefix = Some(byte);
                self.state = State::CsiParam;
            }
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::CsiIntermediate;
            }
            0x40..=0x7e => self.finish_csi(byte, out),
            _ => self.state = State::CsiIgnore,
        }
    }

    fn in_csi_param(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            b'0'..=b'9' => {
                let digit = u32::from(byte - b'0');
                self.current_param = Some(self.current_param.unwrap_or(0).saturating_mul(10).saturating_add(digit).min(65535));
            }
            b';' | b':' => {
                self.params.push(self.current_param.take());
            }
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::CsiIntermediate;
            }
            0x40..=0x7e => self.finish_csi(byte, out),
            _ => self.state = State::CsiIgnore,
        }
    }

    fn in_csi_intermediate(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            0x20..=0x2f => self.intermediates.push(byte),
            0x40..=0x7e => self.finish_csi(byte, out),
            _ => self.state = State::CsiIgnore,
        }
    }

    fn in_csi_ignore(&mut self, byte: u8) {
        if (0x40..=0x7e).contains(&byte) {
            self.state = State::Ground;
        }
    }

    fn finish_csi(&mut self, final_byte: u8, out: &mut Vec<Action>) {
        self.params.push(self.current_param.take());
        let params = std::mem::take(&mut self.params);
        let prefix = self.csi_prefix.take();
        let p = |i: usize| params.get(i).copied().flatten();

        let action = match (prefix, final_byte) {
            (None, b'A') => CsiAction::CursorUp(p(0).unwrap_or(1).max(1)),
            (None, b'B') => CsiAction::CursorDown(p(0).unwrap_or(1).max(1)),
            (None, b'C') => CsiAction::CursorForward(p(0).unwrap_or(1).max(1)),
            (None, b'D') => CsiAction::CursorBack(p(0).unwrap_or(1).max(1)),
            (None, b'H' | b'f') => CsiAction::CursorPosition { row: p(0), col: p(1) },
            (None, b'G') => CsiAction::CursorHorizontalAbsolute(p(0).unwrap_or(1).max(1)),
            (None, b'd') => CsiAction::CursorVerticalAbsolute(p(0).unwrap_or(1).max(1)),
            (None, b'J') => CsiAction::EraseInDisplay(p(0).unwrap_or(0)),
            (None, b'K') => CsiAction::EraseInLine(p(0).unwrap_or(0)),
            (None, b'L') => CsiAction::InsertLines(p(0).unwrap_or(1).max(1)),
            (None, b'M') => CsiAction::DeleteLines(p(0).unwrap_or(1).max(1)),
            (None, b'@') => CsiAction::InsertChars(p(0).unwrap_or(1).max(1)),
            (None, b'P') => CsiAction::DeleteChars(p(0).unwrap_or(1).max(1)),
            (None, b'X') => CsiAction::EraseChars(p(0).unwrap_or(1).max(1)),
            (None, b'S') => CsiAction::ScrollUp(p(0).unwrap_or(1).max(1)),
            (None, b'T') => CsiAction::ScrollDown(p(0).unwrap_or(1).max(1)),
            (None, b'r') => CsiAction::SetScrollRegion { top: p(0), bottom: p(1) },
            (None, b's') => CsiAction::SaveCursor,
            (None, b'u') => CsiAction::RestoreCursor,
            (None, b'n') => CsiAction::DeviceStatusReport(p(0).unwrap_or(0)),
            (None, b'm') => CsiAction::Sgr(Self::parse_sgr(&params)),
            (Some(b'?'), b'h' | b'l') => {
                let set = if final_byte == b'h' {
                    vterm_common::modes::SetMode::Set
                } else {
                    vterm_common::modes::SetMode::Reset
                };
                let raw = format!("?{}", p(0).unwrap_or(0));
                CsiAction::SetMode { mode: Mode::from_param(raw.as_bytes()), set }
            }
            (None, b'h' | b'l') => {
                let set = if final_byte == b'h' {
                    vterm_common::modes::SetMode::Set
                } else {
                    vterm_common::modes::SetMode::Reset
                };
                let raw = p(0).unwrap_or(0).to_string();
                CsiAction::SetMode { mode: Mode::from_param(raw.as_bytes()), set }
            }
            _ => CsiAction::Unknown,
        };

        out.push(Action::Csi(action));
        self.state = State::Ground;
        self.intermediates.clear();
    }

    fn parse_sgr(params: &[Option<u32>]) -> Vec<Sgr> {
        if params.is_empty() {
            return vec![Sgr::Reset];
        }
        let mut out = Vec::new();
        let mut i = 0;
        while i < params.len() {
            let channel = params[i].unwrap_or(0);
            if matches!(channel, 38 | 48 | 58) {
                match params.get(i + 1).copied().flatten() {
                    Some(2) => {
                        let r = params.get(i + 2).copied().flatten().unwrap_or(0) as u8;
                        let g = params.get(i + 3).copied().flatten().unwrap_or(0) as u8;
                        let b = params.get(i + 4).copied().flatten().unwrap_or(0) as u8;
                        out.push(Sgr::custom_color(channel, Color::Rgb(r, g, b)));
                        i += 5;
                    }
                    Some(5) => {
                        let idx = params.get(i + 2).copied().flatten().unwrap_or(0) as u8;
                        out.push(Sgr::custom_color(channel, Color::Indexed(idx)));
                        i += 3;
                    }
                    _ => {
                        out.push(Sgr::custom_color(channel, Color::Default));
                        i += 2;
                    }
                }
            } else {
                out.push(Sgr::from_param(channel));
                i += 1;
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // OSC
    // ------------------------------------------------------------------

    fn in_osc_string(&mut self, byte: u8, out: &mut Vec<Action>) {
        if self.pending_st_esc {
            self.pending_st_esc = false;
            if byte == b'\\' {
                self.finish_osc(out);
            } else {
                self.osc_buf.clear();
                self.state = State::Escape;
                self.in_escape(byte, out);
            }
            return;
        }
        match byte {
            0x1b => self.pending_st_esc = true,
            0x07 => self.finish_osc(out),
            0x00..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f => {}
            _ => self.osc_buf.push(byte),
        }
    }

    fn finish_osc(&mut self, out: &mut Vec<Action>) {
        let raw = String::from_utf8_lossy(&self.osc_buf).into_owned();
        let mut parts = raw.splitn(2, ';');
        let ident = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default();

        let action = match ident {
            "0" | "2" => OscAction::SetTitle(rest.to_string()),
            "4" => {
                let mut fields = rest.splitn(2, ';');
                let index = fields.next().and_then(|s| s.parse::<u8>().ok()).unwrap_or(0);
                let spec = fields.next().unwrap_or_default().to_string();
                OscAction::SetPalette { index, spec }
            }
            "10" => OscAction::SetForeground(rest.to_string()),
            "11" => OscAction::SetBackground(rest.to_string()),
            "52" => {
                let mut fields = rest.splitn(2, ';');
                let selection = fields.next().unwrap_or_default().to_string();
                let payload = fields.next().unwrap_or_default().to_string();
                OscAction::Clipboard { selection, payload }
            }
            "104" => OscAction::ResetPalette,
            _ => OscAction::Unknown,
        };
        out.push(Action::Osc(action));
        self.state = State::Ground;
        self.osc_buf.clear();
    }

    // ------------------------------------------------------------------
    // DCS
    // ------------------------------------------------------------------

    fn in_dcs_entry(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            b'0'..=b'9' | b';' | b':' => {
                self.state = State::DcsParam;
                self.in_dcs_param(byte, out);
            }
            b'<' | b'=' | b'>' | b'?' => {
                self.csi_prefix = Some(byte);
                self.state = State::DcsParam;
            }
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::DcsIntermediate;
            }
            0x40..=0x7e => self.begin_dcs_passthrough(byte),
            _ => self.state = State::DcsIgnore,
        }
    }

    fn in_dcs_param(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            b'0'..=b'9' => {
                let digit = u32::from(byte - b'0');
                self.current_param = Some(self.current_param.unwrap_or(0).saturating_mul(10).saturating_add(digit).min(65535));
            }
            b';' | b':' => self.params.push(self.current_param.take()),
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::DcsIntermediate;
            }
            0x40..=0x7e => self.begin_dcs_passthrough(byte),
            _ => self.state = State::DcsIgnore,
        }
    }

    fn in_dcs_intermediate(&mut self, byte: u8, out: &mut Vec<Action>) {
        if Self::is_c0_execute(byte) {
            out.push(Action::Execute(byte));
            return;
        }
        match byte {
            0x20..=0x2f => self.intermediates.push(byte),
            0x40..=0x7e => self.begin_dcs_passthrough(byte),
            _ => self.state = State::DcsIgnore,
        }
    }

    fn begin_dcs_passthrough(&mut self, final_byte: u8) {
        self.dcs_is_decrqss = self.intermediates == [b'$'] && final_byte == b'q';
        self.dcs_payload.clear();
        self.state = State::DcsPassthrough;
    }

    fn in_dcs_passthrough(&mut self, byte: u8, out: &mut Vec<Action>) {
        if self.pending_st_esc {
            self.pending_st_esc = false;
            if byte == b'\\' {
                self.finish_dcs(out);
            } else {
                self.dcs_payload.clear();
                self.state = State::Escape;
                self.in_escape(byte, out);
            }
            return;
        }
        match byte {
            0x1b => self.pending_st_esc = true,
            0x07 => self.finish_dcs(out),
            _ => self.dcs_payload.push(byte),
        }
    }

    fn finish_dcs(&mut self, out: &mut Vec<Action>) {
        out.push(Action::Dcs {
            is_decrqss: self.dcs_is_decrqss,
            payload: std::mem::take(&mut self.dcs_payload),
        });
        self.state = State::Ground;
        self.dcs_is_decrqss = false;
    }

    fn in_dcs_ignore(&mut self, byte: u8) {
        if self.pending_st_esc {
            self.pending_st_esc = false;
            if byte == b'\\' {
                self.state = State::Ground;
            } else {
                self.state = State::Escape;
            }
            return;
        }
        match byte {
            0x1b => self.pending_st_esc = true,
            0x07 => self.state = State::Ground,
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // SOS / PM / APC — accepted and discarded, unused by this core.
    // ------------------------------------------------------------------

    fn in_sos_pm_apc(&mut self, byte: u8) {
        if self.pending_st_esc {
            self.pending_st_esc = false;
            if byte == b'\\' {
                self.state = State::Ground;
            } else {
                self.state = State::Escape;
            }
            return;
        }
        match byte {
            0x1b => self.pending_st_esc = true,
            0x07 => self.state = State::Ground,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_prints() {
        let mut p = Parser::new();
        let actions = p.feed(b"hi");
        assert_eq!(actions, vec![Action::Print('h'), Action::Print('i')]);
    }

    #[test]
    fn utf8_sequence_split_across_feeds_matches_whole() {
        let bytes = "日".as_bytes().to_vec();
        let mut whole = Parser::new();
        let whole_actions = whole.feed(&bytes);

        let mut split = Parser::new();
        let mut split_actions = Vec::new();
        for chunk in bytes.chunks(1) {
            split_actions.extend(split.feed(chunk));
        }
        assert_eq!(whole_actions, split_actions);
        assert_eq!(whole_actions, vec![Action::Print('日')]);
    }

    #[test]
    fn invalid_utf8_continuation_emits_replacement() {
        let mut p = Parser::new();
        let actions = p.feed(&[0xC2, 0x20]);
        assert_eq!(
            actions,
            vec![Action::Print(char::REPLACEMENT_CHARACTER), Action::Print(' ')]
        );
    }

    #[test]
    fn csi_cursor_position_parses_two_params() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[5;10H");
        assert_eq!(
            actions,
            vec![Action::Csi(CsiAction::CursorPosition { row: Some(5), col: Some(10) })]
        );
    }

    #[test]
    fn csi_with_missing_params_uses_defaults() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[H");
        assert_eq!(
            actions,
            vec![Action::Csi(CsiAction::CursorPosition { row: None, col: None })]
        );
    }

    #[test]
    fn sgr_true_color_foreground_parses() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[38;2;10;20;30m");
        assert_eq!(
            actions,
            vec![Action::Csi(CsiAction::Sgr(vec![Sgr::Foreground(Color::Rgb(10, 20, 30))]))]
        );
    }

    #[test]
    fn osc_set_title_terminated_by_bel() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b]0;hello\x07");
        assert_eq!(actions, vec![Action::Osc(OscAction::SetTitle("hello".to_string()))]);
    }

    #[test]
    fn osc_set_title_terminated_by_st() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b]0;hello\x1b\\");
        assert_eq!(actions, vec![Action::Osc(OscAction::SetTitle("hello".to_string()))]);
    }

    #[test]
    fn can_aborts_sequence_in_progress() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[3;\x18A");
        assert_eq!(actions, vec![Action::Print('A')]);
    }

    #[test]
    fn sub_aborts_and_substitutes() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[3\x1a");
        assert_eq!(actions, vec![Action::Print(char::REPLACEMENT_CHARACTER)]);
    }

    #[test]
    fn decrqss_is_flagged_in_dcs_payload() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1bP$q\"p\x1b\\");
        assert_eq!(
            actions,
            vec![Action::Dcs { is_decrqss: true, payload: b"\"p".to_vec() }]
        );
    }

    #[test]
    fn bell_execute_is_distinct_action() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x07");
        assert_eq!(actions, vec![Action::Bell]);
    }

    #[test]
    fn index_and_reverse_index_escapes_parse() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1bD\x1bM");
        assert_eq!(
            actions,
            vec![Action::Esc(EscAction::Index), Action::Esc(EscAction::ReverseIndex)]
        );
    }

    #[test]
    fn private_mode_set_parses_decawm() {
        let mut p = Parser::new();
        let actions = p.feed(b"\x1b[?7h");
        assert_eq!(
            actions,
            vec![Action::Csi(CsiAction::SetMode {
                mode: Mode::AutoWrap,
                set: vterm_common::modes::SetMode::Set,
            })]
        );
    }
}
