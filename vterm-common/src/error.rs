// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Façade-level errors, modeled as a single `thiserror` enum.

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum TerminalError {
    #[error("operation requires open() but it was not called")]
    NotOpen,
    #[error("open() called on an already-open terminal")]
    AlreadyOpen,
    #[error("operation attempted on a disposed terminal")]
    Disposed,
    #[error("resize called with non-positive dimensions")]
    InvalidDimensions,
}
