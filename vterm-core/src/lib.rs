// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cargo_common_metadata)]

pub mod addon;
pub mod events;
pub mod facade;
pub mod selection;

pub use addon::{Addon, CoreHandle};
pub use events::{Disposable, Emitter, ListenerId};
pub use facade::Terminal;
pub use selection::{Anchor, Range, Selection};

#[macro_use]
extern crate tracing;
