// SPDX-FileCopyrightText: 2025 LibreQoE support@libreqos.io
// SPDX-License-Identifier: AGPL-3.0-or-later WITH LicenseRef-LibreQoS-Exception

//! Measures how long a menu consumer waits on the three calls it makes
//! when first showing a menu exported over `org.ayatana.dbusmenu`.
//!
//! A *pass* issues `GetLayout`, `GetChildren` and `GetProperties` one after
//! another and times each. The driver either dumps the replies of a
//! single pass or averages the timings over several passes.

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]
mod driver;
mod error;
mod runner;
mod stopwatch;
mod timings;

#[cfg(test)]
mod mock_menu;

pub use driver::{run, run_with_clock, BenchOptions};
pub use error::BenchError;
pub use runner::{run_pass, run_pass_with_clock};
pub use stopwatch::{Clock, MonotonicClock, Stopwatch};
pub use timings::{CumulativeTimings, TimingSample};
