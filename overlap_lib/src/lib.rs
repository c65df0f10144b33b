//! Resolve which one of several overlapping events is active at any given
//! time.
//!
//! Events are half-open intervals `[start, stop)` carrying some arbitrary
//! data.  When several of them cover the same instant, the
//! [`solver::OverlapResolver`] picks one using the following rules:
//!
//! - the event which started last wins;
//! - if multiple events start at the same time, the one ending first wins.
//!
//! ```text
//!                           1    1    2    2
//!       time:     0    5    0    5    0    5
//!                 |....|....|....|....|....|
//!       events:    aaa   eee  iiii kk mmmmm
//!                   bbb ddddd hh   .. l n
//!                    ccc  ff  g  jjj     o
//!                 |....|....|....|....|....|
//!       active:   -abcccdeffd-ghijjkk-lmnom-
//! ```
//!
//! Timestamps can be any totally ordered type (integers, or
//! `chrono::DateTime` for instance).  No calendar semantics are applied.

pub mod errors;
pub mod events;
pub mod solver;

pub use crate::errors::Error;
pub use crate::events::Interval;
pub use crate::solver::{OverlapResolver, Settings};
