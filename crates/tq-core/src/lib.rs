//! `tq-core`: foundational types for the ticket-queue simulator.
//!
//! This crate is a dependency of every other `tq-*` crate.  It has no `tq-*`
//! dependencies and only a few external ones (`chrono`, `rand`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `DepartmentId`, `PersonType`, `CounterKind`, `CounterKey`  |
//! | [`clock`]  | `Clock` trait, `LocalClock`, `FixedClock`                  |
//! | [`rng`]    | `SimRng` (per-job)                                         |
//! | [`error`]  | `TqError`, `TqResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the id and key types.    |

pub mod clock;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::{TqError, TqResult};
pub use ids::{CounterKey, CounterKind, DepartmentId, PersonType};
pub use rng::SimRng;
