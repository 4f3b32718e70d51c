#![forbid(unsafe_code)]

//! Domain types for the Learnpath client.
//!
//! Everything here is I/O free: wire shapes exchanged with the learning API,
//! the page state machine, the transient quiz attempt and local form
//! validation. Networking and persistence live in the `services` and
//! `storage` crates.

pub mod model;
pub mod time;

pub use time::Clock;
