#![warn(missing_docs)]
//! The step/reset contract shared by game simulators and preprocessing stages.
//!
//! A base simulator implements [`Env`]. Every preprocessing stage in
//! `stagehand-atari` wraps another [`Env`] and implements [`Env`] itself, so a
//! stack of stages can be used anywhere a bare simulator is expected.
//!
//! ```text
//! Env --> Obs --> Policy --> Act --> Env
//! ```
pub mod error;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};
