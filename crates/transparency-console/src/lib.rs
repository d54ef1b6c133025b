//! Operator console for the supply-chain transparency platform
//!
//! Each subcommand drives a small state controller from [`state`] against the
//! admin, notification or onboarding API and prints the result as a table or
//! as JSON.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod cli;
pub mod commands;
pub mod mock;
pub mod permissions;
pub mod prompt;
pub mod state;
pub mod views;

pub use permissions::{GateRequirement, PermissionGate, UiPermissionsState};
pub use prompt::{FixedReason, ReasonPrompt, StdinPrompt};
