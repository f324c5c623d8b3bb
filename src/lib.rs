//! # multimemo
//!
//! Gives an ordinary function private variables that survive between calls.
//!
//! [`privatize`] wraps a function body together with a list of variable
//! names. The returned [`Privatized`] callable owns one slot per name, all
//! unset at first, and passes them to the body on every call. Slots are
//! never shared between instances and never visible outside the body.
//!
//! ## Modules
//!
//! - [`privatize`](mod@privatize) - The function privatizer
//! - [`slots`] - Slot names and the private slot store
//! - [`ambient`] - Process-wide namespace used to check for leaks
//! - [`demo`] - The bundled counter scenario
//! - [`cli`] - Command-line interface
//! - [`types`] - Shared types (configuration, errors)

pub mod ambient;
#[cfg(feature = "cli")]
pub mod cli;
pub mod demo;
pub mod privatize;
pub mod slots;
pub mod types;

pub use privatize::{privatize, Privatized, Privatizer};
pub use slots::{SlotName, SlotNameSet, Slots};
pub use types::config::Config;
pub use types::errors::{MemoError, MemoResult};
