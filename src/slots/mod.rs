//! Private slots for privatized functions.
//!
//! A slot is a named unit of state that belongs to exactly one privatized
//! function. Slots start unset and keep their last value between calls.

mod name;
mod store;

pub use name::{SlotName, SlotNameSet};
pub use store::Slots;
