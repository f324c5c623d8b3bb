//! Bundled counter scenario.
//!
//! The counter body refuses to run if its slot name shows up in the ambient
//! namespace, initialises the slot to 0 on first use and returns the value
//! before incrementing it. Privatized over `["iSeed"]` and called three times
//! it prints `0`, `1`, `2`.

use std::io::Write;

use crate::ambient;
use crate::privatize::Privatizer;
use crate::slots::Slots;
use crate::{MemoError, MemoResult};

/// Slot name used by the bundled scenario.
pub const SEED: &str = "iSeed";

/// Counter body over the [`SEED`] slot.
pub fn counter_body(slots: &mut Slots, _: ()) -> MemoResult<i64> {
    seed_counter(slots, SEED)
}

/// Counter body over an arbitrary slot name.
pub fn seed_counter(slots: &mut Slots, slot: &str) -> MemoResult<i64> {
    if ambient::is_defined(slot) {
        return Err(MemoError::Leaked(slot.to_string()));
    }

    if !slots.is_set(slot)? {
        slots.set(slot, 0i64)?;
    }

    let seed = slots
        .get_mut::<i64>(slot)?
        .ok_or_else(|| MemoError::other(format!("slot '{}' lost its value", slot)))?;
    let current = *seed;
    *seed += 1;
    Ok(current)
}

/// Privatizes the counter over `slot` and writes one value per line for
/// `calls` calls.
pub fn run_counter<W: Write>(
    privatizer: &Privatizer,
    slot: &str,
    calls: usize,
    out: &mut W,
) -> MemoResult<()> {
    let owned = slot.to_string();
    let mut run = privatizer.privatize(
        move |slots: &mut Slots, _: ()| seed_counter(slots, &owned),
        [slot],
    )?;

    for _ in 0..calls {
        writeln!(out, "{}", run.call(())?)?;
    }

    if ambient::is_defined(slot) {
        return Err(MemoError::Leaked(slot.to_string()));
    }
    tracing::debug!(calls = run.calls(), "Counter finished");

    Ok(())
}
