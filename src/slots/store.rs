//! Private slot storage for one privatized function.

use std::any::{type_name, Any};
use std::fmt;

use super::name::SlotNameSet;
use crate::{MemoError, MemoResult};

/// The private scope of a privatized function.
///
/// Holds exactly one slot per declared name. A slot is either unset or holds
/// a single value of any `'static` type. Names that were not declared are
/// rejected; there is no outer scope to fall back to.
pub struct Slots {
    names: SlotNameSet,
    values: Vec<Option<Box<dyn Any>>>,
}

impl Slots {
    /// Creates a scope with every slot unset.
    pub(crate) fn new(names: SlotNameSet) -> Self {
        let values = names.iter().map(|_| None).collect();
        Self { names, values }
    }

    /// Declared names, in declaration order.
    pub fn names(&self) -> &SlotNameSet {
        &self.names
    }

    /// Whether `name` has been assigned since construction (or since the last
    /// `unset`/`take`).
    pub fn is_set(&self, name: &str) -> MemoResult<bool> {
        Ok(self.slot(name)?.is_some())
    }

    /// Reads a slot. `Ok(None)` means the slot is unset.
    pub fn get<T: Any>(&self, name: &str) -> MemoResult<Option<&T>> {
        match self.slot(name)? {
            Some(value) => value
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| mismatch::<T>(name)),
            None => Ok(None),
        }
    }

    /// Mutable access to a slot. `Ok(None)` means the slot is unset.
    pub fn get_mut<T: Any>(&mut self, name: &str) -> MemoResult<Option<&mut T>> {
        match self.slot_mut(name)? {
            Some(value) => value
                .downcast_mut::<T>()
                .map(Some)
                .ok_or_else(|| mismatch::<T>(name)),
            None => Ok(None),
        }
    }

    /// Assigns a slot, replacing whatever it held (of any type).
    pub fn set<T: Any>(&mut self, name: &str, value: T) -> MemoResult<()> {
        *self.slot_mut(name)? = Some(Box::new(value));
        Ok(())
    }

    /// Returns the slot's value, initialising it with `init` first if unset.
    pub fn get_or_insert_with<T, F>(&mut self, name: &str, init: F) -> MemoResult<&mut T>
    where
        T: Any,
        F: FnOnce() -> T,
    {
        let slot = self.slot_mut(name)?;
        slot.get_or_insert_with(|| Box::new(init()) as Box<dyn Any>)
            .downcast_mut::<T>()
            .ok_or_else(|| mismatch::<T>(name))
    }

    /// Moves the value out, leaving the slot unset.
    ///
    /// A value of another type is left in place and reported as a mismatch.
    pub fn take<T: Any>(&mut self, name: &str) -> MemoResult<Option<T>> {
        let slot = self.slot_mut(name)?;
        if slot.as_ref().is_some_and(|value| !value.is::<T>()) {
            return Err(mismatch::<T>(name));
        }
        Ok(slot
            .take()
            .and_then(|value| value.downcast::<T>().ok())
            .map(|value| *value))
    }

    /// Returns the slot to the unset state. Reports whether it held a value.
    pub fn unset(&mut self, name: &str) -> MemoResult<bool> {
        Ok(self.slot_mut(name)?.take().is_some())
    }

    fn slot(&self, name: &str) -> MemoResult<&Option<Box<dyn Any>>> {
        self.names
            .position(name)
            .map(|i| &self.values[i])
            .ok_or_else(|| MemoError::UndeclaredSlot(name.to_string()))
    }

    fn slot_mut(&mut self, name: &str) -> MemoResult<&mut Option<Box<dyn Any>>> {
        match self.names.position(name) {
            Some(i) => Ok(&mut self.values[i]),
            None => Err(MemoError::UndeclaredSlot(name.to_string())),
        }
    }
}

fn mismatch<T>(name: &str) -> MemoError {
    MemoError::SlotTypeMismatch {
        name: name.to_string(),
        expected: type_name::<T>(),
    }
}

// Values are private to the function body, so only set/unset is shown.
impl fmt::Debug for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.names.iter().zip(&self.values) {
            map.entry(&name.as_str(), &if value.is_some() { "set" } else { "unset" });
        }
        map.finish()
    }
}
