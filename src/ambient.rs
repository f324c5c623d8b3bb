//! Process-wide ambient namespace.
//!
//! A flat table of named bindings visible to any code on the current thread,
//! playing the role a global object plays in a scripting host. The privatizer
//! never reads or writes it. Code that wants to prove a slot did not leak
//! checks here for the absence of a binding with the slot's name.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static AMBIENT: RefCell<HashMap<String, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Binds `name` in the ambient namespace. Returns true if it replaced a binding.
pub fn define<T: Any>(name: &str, value: T) -> bool {
    AMBIENT.with(|ns| {
        ns.borrow_mut()
            .insert(name.to_string(), Box::new(value))
            .is_some()
    })
}

/// Whether `name` is bound in the ambient namespace.
pub fn is_defined(name: &str) -> bool {
    AMBIENT.with(|ns| ns.borrow().contains_key(name))
}

/// Removes a binding. Returns true if one existed.
pub fn remove(name: &str) -> bool {
    AMBIENT.with(|ns| ns.borrow_mut().remove(name).is_some())
}

/// All bound names, sorted.
pub fn names() -> Vec<String> {
    AMBIENT.with(|ns| {
        let mut names: Vec<String> = ns.borrow().keys().cloned().collect();
        names.sort();
        names
    })
}

/// Drops every binding.
pub fn clear() {
    AMBIENT.with(|ns| ns.borrow_mut().clear());
}
