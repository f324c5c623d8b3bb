//! The function privatizer.
//!
//! [`privatize`] takes a function body and a list of variable names and
//! returns a [`Privatized`] callable. The callable owns a fresh [`Slots`]
//! scope holding exactly the declared names, all unset, and hands it to the
//! body on every call. Nothing else from the caller's environment is
//! captured, and nothing outside the body can reach the slots.
//!
//! ## Example
//!
//! ```rust
//! use multimemo::{privatize, MemoResult, Slots};
//!
//! let mut counter = privatize(
//!     |slots: &mut Slots, step: i64| -> MemoResult<i64> {
//!         let total = slots.get_or_insert_with("total", || 0i64)?;
//!         *total += step;
//!         Ok(*total)
//!     },
//!     ["total"],
//! )?;
//!
//! assert_eq!(counter.call(2)?, 2);
//! assert_eq!(counter.call(3)?, 5);
//! # Ok::<(), multimemo::MemoError>(())
//! ```

use std::fmt;

use crate::slots::{SlotNameSet, Slots};
use crate::types::config::PrivatizerConfig;
use crate::MemoResult;

/// Builds privatized functions under a given configuration.
#[derive(Debug, Clone, Default)]
pub struct Privatizer {
    config: PrivatizerConfig,
}

impl Privatizer {
    /// Creates a privatizer.
    pub fn new(config: PrivatizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PrivatizerConfig {
        &self.config
    }

    /// Wraps `body` in a private scope declaring `names`.
    ///
    /// Fails before any callable exists if a name is malformed or reserved,
    /// if the list is empty, or (under the strict policy) if a name repeats.
    pub fn privatize<F, A, R, I>(&self, body: F, names: I) -> MemoResult<Privatized<F>>
    where
        F: FnMut(&mut Slots, A) -> R,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names = SlotNameSet::from_names(names, self.config.policy)?;
        tracing::debug!(scope = %names, policy = ?self.config.policy, "Private scope built");

        Ok(Privatized {
            body,
            slots: Slots::new(names),
            calls: 0,
        })
    }
}

/// Privatizes `body` over `names` with the default configuration.
pub fn privatize<F, A, R, I>(body: F, names: I) -> MemoResult<Privatized<F>>
where
    F: FnMut(&mut Slots, A) -> R,
    I: IntoIterator,
    I::Item: Into<String>,
{
    Privatizer::default().privatize(body, names)
}

/// A function paired with its own private slots.
///
/// Each instance owns its slots exclusively; two privatized functions built
/// from the same body and names never share state. Calls take `&mut self`,
/// so overlapping calls on one instance are ruled out at compile time.
pub struct Privatized<F> {
    body: F,
    slots: Slots,
    calls: u64,
}

impl<F> Privatized<F> {
    /// Invokes the body with this instance's slots.
    ///
    /// Arguments and return value pass through untouched; use a tuple for
    /// several parameters.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(&mut Slots, A) -> R,
    {
        self.calls += 1;
        tracing::trace!(call = self.calls, "Entering privatized body");
        (self.body)(&mut self.slots, args)
    }

    /// Converts into a plain closure with the original calling convention.
    pub fn into_fn<A, R>(mut self) -> impl FnMut(A) -> R
    where
        F: FnMut(&mut Slots, A) -> R,
    {
        move |args| self.call(args)
    }

    /// Names declared in the private scope.
    pub fn declared(&self) -> &SlotNameSet {
        self.slots.names()
    }

    /// How many times the body has been entered.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl<F> fmt::Debug for Privatized<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Privatized")
            .field("scope", &self.slots.names().to_string())
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ValidationPolicy;
    use crate::MemoError;

    fn counter(slots: &mut Slots, _: ()) -> MemoResult<i64> {
        let seed = slots.get_or_insert_with("seed", || 0i64)?;
        let current = *seed;
        *seed += 1;
        Ok(current)
    }

    #[test]
    fn test_persistence_across_calls() {
        let mut run = privatize(counter, ["seed"]).unwrap();
        let values: Vec<i64> = (0..5).map(|_| run.call(()).unwrap()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        assert_eq!(run.calls(), 5);
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut first = privatize(counter, ["seed"]).unwrap();
        let mut second = privatize(counter, ["seed"]).unwrap();

        first.call(()).unwrap();
        first.call(()).unwrap();

        assert_eq!(second.call(()).unwrap(), 0);
        assert_eq!(first.call(()).unwrap(), 2);
    }

    #[test]
    fn test_unset_until_first_write() {
        let mut observe = privatize(
            |slots: &mut Slots, write: bool| -> MemoResult<bool> {
                let before = slots.is_set("x")?;
                if write {
                    slots.set("x", "value")?;
                }
                Ok(before)
            },
            ["x"],
        )
        .unwrap();

        assert!(!observe.call(false).unwrap());
        assert!(!observe.call(true).unwrap());
        assert!(observe.call(false).unwrap());
    }

    #[test]
    fn test_arguments_and_return_pass_through() {
        let mut add = privatize(
            |slots: &mut Slots, (a, b): (i32, i32)| -> MemoResult<(i32, u32)> {
                let n = slots.get_or_insert_with("n", || 0u32)?;
                *n += 1;
                Ok((a + b, *n))
            },
            ["n"],
        )
        .unwrap();

        assert_eq!(add.call((2, 3)).unwrap(), (5, 1));
        assert_eq!(add.call((10, -4)).unwrap(), (6, 2));
    }

    #[test]
    fn test_name_order_does_not_change_behavior() {
        let body = |slots: &mut Slots, x: i64| -> MemoResult<i64> {
            let a = *slots.get_or_insert_with("a", || 1i64)?;
            let b = slots.get_or_insert_with("b", || 0i64)?;
            *b += x;
            Ok(a + *b)
        };

        let mut ab = privatize(body, ["a", "b"]).unwrap();
        let mut ba = privatize(body, ["b", "a"]).unwrap();
        for x in [3, 4, 5] {
            assert_eq!(ab.call(x).unwrap(), ba.call(x).unwrap());
        }
    }

    #[test]
    fn test_into_fn() {
        let mut next = privatize(counter, ["seed"]).unwrap().into_fn();
        assert_eq!(next(()).unwrap(), 0);
        assert_eq!(next(()).unwrap(), 1);
    }

    #[test]
    fn test_undeclared_name_is_not_captured() {
        let mut run = privatize(
            |slots: &mut Slots, _: ()| slots.set("other", 1u8),
            ["seed"],
        )
        .unwrap();
        assert!(matches!(run.call(()), Err(MemoError::UndeclaredSlot(ref n)) if n == "other"));
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            privatize(counter, ["not valid"]),
            Err(MemoError::InvalidName(_))
        ));
        assert!(matches!(privatize(counter, ["loop"]), Err(MemoError::ReservedName(_))));
        assert!(matches!(
            privatize(counter, Vec::<String>::new()),
            Err(MemoError::EmptyNames)
        ));
    }

    #[test]
    fn test_strict_privatizer_rejects_duplicates() {
        let strict = Privatizer::new(PrivatizerConfig::strict());
        let err = strict.privatize(counter, ["seed", "seed"]).unwrap_err();
        assert!(matches!(err, MemoError::DuplicateName(_)));

        assert_eq!(strict.config().policy, ValidationPolicy::Strict);
        assert_eq!(Privatizer::default().config().policy, ValidationPolicy::Permissive);

        let mut run = Privatizer::default().privatize(counter, ["seed", "seed"]).unwrap();
        assert_eq!(run.declared().len(), 1);
        assert_eq!(run.call(()).unwrap(), 0);
    }

    #[test]
    fn test_debug_output() {
        let run = privatize(counter, ["seed"]).unwrap();
        let debug = format!("{:?}", run);
        assert!(debug.contains("var seed;"));
        assert!(debug.contains("calls: 0"));
    }
}
