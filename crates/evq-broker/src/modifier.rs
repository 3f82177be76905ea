#![forbid(unsafe_code)]

//! Stat modifiers: filter-then-mutate subscribers that stack in
//! registration order.
//!
//! A modifier registers interest in one `(subject, stat)` pair at
//! construction and, on each matching query, rewrites `value` through its
//! transform. Non-matching queries pass through untouched. Because fan-out
//! order is registration order, stacking `×2` before `+3` and stacking them
//! the other way round produce different results — deliberately.

use std::rc::Rc;

use evq_core::Disposal;

use crate::broker::QueryBroker;
use crate::query::{Stat, StatQuery};

/// The subscription target: interest filter plus transform. Held strongly
/// by the modifier and only weakly by the channel, so dropping the modifier
/// kills the subscription even without explicit disposal.
struct ModifierBinding {
    subject: String,
    stat: Stat,
    apply: Box<dyn Fn(i64) -> i64>,
}

/// A stacked modifier of one subject's one stat.
///
/// Disposes its subscription on [`dispose`](Self::dispose) or on `Drop`,
/// whichever comes first; after either, it never sees another query.
pub struct StatModifier {
    /// Strong reference keeping the subscription's target alive.
    _binding: Rc<ModifierBinding>,
    disposal: Disposal,
}

impl StatModifier {
    /// Subscribe a transform for `subject`'s `stat` at the end of the
    /// broker's modifier chain.
    pub fn new(
        broker: &QueryBroker,
        subject: impl Into<String>,
        stat: Stat,
        apply: impl Fn(i64) -> i64 + 'static,
    ) -> Self {
        let binding = Rc::new(ModifierBinding {
            subject: subject.into(),
            stat,
            apply: Box::new(apply),
        });
        let disposal =
            broker
                .queries()
                .subscribe(&binding, |binding: &ModifierBinding, query: &mut StatQuery| {
                    if query.subject() == binding.subject && query.stat() == binding.stat {
                        query.value = (binding.apply)(query.value);
                    }
                });
        Self {
            _binding: binding,
            disposal,
        }
    }

    /// Double `subject`'s attack.
    pub fn double_attack(broker: &QueryBroker, subject: impl Into<String>) -> Self {
        Self::new(broker, subject, Stat::Attack, |value| value * 2)
    }

    /// Add a flat `bonus` to `subject`'s defense.
    pub fn fortify(broker: &QueryBroker, subject: impl Into<String>, bonus: i64) -> Self {
        Self::new(broker, subject, Stat::Defense, move |value| value + bonus)
    }

    /// Stop receiving queries. Idempotent; also runs on `Drop`.
    pub fn dispose(&mut self) {
        self.disposal.dispose();
    }

    /// Whether this modifier has been severed from the broker.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposal.is_disposed()
    }
}

impl Drop for StatModifier {
    fn drop(&mut self) {
        self.disposal.dispose();
    }
}

impl std::fmt::Debug for StatModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatModifier")
            .field("subject", &self._binding.subject)
            .field("stat", &self._binding.stat)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
