#![forbid(unsafe_code)]

//! Query payload: fixed identity, accumulating value.

/// The attribute a query concerns. Closed set: the broker never interprets
/// it, only modifiers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Attack,
    Defense,
}

/// A mutable query payload routed through the broker.
///
/// # Invariants
///
/// 1. Identity (`subject`, `stat`) is fixed at construction; the fields are
///    private so no handler can rebind a query mid-fan-out.
/// 2. Only `value` changes during a publish, accumulating each modifier's
///    effect in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatQuery {
    subject: String,
    stat: Stat,
    /// Accumulated stat value. Starts at the subject's base value and is
    /// mutated in place by each interested modifier.
    pub value: i64,
}

impl StatQuery {
    /// Build a query for `subject`'s `stat`, seeded with its base `value`.
    #[must_use]
    pub fn new(subject: impl Into<String>, stat: Stat, value: i64) -> Self {
        Self {
            subject: subject.into(),
            stat,
            value,
        }
    }

    /// The entity this query concerns.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The attribute being queried.
    #[must_use]
    pub fn stat(&self) -> Stat {
        self.stat
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
