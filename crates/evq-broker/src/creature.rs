#![forbid(unsafe_code)]

//! The canonical broker consumer: a creature whose stats are computed, not
//! stored.

use crate::broker::QueryBroker;
use crate::query::{Stat, StatQuery};

/// A domain object that routes every stat read through the broker.
///
/// The creature knows its base values only. Every read of
/// [`attack`](Self::attack) or [`defense`](Self::defense) performs a fresh
/// query, so the answer always reflects whichever modifiers are currently
/// subscribed — the creature never references a modifier, and no modifier
/// references the creature.
pub struct Creature {
    broker: QueryBroker,
    name: String,
    base_attack: i64,
    base_defense: i64,
}

impl Creature {
    pub fn new(
        broker: &QueryBroker,
        name: impl Into<String>,
        base_attack: i64,
        base_defense: i64,
    ) -> Self {
        Self {
            broker: broker.clone(),
            name: name.into(),
            base_attack,
            base_defense,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current attack: base value run through the modifier chain.
    #[must_use]
    pub fn attack(&self) -> i64 {
        self.stat(Stat::Attack, self.base_attack)
    }

    /// Current defense: base value run through the modifier chain.
    #[must_use]
    pub fn defense(&self) -> i64 {
        self.stat(Stat::Defense, self.base_defense)
    }

    fn stat(&self, stat: Stat, base: i64) -> i64 {
        let mut query = StatQuery::new(self.name.clone(), stat, base);
        self.broker.perform_query(&mut query);
        query.value
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (attack {}, defense {})",
            self.name,
            self.attack(),
            self.defense()
        )
    }
}

impl std::fmt::Debug for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creature")
            .field("name", &self.name)
            .field("base_attack", &self.base_attack)
            .field("base_defense", &self.base_defense)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
