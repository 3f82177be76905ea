#![forbid(unsafe_code)]

//! evq: typed, synchronous, in-process publish/subscribe.
//!
//! One import surface over the workspace crates:
//!
//! - [`Channel`] / [`Disposal`] (`evq-core`): ordered registry of weakly
//!   bound subscriptions with in-order synchronous fan-out and explicit,
//!   idempotent disposal.
//! - [`QueryBroker`] / [`StatQuery`] / [`StatModifier`] / [`Creature`]
//!   (`evq-broker`): a mediator that lets independent modifiers observe and
//!   mutate a shared query without referencing each other.
//!
//! # Example
//!
//! ```
//! use evq::{Creature, QueryBroker, StatModifier};
//!
//! let broker = QueryBroker::new();
//! let goblin = Creature::new(&broker, "Strong Goblin", 3, 3);
//! assert_eq!(goblin.attack(), 3);
//!
//! let _double = StatModifier::double_attack(&broker, "Strong Goblin");
//! let _armor = StatModifier::fortify(&broker, "Strong Goblin", 2);
//! assert_eq!(goblin.attack(), 6);
//! assert_eq!(goblin.defense(), 5);
//! ```

pub use evq_broker::{Creature, QueryBroker, Stat, StatModifier, StatQuery};
pub use evq_core::{Channel, Disposal};
