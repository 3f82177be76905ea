#![forbid(unsafe_code)]

//! Broker: a synchronous query/response mediator over a typed channel.
//!
//! # Role in evq
//! `evq-broker` is the mediator layer. Domain objects never reference each
//! other; they either ask the broker to run a query, or answer by mutating
//! the query they were handed. All channel mechanics stay hidden behind
//! [`QueryBroker`].
//!
//! # Primary responsibilities
//! - **QueryBroker**: façade owning one `Channel<StatQuery>`; pure plumbing.
//! - **StatQuery**: mutable payload with fixed identity and an accumulating
//!   value.
//! - **StatModifier**: filter-then-mutate subscriber that stacks with other
//!   modifiers in registration order.
//! - **Creature**: canonical consumer — every stat read routes through the
//!   broker so modifiers can stack without the creature knowing.
//!
//! # Example
//!
//! ```
//! use evq_broker::{Creature, QueryBroker, StatModifier};
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

pub mod broker;
pub mod creature;
pub mod modifier;
pub mod query;

pub use broker::QueryBroker;
pub use creature::Creature;
pub use modifier::StatModifier;
pub use query::{Stat, StatQuery};
