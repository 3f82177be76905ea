#![forbid(unsafe_code)]

//! The mediator façade: one channel, one domain-shaped operation.

use evq_core::Channel;
use tracing::trace;

use crate::query::StatQuery;

/// Mediator between stat readers and stat modifiers.
///
/// Holds no domain logic and no state beyond its query channel. Cloning a
/// broker creates a new handle to the **same** channel, so modifiers
/// registered through one handle answer queries performed through another.
///
/// Readers call [`perform_query`](Self::perform_query); modifiers subscribe
/// via the channel handle from [`queries`](Self::queries). Neither side ever
/// references the other.
#[derive(Clone)]
pub struct QueryBroker {
    queries: Channel<StatQuery>,
}

impl QueryBroker {
    /// Create a broker with an empty query channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queries: Channel::new(),
        }
    }

    /// Run `query` past every live modifier, in registration order.
    ///
    /// Returns once all handlers have run; the caller then reads the
    /// accumulated result from `query.value`.
    pub fn perform_query(&self, query: &mut StatQuery) {
        trace!(subject = query.subject(), stat = ?query.stat(), "perform query");
        self.queries.publish(query);
    }

    /// A handle to the underlying query channel, for subscription.
    #[must_use]
    pub fn queries(&self) -> Channel<StatQuery> {
        self.queries.clone()
    }
}

impl Default for QueryBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBroker")
            .field("queries", &self.queries)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Stat;
    use std::rc::Rc;

    #[test]
    fn query_without_modifiers_is_unchanged() {
        let broker = QueryBroker::new();
        let mut query = StatQuery::new("nobody", Stat::Attack, 11);
        broker.perform_query(&mut query);
        assert_eq!(query.value, 11);
    }

    #[test]
    fn clone_shares_the_channel() {
        let broker = QueryBroker::new();
        let handle = broker.clone();

        let target = Rc::new(());
        let _sub = handle
            .queries()
            .subscribe(&target, |_: &(), query: &mut StatQuery| {
                query.value += 1;
            });

        let mut query = StatQuery::new("anyone", Stat::Defense, 0);
        broker.perform_query(&mut query);
        assert_eq!(query.value, 1);
    }

    #[test]
    fn debug_format() {
        let broker = QueryBroker::new();
        let dbg = format!("{broker:?}");
        assert!(dbg.contains("QueryBroker"));
    }
}
