#![forbid(unsafe_code)]

//! Typed event channel with weak subscribers and in-order synchronous fan-out.
//!
//! # Design
//!
//! [`Channel<T>`] keeps an ordered list of subscriptions in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). Each subscription binds a
//! weakly-held target object to a handler; `publish` invokes every live
//! handler with the same mutable payload, in registration order.
//!
//! The target is captured as a `Weak`, inside a single bound callback. The
//! channel never holds a strong reference to any subscriber, so a
//! subscription cannot be the reason its target stays alive.
//!
//! # Performance
//!
//! | Operation      | Complexity                  |
//! |----------------|-----------------------------|
//! | `subscribe()`  | O(1) amortized              |
//! | `publish()`    | O(S) where S = subscriptions|
//! | `dispose()`    | O(S)                        |
//! | Memory         | ~3 words per subscription   |
//!
//! # Failure Modes
//!
//! - **Dead target on dispatch**: not an error. The handler is skipped
//!   silently; the entry is pruned at the start of the next `publish`.
//! - **Re-entrant publish**: supported. Handlers run outside the `RefCell`
//!   borrow, over a snapshot taken at the start of the call, so a handler
//!   may publish, subscribe, or dispose on the same channel without
//!   corrupting the in-flight iteration.
//! - **Subscription leak**: a subscriber that neither disposes nor dies
//!   stays in the list indefinitely. That is a list-entry leak, not a
//!   memory-safety issue — the target itself is only weakly held.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::disposal::Disposal;

/// A handler bound to its (weakly held) target. Invoking it with a payload
/// is a no-op once the target is gone.
type BoundHandler<T> = Rc<dyn Fn(&mut T)>;

/// One registered subscription.
struct Entry<T> {
    id: u64,
    /// Liveness probe for lazy compaction. The typed weak reference lives
    /// inside `invoke`; this erased twin only answers "is the target alive".
    target: Weak<dyn Any>,
    invoke: BoundHandler<T>,
}

/// Shared interior for [`Channel<T>`].
struct ChannelInner<T> {
    /// Subscriptions in registration order. Order is load-bearing: stacked
    /// payload mutations produce different results under reordering.
    entries: Vec<Entry<T>>,
    next_id: u64,
    publish_count: u64,
}

/// An ordered registry of weak subscriptions with synchronous fan-out.
///
/// Cloning a `Channel` creates a new handle to the **same** inner state —
/// both handles share the subscription list.
///
/// # Invariants
///
/// 1. No two entries share an id; ids are minted from a monotonic counter.
/// 2. Handlers are invoked in registration order, every publish.
/// 3. A subscription never extends its target's lifetime.
/// 4. Dead entries are pruned lazily at the start of each `publish`;
///    explicit disposal removes eagerly.
pub struct Channel<T> {
    inner: Rc<RefCell<ChannelInner<T>>>,
}

// Manual Clone: shares the same Rc regardless of whether T is Clone.
impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Channel")
            .field("subscriber_count", &inner.entries.len())
            .field("publish_count", &inner.publish_count)
            .finish()
    }
}

impl<T: 'static> Channel<T> {
    /// Create an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                entries: Vec::new(),
                next_id: 0,
                publish_count: 0,
            })),
        }
    }

    /// Register `handler` against `target` at the end of the subscription
    /// list.
    ///
    /// The channel keeps only a `Weak` to `target`; once the last strong
    /// reference elsewhere is released, the subscription goes dead and the
    /// handler is never invoked again. The handler receives the upgraded
    /// target and the payload being published, and should affect the world
    /// only through those two.
    ///
    /// Returns a [`Disposal`] token that severs exactly this subscription.
    /// Dropping the token does **not** unsubscribe — disposal is an explicit
    /// act (see the token's docs).
    pub fn subscribe<S>(
        &self,
        target: &Rc<S>,
        handler: impl Fn(&S, &mut T) + 'static,
    ) -> Disposal
    where
        S: 'static,
    {
        let typed = Rc::downgrade(target);
        let probe: Weak<dyn Any> = typed.clone();
        let invoke: BoundHandler<T> = Rc::new(move |payload: &mut T| {
            // Dead target: skip silently. The entry itself is removed by
            // the lazy compaction pass of a later publish.
            if let Some(target) = typed.upgrade() {
                handler(&target, payload);
            }
        });

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push(Entry {
                id,
                target: probe,
                invoke,
            });
            id
        };
        trace!(id, "subscription registered");

        let interior = Rc::downgrade(&self.inner);
        Disposal::new(move || {
            // Channel already gone: severing is a no-op.
            if let Some(interior) = interior.upgrade() {
                interior.borrow_mut().entries.retain(|entry| entry.id != id);
                trace!(id, "subscription severed");
            }
        })
    }

    /// Invoke every live subscription's handler with `payload`, in
    /// registration order.
    ///
    /// Mutations made by earlier handlers are visible to later handlers in
    /// the same call, and to the publisher once `publish` returns.
    ///
    /// The fan-out iterates a snapshot taken at the start of the call:
    /// subscriptions added by a handler are not seen by the in-flight
    /// fan-out, and a subscription disposed mid-flight still receives this
    /// publish if it was in the snapshot. Dead entries are pruned before
    /// the snapshot is taken.
    pub fn publish(&self, payload: &mut T) {
        let snapshot: Vec<BoundHandler<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.publish_count += 1;
            // Lazy compaction, then snapshot. The borrow is released before
            // any handler runs, so handlers may re-enter freely.
            inner.entries.retain(|entry| entry.target.strong_count() > 0);
            inner
                .entries
                .iter()
                .map(|entry| Rc::clone(&entry.invoke))
                .collect()
        };

        trace!(fan_out = snapshot.len(), "publish");
        for invoke in &snapshot {
            invoke(payload);
        }
    }

    /// Number of currently registered entries, including dead ones not yet
    /// pruned by a publish.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Number of `publish` calls made on this channel (re-entrant calls
    /// included). Useful as a cheap diagnostic counter.
    #[must_use]
    pub fn publish_count(&self) -> u64 {
        self.inner.borrow().publish_count
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
