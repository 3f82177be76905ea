#![forbid(unsafe_code)]

//! Disposal tokens: the capability to sever exactly one subscription.
//!
//! A [`Disposal`] is minted by [`Channel::subscribe`](crate::Channel::subscribe)
//! and owned by whoever made the subscription. It has exactly one power:
//! removing that subscription from its channel. It is type-erased, so tokens
//! from channels of different payload types can live in the same collection.
//!
//! # Invariants
//!
//! 1. `dispose()` is idempotent: the second and every later call is a no-op.
//! 2. Disposing after the target has died, or after the channel itself has
//!    been dropped, is a silent no-op.
//! 3. Dropping the token does **not** unsubscribe. An ignored token leaves
//!    the subscription registered until its target dies — a list-entry leak,
//!    never a memory-safety issue, because the channel holds the target only
//!    weakly.

/// Capability to remove exactly one subscription from its channel.
#[must_use = "dropping a Disposal does not unsubscribe; store it and call dispose()"]
pub struct Disposal {
    /// The severing action, consumed on first dispose. Captures only a weak
    /// handle to the channel interior plus the subscription id.
    sever: Option<Box<dyn FnOnce()>>,
}

impl Disposal {
    pub(crate) fn new(sever: impl FnOnce() + 'static) -> Self {
        Self {
            sever: Some(Box::new(sever)),
        }
    }

    /// Remove the subscription this token was minted for.
    ///
    /// Safe to call repeatedly, after the subscriber has died, after the
    /// channel has been dropped, and from inside a handler during an
    /// in-flight publish (the fan-out iterates a snapshot, so the current
    /// delivery round is unaffected).
    pub fn dispose(&mut self) {
        if let Some(sever) = self.sever.take() {
            sever();
        }
    }

    /// Whether `dispose` has already run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.sever.is_none()
    }
}

impl std::fmt::Debug for Disposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposal")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
