#![forbid(unsafe_code)]

//! Core: typed event channels with weak subscribers and explicit disposal.
//!
//! # Role in evq
//! `evq-core` is the fan-out layer. It owns subscription registration,
//! liveness tracking, and synchronous in-order delivery. Everything above it
//! (the query broker, domain modifiers) is a thin consumer of this surface.
//!
//! # Primary responsibilities
//! - **Channel\<T\>**: ordered registry of subscriptions for one payload
//!   type, with synchronous publish fan-out in registration order.
//! - **Disposal**: capability token that severs exactly one subscription.
//! - **Weak binding**: a subscription never keeps its target alive; dead
//!   targets are skipped silently and pruned lazily.
//!
//! # How it fits in the system
//! The broker crate (`evq-broker`) wraps one `Channel<StatQuery>` behind a
//! mediator façade. Channels are monomorphized per payload type, so a
//! publisher and its subscribers can never disagree about the payload —
//! there is no runtime casting anywhere in the dispatch path.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use evq_core::Channel;
//!
//! let channel: Channel<i64> = Channel::new();
//! let calls = Rc::new(Cell::new(0u32));
//! let mut sub = channel.subscribe(&calls, |calls: &Cell<u32>, value: &mut i64| {
//!     calls.set(calls.get() + 1);
//!     *value *= 2;
//! });
//!
//! let mut value = 21;
//! channel.publish(&mut value);
//! assert_eq!(value, 42);
//! assert_eq!(calls.get(), 1);
//!
//! sub.dispose();
//! channel.publish(&mut value);
//! assert_eq!(calls.get(), 1);
//! ```

pub mod channel;
pub mod disposal;

pub use channel::Channel;
pub use disposal::Disposal;
