//! Dispatch machinery for the nimbus weather dashboard
//!
//! A Redux/Elm-inspired core: state lives in a store, every mutation goes
//! through a pure reducer, and side effects are declared by the reducer and
//! executed by the main loop.
//!
//! # Core concepts
//!
//! - **Action**: an intent to change state (user input, timer tick, async
//!   result)
//! - **Store**: state container; the reducer returns changed/effects
//! - **Effect**: declarative description of async work (e.g. an API call)
//! - **TaskManager**: keyed async tasks; re-spawning a key aborts the
//!   previous task
//! - **Subscriptions**: keyed interval timers, cancelled on teardown
//! - **EffectRuntime**: the select-loop over terminal events and actions
//! - **Component**: pure UI elements rendering from props
//!
//! Async work uses the two-phase action pattern: an intent action makes the
//! reducer declare an effect, the effect handler spawns a task, and the
//! task resolves to a `Did*` result action sent back through the channel.

pub mod action;
pub mod component;
pub mod event;
pub mod runtime;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, EffectStoreLike, EventOutcome, PollerConfig};
pub use store::{
    DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware, LoggingMiddleware,
    Middleware, NoopMiddleware,
};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};
