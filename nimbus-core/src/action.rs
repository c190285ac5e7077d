//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions describe intents to change state. They must be:
/// - `Clone`: actions may be logged or fanned out to several handlers
/// - `Debug`: for logging
/// - `Send + 'static`: results of async work are sent across task boundaries
pub trait Action: Clone + Debug + Send + 'static {
    /// Name of the action variant, used for logging and filtering.
    fn name(&self) -> &'static str;
}
