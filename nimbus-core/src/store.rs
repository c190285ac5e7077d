//! Effect-aware state store with reducer pattern
//!
//! The store holds the application state and funnels every mutation through
//! a single pure reducer. The reducer returns a [`DispatchResult`]: whether
//! the state changed (so the caller knows to re-render) plus any declared
//! side effects. Effects are descriptions of work, not the work itself;
//! the main loop decides how to execute them, which keeps the reducer free
//! of async code.

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified and a re-render is needed.
    pub changed: bool,
    /// Effects declared by the reducer, to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed and one effect was declared.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Append an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if there are effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that folds an action into the state and declares effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// State container driven by an effect-aware reducer.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    /// Create a store with the given initial state and reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state.
    ///
    /// Prefer dispatching actions; this exists for initialization.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Run the reducer for one action.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// Hooks called around every dispatch.
///
/// Implement to add logging or other cross-cutting concerns to a store.
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer.
    fn before(&mut self, action: &A);

    /// Called after the reducer ran, with the state-changed indicator.
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that traces every dispatched action.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Log before the reducer runs.
    pub log_before: bool,
    /// Log after the reducer ran.
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only.
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(action = %action.name(), state_changed, "action processed");
        }
    }
}

/// An [`EffectStore`] wrapped with middleware hooks.
pub struct EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    /// Create a store with middleware.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Get a mutable reference to the state.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Dispatch an action through middleware and reducer.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increment,
        Announce,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Announce => "Announce",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Log(String),
    }

    #[derive(Default)]
    struct TestState {
        count: i32,
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Increment => {
                state.count += 1;
                DispatchResult::changed()
            }
            TestAction::Announce => {
                DispatchResult::changed_with(TestEffect::Log(format!("count: {}", state.count)))
            }
            TestAction::NoOp => DispatchResult::unchanged(),
        }
    }

    #[test]
    fn dispatch_runs_reducer() {
        let mut store = EffectStore::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Increment);
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(store.state().count, 1);

        let result = store.dispatch(TestAction::NoOp);
        assert!(!result.changed);
        assert_eq!(store.state().count, 1);
    }

    #[test]
    fn reducer_declares_effects() {
        let mut store = EffectStore::new(TestState::default(), test_reducer);
        store.dispatch(TestAction::Increment);

        let result = store.dispatch(TestAction::Announce);
        assert!(result.has_effects());
        assert!(matches!(&result.effects[0], TestEffect::Log(s) if s == "count: 1"));
    }

    #[test]
    fn with_appends_effect() {
        let result: DispatchResult<TestEffect> =
            DispatchResult::changed().with(TestEffect::Log("x".into()));
        assert!(result.changed);
        assert_eq!(result.effects.len(), 1);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, _state_changed: bool) {
            self.after_count += 1;
        }
    }

    #[test]
    fn middleware_sees_every_dispatch() {
        let mut store = EffectStoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::NoOp);

        assert_eq!(store.middleware.before_count, 2);
        assert_eq!(store.middleware.after_count, 2);
        assert_eq!(store.state().count, 1);
    }
}
