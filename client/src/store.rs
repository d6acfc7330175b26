//! The view runtime.
//!
//! [`ViewStore`] owns the state, runs the reducer, and drives the effects the
//! reducer returns, feeding any resulting actions back in until the view is
//! quiescent. Effects run inline on the dispatching task, so when `dispatch`
//! returns the state already reflects every confirmation.

use taskpad_core::effect::Effect;
use taskpad_core::reducer::Reducer;
use tokio::sync::RwLock;

/// Runtime wrapper around a reducer, its state, and its environment.
pub struct ViewStore<R: Reducer> {
    state: RwLock<R::State>,
    reducer: R,
    environment: R::Environment,
}

impl<R> ViewStore<R>
where
    R: Reducer,
    R::State: Send + Sync,
    R::Action: Send,
    R::Environment: Send + Sync,
{
    /// Create a store with an initial state.
    pub fn new(initial: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            state: RwLock::new(initial),
            reducer,
            environment,
        }
    }

    /// Dispatch an action and drive its effects to completion.
    ///
    /// Feedback actions from effects are processed in the order the effects
    /// produced them. The write lock is held only while reducing, never
    /// across an effect await.
    pub async fn dispatch(&self, action: R::Action) {
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(action);

        while let Some(action) = queue.pop_front() {
            let effects = {
                let mut state = self.state.write().await;
                self.reducer.reduce(&mut state, action, &self.environment)
            };

            for effect in effects {
                match effect {
                    Effect::None => {}
                    Effect::Future(future) => {
                        if let Some(next) = future.await {
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
    }

    /// Read the current state through a projection.
    pub async fn state<T>(&self, project: impl FnOnce(&R::State) -> T) -> T {
        let state = self.state.read().await;
        project(&state)
    }
}
