//! The counter widget: single owner of the state.

use crate::core::{apply, classify, Action, CounterState, Outcome, StateHistory, StateTransition};
use crate::effects::renderer::{RenderError, Renderer};
use crate::view::{render, View, ViewConfig};
use chrono::Utc;
use std::marker::PhantomData;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::debug;

/// Counter widget that applies button presses and presents the result.
///
/// State changes happen synchronously in [`press`](Self::press). The
/// returned effect from [`dispatch`](Self::dispatch) only carries the
/// rendered view to the environment.
pub struct CounterWidget<Env: Renderer + Clone + Send + Sync + 'static> {
    state: CounterState,
    history: StateHistory<CounterState>,
    config: ViewConfig,
    _phantom: PhantomData<Env>,
}

impl<Env: Renderer + Clone + Send + Sync + 'static> CounterWidget<Env> {
    /// Create a widget at the initial state (count 0, no error).
    pub fn new(config: ViewConfig) -> Self {
        Self::with_state(CounterState::new(), config)
    }

    /// Create a widget seeded with `state`.
    pub fn with_state(state: CounterState, config: ViewConfig) -> Self {
        Self {
            state,
            history: StateHistory::new(),
            config,
            _phantom: PhantomData,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Get action history (pure)
    pub fn history(&self) -> &StateHistory<CounterState> {
        &self.history
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Render the current state (pure)
    pub fn view(&self) -> View {
        render(&self.state, &self.config)
    }

    /// Apply `action` to the state and record it.
    ///
    /// A decrement at zero is not a failure: it raises the error flag and
    /// reports [`Outcome::Rejected`].
    pub fn press(&mut self, action: Action) -> Outcome {
        let from = self.state;
        let outcome = classify(&from, action);
        let to = apply(from, action);

        self.history = self.history.record(StateTransition {
            from,
            to,
            action,
            outcome,
            timestamp: Utc::now(),
        });
        self.state = to;

        debug!(%action, %from, %to, %outcome, "counter action handled");
        outcome
    }

    /// Press `action`, then return an effect that presents the new view.
    ///
    /// The state is already updated when this returns; running the effect
    /// only talks to the environment's [`Renderer`].
    pub fn dispatch(
        &mut self,
        action: Action,
    ) -> impl Effect<Output = View, Error = RenderError, Env = Env> {
        self.press(action);
        let view = self.view();

        from_fn(move |env: &Env| -> Result<View, RenderError> {
            env.present(&view)?;
            Ok(view.clone())
        })
    }
}

impl<Env: Renderer + Clone + Send + Sync + 'static> Default for CounterWidget<Env> {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Headless;
    use crate::view::ERROR_MESSAGE;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingEnv {
        presented: Arc<Mutex<Vec<View>>>,
    }

    impl Renderer for RecordingEnv {
        fn present(&self, view: &View) -> Result<(), RenderError> {
            self.presented.lock().unwrap().push(view.clone());
            Ok(())
        }
    }

    #[derive(Clone)]
    struct FailingEnv;

    impl Renderer for FailingEnv {
        fn present(&self, _view: &View) -> Result<(), RenderError> {
            Err(RenderError::PresentFailed("display detached".to_string()))
        }
    }

    #[test]
    fn press_updates_state_and_history() {
        let mut widget: CounterWidget<Headless> = CounterWidget::default();

        assert_eq!(widget.press(Action::Increment), Outcome::Incremented);
        assert_eq!(widget.press(Action::Decrement), Outcome::Decremented);
        assert_eq!(widget.press(Action::Decrement), Outcome::Rejected);

        assert_eq!(widget.state().count(), 0);
        assert!(widget.state().error_active());
        assert_eq!(widget.history().transitions().len(), 3);
        assert_eq!(widget.history().rejected_count(), 1);
    }

    #[test]
    fn seeded_widget_starts_at_given_count() {
        let widget: CounterWidget<Headless> =
            CounterWidget::with_state(CounterState::with_count(7), ViewConfig::default());
        assert_eq!(widget.view().counter_text(), "The counter is currently: 7");
        assert!(widget.history().is_empty());
    }

    #[tokio::test]
    async fn dispatch_presents_new_view() {
        let env = RecordingEnv::default();
        let mut widget: CounterWidget<RecordingEnv> = CounterWidget::default();

        let view = widget.dispatch(Action::Decrement).run(&env).await.unwrap();

        assert!(view.find_by_test_attr(ERROR_MESSAGE).is_some());
        let presented = env.presented.lock().unwrap();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0], view);
    }

    #[tokio::test]
    async fn render_failure_keeps_state_change() {
        let mut widget: CounterWidget<FailingEnv> = CounterWidget::default();

        let result = widget.dispatch(Action::Increment).run(&FailingEnv).await;

        assert_eq!(
            result.unwrap_err(),
            RenderError::PresentFailed("display detached".to_string())
        );
        assert_eq!(widget.state().count(), 1);
    }
}
