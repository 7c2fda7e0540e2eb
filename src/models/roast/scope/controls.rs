//! Control-bar state for the roast scope.

use super::{RoastEvents, RoastScopeModel, Sample, ScopeView};

/// Power and run state of the scope.
///
/// ```text
///          toggle_power            start
///   Off <---------------> Idle ------------> Running
///    ^                     ^                    |
///    |                     +------ reset -------+
///    +------------- toggle_power ---------------+
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScopeState {
    /// Powered off.
    Off,
    /// Powered on, not recording.
    #[default]
    Idle,
    /// Powered on and recording.
    Running,
}

impl ScopeState {
    #[must_use]
    pub fn is_on(self) -> bool {
        self != Self::Off
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// The roast scope with its control bar.
///
/// Holds the displayed dataset and its presentation state. The numeric
/// pipeline never reads the state; it only decides which dataset is shown.
#[derive(Debug, Clone)]
pub struct RoastScope {
    model: RoastScopeModel,
    state: ScopeState,
    feed: Option<Vec<Sample>>,
    data: Vec<Sample>,
    events: RoastEvents,
}

impl RoastScope {
    /// Creates a powered-on, idle scope.
    ///
    /// Shows `feed` if given, otherwise the model's demo profile.
    #[must_use]
    pub fn new(model: RoastScopeModel, feed: Option<Vec<Sample>>, events: RoastEvents) -> Self {
        let data = feed.clone().unwrap_or_else(|| model.demo.generate());
        Self {
            model,
            state: ScopeState::default(),
            feed,
            data,
            events,
        }
    }

    /// Creates a scope showing the default demo profile and events.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(RoastScopeModel::default(), None, RoastEvents::default())
    }

    #[must_use]
    pub fn state(&self) -> ScopeState {
        self.state
    }

    /// Samples currently on display.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.data
    }

    #[must_use]
    pub fn events(&self) -> &RoastEvents {
        &self.events
    }

    pub fn set_events(&mut self, events: RoastEvents) {
        self.events = events;
    }

    /// Replaces the external feed and shows it immediately.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        self.data.clone_from(&samples);
        self.feed = Some(samples);
    }

    /// Switches power. Turning off discards the running state.
    pub fn toggle_power(&mut self) {
        self.transition(match self.state {
            ScopeState::Off => ScopeState::Idle,
            ScopeState::Idle | ScopeState::Running => ScopeState::Off,
        });
    }

    /// Starts recording. Ignored unless the scope is on and idle.
    pub fn start(&mut self) {
        if self.state == ScopeState::Idle {
            self.transition(ScopeState::Running);
        }
    }

    /// Stops recording and reloads the dataset.
    ///
    /// The feed is shown again if one was supplied, otherwise the demo profile
    /// is regenerated. Power is left unchanged.
    pub fn reset(&mut self) {
        if self.state == ScopeState::Running {
            self.transition(ScopeState::Idle);
        }
        self.data = match &self.feed {
            Some(feed) => feed.clone(),
            None => self.model.demo.generate(),
        };
    }

    /// Builds the chart view for the displayed dataset.
    #[must_use]
    pub fn view(&self) -> ScopeView {
        self.model.view(&self.data, &self.events)
    }

    fn transition(&mut self, next: ScopeState) {
        log::debug!("roast scope {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
