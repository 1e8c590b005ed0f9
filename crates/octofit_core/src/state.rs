use crate::view_model::CollectionViewModel;
use crate::{resolve, Environment, Record, Resource};

/// Request lifecycle of one collection view.
///
/// Starts as `Loading` and moves exactly once to `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&[T]> {
        match self {
            ViewState::Ready(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Apply the fetch outcome. Returns false, leaving the state untouched,
    /// if it has already settled.
    pub fn settle(&mut self, outcome: Result<Vec<T>, String>) -> bool {
        if self.is_settled() {
            return false;
        }
        *self = match outcome {
            Ok(data) => ViewState::Ready(data),
            Err(message) => ViewState::Failed(message),
        };
        true
    }
}

/// State owned by one mounted collection view.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState {
    resource: Resource,
    url: String,
    view_state: ViewState<Record>,
    active: bool,
    fetch_issued: bool,
    dirty: bool,
}

impl CollectionState {
    pub fn new(resource: Resource, env: &Environment) -> Self {
        Self::with_url(resource, resolve(resource.path(), env))
    }

    /// State pointed at an explicit collection URL.
    pub fn with_url(resource: Resource, url: impl Into<String>) -> Self {
        Self {
            resource,
            url: url.into(),
            view_state: ViewState::Loading,
            active: false,
            fetch_issued: false,
            dirty: true,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn view_state(&self) -> &ViewState<Record> {
        &self.view_state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Derive the presentation model. Recomputed on every call.
    pub fn view(&self) -> CollectionViewModel {
        CollectionViewModel::derive(self.resource, &self.view_state)
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Mark active and claim the single fetch. Returns true the first time only.
    pub(crate) fn activate(&mut self) -> bool {
        self.active = true;
        if self.fetch_issued {
            return false;
        }
        self.fetch_issued = true;
        true
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Settle the view state if the view is still observed.
    pub(crate) fn apply_outcome(&mut self, outcome: Result<Vec<Record>, String>) -> bool {
        if !self.active {
            return false;
        }
        let changed = self.view_state.settle(outcome);
        self.dirty |= changed;
        changed
    }
}
