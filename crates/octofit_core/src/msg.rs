#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// View became visible; triggers the single fetch.
    Activated,
    /// View is no longer observed; late results are discarded.
    Deactivated,
    /// Fetch and normalization succeeded.
    LoadSucceeded(Vec<crate::Record>),
    /// Fetch, HTTP status or decode failure, with the user-visible message.
    LoadFailed(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
