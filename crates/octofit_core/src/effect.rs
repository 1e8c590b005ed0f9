#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCollection {
        resource: crate::Resource,
        url: String,
    },
}
