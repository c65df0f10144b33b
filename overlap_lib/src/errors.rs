#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("event stop must be after its start")]
    InvalidRange,

    #[error("an event with the same start and stop is already known")]
    DuplicateInterval,

    #[error("no such event known")]
    NotFound,

    // Only reported when Settings::reject_nested is set
    #[error("event fully overlaps an already known event")]
    NestedInterval,
}
