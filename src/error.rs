use thiserror::Error;

/// Recoverable failures reported by the containers.
///
/// Expected absences (a search miss, an empty heap, the successor of the
/// largest node) are `None`, never an `Error`. A heap key decrease through
/// [`PriorityHeap::increase_key`](crate::PriorityHeap::increase_key) is a bug
/// and panics instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An absent key was passed where a value is required. The structure was
    /// left untouched.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
