//! Error types for collection operations.

/// Error type for the fallible [`Collection`] operations.
///
/// Most operations on a collection are total and cannot fail. The two
/// exceptions are [`Collection::chunk`], which rejects a chunk size of zero,
/// and [`Collection::avg`], which has no defined result over zero elements.
///
/// [`Collection`]: crate::Collection
/// [`Collection::chunk`]: crate::Collection::chunk
/// [`Collection::avg`]: crate::Collection::avg
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A chunk size of zero was requested.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// An average was requested over zero elements.
    #[error("cannot average an empty collection")]
    EmptyCollection,
}
