use thiserror::Error;

/// The cache store could not be read or written.
///
/// Storage failures are fatal to the current operation; they are never replaced by a stale
/// value or silently ignored.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to read {key} from cache: {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: sea_orm::DbErr,
    },
    #[error("Failed to write {key} to cache: {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: sea_orm::DbErr,
    },
    /// The stored value could not be decoded, or a value could not be encoded for storage.
    #[error("Cached value for {key} is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
