//! Error types

/// Errors returned by the data layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filter or sort referenced a field the record type does not have.
    #[error("unknown field '{field}' on {record}")]
    UnknownField {
        record: &'static str,
        field: String,
    },

    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// An embedded fixture failed to parse.
    #[error("failed to parse fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
