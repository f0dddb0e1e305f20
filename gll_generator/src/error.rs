use thiserror::Error;

/// Fatal generation errors.
///
/// Commands that use a known but unrepresentable type never produce an error; they are pruned from
/// the output instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry could not be decoded as XML.
    #[error("registry document is unreadable: {0}")]
    DocumentUnreadable(#[from] xml::reader::Error),

    /// The XML was well-formed but an entry was missing data the registry schema requires.
    #[error("malformed registry: {0}")]
    Malformed(String),

    /// A typedef whose base spelling is not in the known-typedef table. The type tables are stale.
    #[error("cannot parse typedef for {name}: {typedef:?}")]
    UnknownFundamentalType { name: String, typedef: String },

    /// A type name reached the type mapping without a valid classification.
    #[error("invalid type: {0:?}")]
    InvalidType(String),

    /// A foreign spelling was requested for the debug callback type, which only the callback
    /// bridge may handle.
    #[error("{0} has no C representation")]
    CallbackSignatureMisuse(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
