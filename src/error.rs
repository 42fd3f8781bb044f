use thiserror::Error;

/// Result type for argument processing
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error caused by malformed user input during a scan
///
/// The scan stops at the first error. Handlers invoked for options
/// matched earlier in the same scan have already run and are not
/// rolled back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An option-shaped token matched no descriptor
    #[error("unknown option '{token}'")]
    UnknownOption { token: String },

    /// An option requires a parameter but none was available
    #[error("option '{option}' requires a parameter")]
    MissingParameter { option: String },

    /// An inline value was given to an option that takes none
    #[error("option '{option}' does not take a parameter")]
    UnexpectedParameter { option: String },

    /// A parameter-taking short option appeared after other options
    /// in the same cluster
    #[error("option '{option}' requires a parameter and cannot be bundled")]
    ClusteredParameter { option: String },
}

/// A mistake in the option table itself
///
/// These reflect programmer error, not user input. They are detected
/// when a descriptor or processor is constructed, before any scanning
/// can happen, so they never interleave with handler side effects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A descriptor declared neither a short nor a long name
    #[error("option declares neither a short nor a long name")]
    Unnamed,

    /// A parameter-taking descriptor has no placeholder for usage text
    #[error("option '{option}' takes a parameter but has no placeholder")]
    MissingPlaceholder { option: String },

    /// Two descriptors claim the same short name
    #[error("duplicate short option '-{0}'")]
    DuplicateShort(char),

    /// Two descriptors claim the same long name
    #[error("duplicate long option '--{0}'")]
    DuplicateLong(String),
}
