//! Error types for the decision engine.
//!
//! Only the ARN codec and the table loader can fail. The resolver never
//! returns an error: ambiguity and unknown input degrade to a Deny verdict.

use std::path::PathBuf;

/// Stable reason strings for [`ArnError::Malformed`].
///
/// These are part of the public contract: callers and tests assert on the
/// specific violation rather than matching on prose.
pub mod reasons {
    /// The input did not split into exactly six colon-delimited parts.
    pub const NOT_SIX_PARTS: &str = "does not consist of six colon-delimited parts";
    /// Part 0 was not the literal `arn`.
    pub const BAD_ARN_LITERAL: &str = "part 0 should be exact string 'arn'";
    /// Part 1 was not the literal `aws`.
    pub const BAD_PARTITION_LITERAL: &str = "part 1 should be exact string 'aws'";
    /// Part 2 named a service other than `execute-api`.
    pub const WRONG_SERVICE: &str = "part 2 is not 'execute-api' - this is not an API Gateway ARN";
    /// The resource path had fewer than four slash-delimited segments.
    pub const PATH_TOO_SHORT: &str =
        "path should consist of at least three parts: /{apiId}/{stage}/{httpVerb}/";
}

/// Codec errors raised while decoding a wire-format resource ARN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArnError {
    /// Input was empty or blank.
    #[error("ARN is null or blank")]
    Empty,

    /// Input did not match the wire format; `reason` is one of the
    /// constants in [`reasons`].
    #[error("ARN {reason}")]
    Malformed { reason: &'static str },
}

/// Result type for codec operations.
pub type ArnResult<T> = Result<T, ArnError>;

/// Errors raised while loading or validating a capability table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Reading the table file failed.
    #[error("failed to read capability table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table document was not valid YAML for the table shape.
    #[error("failed to parse capability table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A capability mapped to an empty rule list.
    #[error("capability '{capability}' has no rules")]
    NoRules { capability: String },

    /// A rule carried an empty method set.
    #[error("capability '{capability}' has a rule with no methods")]
    NoMethods { capability: String },
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
