//! Error types for poselab.

/// Result type alias for poselab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for poselab.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Override names a key that does not exist in the hyperparameter schema.
    #[error("unknown hyperparameter '{path}'")]
    UnknownKey {
        /// Dotted path of the offending key.
        path: String,
    },

    /// Override value kind is incompatible with the schema default.
    #[error("type mismatch for '{path}': expected {expected}, got {found}")]
    TypeMismatch {
        /// Dotted path of the offending key.
        path: String,
        /// Value kind of the schema default.
        expected: &'static str,
        /// Value kind found in the override.
        found: &'static str,
    },

    /// Override source is not a key-value mapping.
    #[error("override source must be a mapping, got {found}")]
    NotAMapping {
        /// Value kind found at the root.
        found: &'static str,
    },

    /// Mapping key is not a string.
    #[error("non-string key under '{path}'")]
    NonStringKey {
        /// Dotted path of the mapping holding the key.
        path: String,
    },

    /// Merged tree does not deserialize into the hyperparameter schema.
    #[error("merged configuration is not a valid hyperparameter set")]
    InvalidHparams {
        /// Underlying deserialization error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Excluded key is absent from the flattened configuration.
    #[error("excluded key '{path}' not present in the configuration")]
    ExcludedKeyNotFound {
        /// Dotted path of the missing key.
        path: String,
    },

    /// A hyperparameter has an empty candidate list.
    #[error("hyperparameter '{path}' has an empty value list")]
    EmptyValueList {
        /// Dotted path of the offending key.
        path: String,
    },

    /// Requested variant index exceeds the number of expanded variants.
    #[error("config index {index} out of range ({count} variant(s) available)")]
    VariantOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of variants produced by the expansion.
        count: usize,
    },

    /// Failed to create the run directory.
    #[error("failed to create run directory '{path}'")]
    RunDirCreate {
        /// Path to the run directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy the source configuration into the run directory.
    #[error("failed to copy source config to '{path}'")]
    SourceCopy {
        /// Destination path of the copy.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration snapshot.
    #[error("failed to write config snapshot '{path}'")]
    SnapshotWrite {
        /// Path to the snapshot file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to serialize the JSON expansion summary.
    #[error("failed to serialize expansion summary")]
    SummarySerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
