use std::path::PathBuf;

/// Errors raised while reading, converting or persisting vendoring metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse vendor file `{}`", .path.display())]
    VendorFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize vendor file")]
    Serialize(#[source] serde_json::Error),

    #[error("Project root `{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unknown vendoring system `{0}`")]
    UnknownSystem(String),

    #[error("No `{0}` configuration found in the project root")]
    NotApplicable(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
