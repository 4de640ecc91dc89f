use std::path::PathBuf;

/// Every failure the engines, the dispatcher and the file codec can report.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("invalid implementation variant: {0}")]
    UnknownVariant(String),

    #[error("coordinates ({x},{y}) are invalid for a {width}x{height} world")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unable to access \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("worlds are not equal at x={x} y={y}\nfirst world:\n{left}second world:\n{right}")]
    WorldsDiverged {
        x: usize,
        y: usize,
        left: String,
        right: String,
    },
}
