use std::path::PathBuf;

/// Errors surfaced by the nav bar.
#[derive(thiserror::Error, Debug)]
pub enum NavBarError {
    /// The configured tab shape is not one the renderer knows how to draw.
    #[error("tab shape `{0}` is not supported (expected `Rectangle` or `RoundedRectangle`)")]
    UnsupportedShape(String),

    /// A tab was requested from a position the registry does not hold.
    #[error("tab index {index} out of range for {len} tab(s)")]
    OutOfRange { index: usize, len: usize },

    #[error("failed to read config {}", path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to write config {}", path.display())]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerialize(#[from] ron::Error),
}

impl NavBarError {
    /// Returns `true` for the render-time configuration failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, NavBarError::UnsupportedShape(_))
    }
}
