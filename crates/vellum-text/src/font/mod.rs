pub mod face;
pub mod loader;
pub mod metrics;

pub use face::FontFace;
pub use loader::{FontCache, FontKey, load_font};
pub use metrics::{FontMetrics, ScaledFontMetrics, TextMetrics};

use thiserror::Error;

/// Errors that can occur while working with fonts.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data")]
    InvalidFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
