use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no image to open; pass a file path or set \"image\" in config.json")]
    MissingImagePath,

    #[error("failed to load image {path}")]
    LoadImage {
        path: PathBuf,
        #[source]
        source: gtk4::glib::Error,
    },
}
