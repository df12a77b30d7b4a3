use std::path::PathBuf;
use std::{env, io};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("OUT_DIR is not available: {0}")]
    MissingOutDir(#[source] env::VarError),
    #[error("No icon sizes were given")]
    NoSizes,
    #[error("Icon sizes must be at least 1px")]
    ZeroSize,
    #[error("ICO frames can be at most 256px, got {0}px")]
    InvalidIcoSize(u32),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }

    pub(crate) fn encode(path: impl Into<PathBuf>) -> impl FnOnce(image::ImageError) -> Error {
        let path = path.into();
        move |source| Error::Encode { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = Error::io("build/icon.ico")(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "Failed to write build/icon.ico: denied");
    }

    #[test]
    fn invalid_ico_size_message() {
        assert_eq!(
            Error::InvalidIcoSize(512).to_string(),
            "ICO frames can be at most 256px, got 512px"
        );
    }
}
