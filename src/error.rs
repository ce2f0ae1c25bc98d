use thiserror::Error;

/// Everything that can go wrong between the command line and the written PNG.
#[derive(Debug, Error)]
pub enum Error {
    /// No text was supplied on the command line.
    #[error("no text supplied")]
    Usage,
    /// The host font registry has no face for the requested family, nor for
    /// any of the sans-serif fallbacks.
    #[error("no {family} font available on this host")]
    FontNotFound {
        /// Family that was asked for.
        family: String,
    },
    /// A face was found but its data could not be parsed.
    #[error("failed to parse font data for {family}")]
    FontParse {
        /// Family of the offending face.
        family: String,
    },
    /// Creating, writing or flushing the output file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The PNG encoder rejected the image or its writer.
    #[error("failed to encode PNG")]
    Encode(#[from] image::ImageError),
}

impl Error {
    /// Whether this is a failure to encode or write the output file, as
    /// opposed to a usage error or a rendering failure.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Encode(_))
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
