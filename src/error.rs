// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Archive(ArchiveError),
    Decode(DecodeError),
}

/// Specific error types for archive opening and entry extraction.
#[derive(Debug, Clone)]
pub enum ArchiveError {
    /// The archive container could not be parsed (corrupt or not an archive).
    OpenFailed(String),

    /// A single entry could not be decompressed.
    EntryRead { name: String, reason: String },

    /// The requested entry index is outside the listing.
    EntryOutOfRange(usize),

    /// I/O error while fetching the archive bytes.
    IoError(String),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::OpenFailed(msg) => write!(f, "Cannot open archive: {}", msg),
            ArchiveError::EntryRead { name, reason } => {
                write!(f, "Cannot read entry '{}': {}", name, reason)
            }
            ArchiveError::EntryOutOfRange(index) => {
                write!(f, "Entry index {} is out of range", index)
            }
            ArchiveError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

/// Decode failure for a single page, reported by the renderer.
///
/// Decode errors are sticky per page for the remainder of the archive load;
/// the viewer shows a placeholder instead of retrying.
#[derive(Debug, Clone)]
pub struct DecodeError {
    /// Entry name of the page that failed to decode.
    pub name: String,
    pub reason: String,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page '{}' is corrupt or not an image: {}",
            self.name, self.reason
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Archive(e) => write!(f, "Archive Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl From<ArchiveError> for Error {
    fn from(err: ArchiveError) -> Self {
        Error::Archive(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn archive_open_failure_formats_message() {
        let err: Error = ArchiveError::OpenFailed("bad central directory".into()).into();
        let text = format!("{}", err);
        assert!(text.contains("Cannot open archive"));
        assert!(text.contains("bad central directory"));
    }

    #[test]
    fn entry_read_failure_names_the_entry() {
        let err = ArchiveError::EntryRead {
            name: "p01.jpg".into(),
            reason: "unexpected end of stream".into(),
        };
        assert!(format!("{}", err).contains("p01.jpg"));
    }

    #[test]
    fn decode_error_names_the_page() {
        let err: Error = DecodeError {
            name: "cover.png".into(),
            reason: "invalid png signature".into(),
        }
        .into();
        assert!(format!("{}", err).contains("cover.png"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
