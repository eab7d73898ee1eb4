use super::TagRangeMismatch;
use std::error;
use std::fmt;
use std::io;
use std::num;

#[derive(Debug)]
pub enum ErrorKind {
    MalformedHeader {
        expected: &'static str,
        found: String,
    },
    UnsupportedVersion(f64),
    UnsupportedEncoding(i64),
    MissingSection(&'static str),
    UnknownElementType(u32),
    DanglingNodeReference {
        element: usize,
        node: usize,
    },
    DuplicateNodeTag(usize),
    InvalidNodeTag(usize),
    InvalidEntityDimension(usize),
    TagRangeMismatch(TagRangeMismatch),
    TruncatedStream,
    InvalidUtf8,
    BadInteger(num::ParseIntError),
    BadFloat(num::ParseFloatError),
    Io(io::Error),
}

/// Decoding failure, with the line at which it was detected.
///
/// The line number is 0 for failures that are not tied to a position in the
/// input, such as failing to open a file.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) lineno: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, lineno: usize) -> Error {
        Error { kind, lineno }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn lineno(&self) -> usize {
        self.lineno
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedHeader { expected, found } => {
                write!(f, "malformed header: expected {:?}, found {:?}", expected, found)
            }
            ErrorKind::UnsupportedVersion(version) => write!(
                f,
                "unsupported format version {}, only 4.0 and up can be read",
                version,
            ),
            ErrorKind::UnsupportedEncoding(file_type) => write!(
                f,
                "unsupported file type {}, only ASCII (0) files can be read",
                file_type,
            ),
            ErrorKind::MissingSection(marker) => write!(f, "missing section {}", marker),
            ErrorKind::UnknownElementType(code) => write!(f, "unknown element type {}", code),
            ErrorKind::DanglingNodeReference { element, node } => {
                write!(f, "element {} references unknown node {}", element, node)
            }
            ErrorKind::DuplicateNodeTag(tag) => write!(f, "node {} is defined twice", tag),
            ErrorKind::InvalidNodeTag(tag) => write!(f, "invalid node tag {}", tag),
            ErrorKind::InvalidEntityDimension(dim) => {
                write!(f, "invalid entity dimension {}", dim)
            }
            ErrorKind::TagRangeMismatch(mismatch) => write!(f, "{}", mismatch),
            ErrorKind::TruncatedStream => write!(f, "unexpected end of input"),
            ErrorKind::InvalidUtf8 => write!(f, "token is not valid UTF-8"),
            ErrorKind::BadInteger(err) => write!(f, "when parsing integer: {}", err),
            ErrorKind::BadFloat(err) => write!(f, "when parsing float: {}", err),
            ErrorKind::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at line {}: {}", self.lineno, self.kind)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::BadInteger(err) => Some(err),
            ErrorKind::BadFloat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            lineno: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::UnknownElementType(42), 17);
        assert_eq!(err.to_string(), "at line 17: unknown element type 42");
    }

    #[test]
    fn test_source() {
        let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.lineno(), 0);
        assert!(err.source().is_some());

        let err = Error::new(ErrorKind::TruncatedStream, 3);
        assert!(err.source().is_none());
    }
}
