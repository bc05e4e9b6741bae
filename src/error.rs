use std::{
    error::Error as StdError,
    fmt, io,
    num::{ParseFloatError, ParseIntError},
    result::Result as StdResult,
};

/// A type alias for `Result<T, rmtab::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Error when parsing or merging RepeatMasker reports.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    /// A crate private constructor for `Error`.
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Unwrap this error into its underlying type.
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Whether the error only concerns a single cross-match row, so the
    /// rest of the table can still be read.
    pub fn is_malformed_record(&self) -> bool {
        matches!(*self.0, ErrorKind::MalformedRecord { .. })
    }
}

/// Specific errors that can happen.
#[derive(Debug)]
pub enum ErrorKind {
    /// I/O error.
    Io(io::Error),
    /// Could not convert a field into an integer.
    Int(ParseIntError),
    /// Could not convert a field into a float.
    Float(ParseFloatError),
    /// A line that must parse did not.
    Parser(String),
    /// A cross-match row too short or too mangled to extract its fields.
    MalformedRecord {
        source: String,
        line: u64,
        content: String,
    },
    /// An annotation and its divergence record disagree on the repeat class.
    ClassMismatch {
        name: String,
        annotation: String,
        divergence: String,
    },
    /// An annotation and its divergence record disagree on the full family.
    FamilyMismatch {
        name: String,
        annotation: String,
        divergence: String,
    },
    /// The summary table has no sequence length to divide by.
    ZeroLength(String),
    /// Bad invocation: missing input or output directory.
    Usage(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::new(ErrorKind::Io(err))
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::new(ErrorKind::Int(err))
    }
}
impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Self {
        Error::new(ErrorKind::Float(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::Io(ref err) => write!(f, "I/O error - {}", err),
            ErrorKind::Int(ref err) => write!(f, "parsing integer error - {}", err),
            ErrorKind::Float(ref err) => write!(f, "parsing float error - {}", err),
            ErrorKind::Parser(ref err) => write!(f, "parser error - {}", err),
            ErrorKind::MalformedRecord {
                ref source,
                line,
                ref content,
            } => write!(
                f,
                "line {} of {} is not following the standard format:\n\n{}",
                line, source, content
            ),
            ErrorKind::ClassMismatch {
                ref name,
                ref annotation,
                ref divergence,
            } => write!(
                f,
                "class mismatch for repeat {} - annotation has {}, divergence summary has {}",
                name, annotation, divergence
            ),
            ErrorKind::FamilyMismatch {
                ref name,
                ref annotation,
                ref divergence,
            } => write!(
                f,
                "family mismatch for repeat {} - annotation has {}, divergence summary has {}",
                name, annotation, divergence
            ),
            ErrorKind::ZeroLength(ref src) => {
                write!(f, "total length is 0 in {}, cannot compute proportions", src)
            }
            ErrorKind::Usage(ref err) => write!(f, "{}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self.0 {
            ErrorKind::Io(ref err) => Some(err),
            ErrorKind::Int(ref err) => Some(err),
            ErrorKind::Float(ref err) => Some(err),
            _ => None,
        }
    }
}
