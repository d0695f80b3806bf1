//! Error types for vtpool

use std::fmt;
use std::io;
use thiserror::Error;

/// Position in an input source, used to point at the offending data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Byte offset into a binary (or decoded array) stream
    Offset(u64),
    /// 1-based line in a textual source
    Line(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Offset(offset) => write!(f, "offset {offset:#X}"),
            Location::Line(line) => write!(f, "line {line}"),
        }
    }
}

/// Main error type for pool import and export
#[derive(Debug, Error)]
pub enum PoolError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Binary source exhausted in the middle of a primitive
    #[error("Unexpected end of stream at offset {offset:#X}")]
    UnexpectedEndOfStream { offset: u64 },

    /// Textual token does not have the expected keyword or shape
    #[error("Malformed token at {location}: expected {expected}, found '{found}'")]
    MalformedToken {
        location: Location,
        expected: String,
        found: String,
    },

    /// Textual numeric literal does not fit the primitive's width
    #[error("Value out of range at {location}: {keyword} {value}")]
    ValueOutOfRange {
        location: Location,
        keyword: &'static str,
        value: String,
    },

    /// Unrecognized object type tag
    #[error("Unknown object type {tag} at {location}")]
    UnknownObjectType { tag: u8, location: Location },

    /// Unrecognized macro command tag
    #[error("Unknown command type {tag:#04X} at {location}")]
    UnknownCommandType { tag: u8, location: Location },

    /// The same object id was declared twice in one pool
    #[error("Duplicate object id {id} at {location}")]
    DuplicateObjectId { id: u16, location: Location },

    /// An object declared the reserved "no reference" id
    #[error("Object at {location} uses the reserved id 0xFFFF")]
    ReservedObjectId { location: Location },

    /// Raster variant that is not decoded
    #[error("Unsupported picture format: {0}")]
    UnsupportedPictureFormat(String),

    /// A picture graphic that could not be decoded
    #[error("Picture {name} at {location}: {source}")]
    InvalidPicture {
        name: String,
        location: Location,
        source: Box<PoolError>,
    },

    /// Declared sizes disagree with the data actually present
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// A field value has no representation in the wire format
    #[error("Cannot encode {field} {value}")]
    Unencodable { field: &'static str, value: String },

    /// Input that cannot be imported at all
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Image encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// XML serialization failed
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type alias for vtpool operations
pub type Result<T> = std::result::Result<T, PoolError>;

impl From<quick_xml::Error> for PoolError {
    fn from(e: quick_xml::Error) -> Self {
        PoolError::Xml(e.to_string())
    }
}
