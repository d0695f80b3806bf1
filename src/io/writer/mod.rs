//! Pool and document writers

pub mod binary_writer;
pub mod byte_writer;
pub mod object_writer;
pub mod text_writer;
pub mod xml_writer;

pub use binary_writer::BinaryWriter;
pub use byte_writer::ByteWriter;
pub use object_writer::{encode_command, encode_object, encode_record};
pub use text_writer::TextWriter;
pub use xml_writer::write_document;
