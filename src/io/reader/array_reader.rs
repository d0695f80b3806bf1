//! C-array pool reader (`.h`)
//!
//! The array literal holds the binary pool one byte per token, so every
//! primitive reads exactly as in the binary form. Errors report the source
//! line of the byte being read.

use super::binary_reader::BinaryReader;
use super::byte_reader::ByteReader;
use super::source::HeaderSource;
use crate::error::{Location, Result};
use crate::types::{Color, ObjectId};
use std::io::Cursor;

pub struct ArrayReader {
    inner: BinaryReader<Cursor<Vec<u8>>>,
    lines: Vec<usize>,
}

impl ArrayReader {
    pub fn new(bytes: Vec<u8>, lines: Vec<usize>) -> Self {
        Self {
            inner: BinaryReader::new(Cursor::new(bytes)),
            lines,
        }
    }

    pub fn from_source(source: &HeaderSource) -> Self {
        Self::new(source.bytes.clone(), source.lines.clone())
    }
}

impl ByteReader for ArrayReader {
    fn offset(&self) -> u64 {
        self.inner.offset()
    }

    fn location(&self) -> Location {
        let index = self.inner.offset() as usize;
        match self.lines.get(index).or_else(|| self.lines.last()) {
            Some(&line) => Location::Line(line),
            None => Location::Offset(self.inner.offset()),
        }
    }

    fn is_at_end(&mut self) -> Result<bool> {
        self.inner.is_at_end()
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.inner.read_byte()
    }

    fn read_word(&mut self) -> Result<u16> {
        self.inner.read_word()
    }

    fn read_dword(&mut self) -> Result<u32> {
        self.inner.read_dword()
    }

    fn read_float(&mut self) -> Result<f32> {
        self.inner.read_float()
    }

    fn read_color(&mut self) -> Result<Color> {
        self.inner.read_color()
    }

    fn read_type(&mut self) -> Result<u8> {
        self.inner.read_type()
    }

    fn read_key_code(&mut self) -> Result<u8> {
        self.inner.read_key_code()
    }

    fn read_ref(&mut self) -> Result<ObjectId> {
        self.inner.read_ref()
    }

    fn read_id(&mut self) -> Result<ObjectId> {
        self.inner.read_id()
    }

    fn read_string(&mut self, len: usize) -> Result<String> {
        self.inner.read_string(len)
    }

    fn read_byte_array(&mut self, len: usize) -> Result<Vec<u8>> {
        self.inner.read_byte_array(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composes_little_endian() {
        let source = HeaderSource::parse("p = {\n0x34, 0x12,\n7 };").unwrap();
        let mut r = ArrayReader::from_source(&source);
        assert_eq!(r.location(), Location::Line(2));
        assert_eq!(r.read_word().unwrap(), 0x1234);
        assert_eq!(r.location(), Location::Line(3));
        assert_eq!(r.read_byte().unwrap(), 7);
        assert!(r.is_at_end().unwrap());
    }
}
