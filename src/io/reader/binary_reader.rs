//! Little-endian binary pool reader (`.iop`)

use super::byte_reader::ByteReader;
use crate::error::{Location, PoolError, Result};
use crate::types::{Color, ObjectId};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, BufRead};

/// Binary pool stream reader
pub struct BinaryReader<R: BufRead> {
    reader: R,
    offset: u64,
}

impl<R: BufRead> BinaryReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0 }
    }

    /// Get the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Account for a completed read of `size` bytes, mapping EOF to the stream offset
    fn advance<T>(&mut self, result: io::Result<T>, size: u64) -> Result<T> {
        match result {
            Ok(value) => {
                self.offset += size;
                Ok(value)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(PoolError::UnexpectedEndOfStream {
                    offset: self.offset,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<R: BufRead> ByteReader for BinaryReader<R> {
    fn offset(&self) -> u64 {
        self.offset
    }

    fn location(&self) -> Location {
        Location::Offset(self.offset)
    }

    fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.reader.fill_buf()?.is_empty())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let value = self.reader.read_u8();
        self.advance(value, 1)
    }

    fn read_word(&mut self) -> Result<u16> {
        let value = self.reader.read_u16::<LittleEndian>();
        self.advance(value, 2)
    }

    fn read_dword(&mut self) -> Result<u32> {
        let value = self.reader.read_u32::<LittleEndian>();
        self.advance(value, 4)
    }

    fn read_float(&mut self) -> Result<f32> {
        let value = self.reader.read_f32::<LittleEndian>();
        self.advance(value, 4)
    }

    fn read_color(&mut self) -> Result<Color> {
        Ok(Color(self.read_byte()?))
    }

    fn read_type(&mut self) -> Result<u8> {
        self.read_byte()
    }

    fn read_key_code(&mut self) -> Result<u8> {
        self.read_byte()
    }

    fn read_ref(&mut self) -> Result<ObjectId> {
        Ok(ObjectId::new(self.read_word()?))
    }

    fn read_id(&mut self) -> Result<ObjectId> {
        self.read_ref()
    }

    /// Fixed-width Latin-1 string
    fn read_string(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_byte_array(len)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    fn read_byte_array(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        let result = self.reader.read_exact(&mut buffer);
        self.advance(result, len as u64)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(bytes: &[u8]) -> BinaryReader<Cursor<Vec<u8>>> {
        BinaryReader::new(Cursor::new(bytes.to_vec()))
    }

    #[test]
    fn test_little_endian_primitives() {
        let mut r = reader(&[0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xAB]);
        assert_eq!(r.read_word().unwrap(), 0x1234);
        assert_eq!(r.read_dword().unwrap(), 0x1234_5678);
        assert_eq!(r.read_byte().unwrap(), 0xAB);
        assert_eq!(r.offset(), 7);
        assert!(r.is_at_end().unwrap());
    }

    #[test]
    fn test_float_reinterprets_dword() {
        let mut r = reader(&1.5f32.to_bits().to_le_bytes());
        assert_eq!(r.read_float().unwrap(), 1.5);
    }

    #[test]
    fn test_latin1_string() {
        let mut r = reader(&[b'A', 0xE9, b'z']);
        assert_eq!(r.read_string(3).unwrap(), "A\u{e9}z");
    }

    #[test]
    fn test_null_ref() {
        let mut r = reader(&[0xFF, 0xFF]);
        assert!(r.read_ref().unwrap().is_null());
    }

    #[test]
    fn test_eof_mid_primitive() {
        let mut r = reader(&[0x01, 0x02, 0x03]);
        r.read_word().unwrap();
        let err = r.read_word().unwrap_err();
        assert!(matches!(err, PoolError::UnexpectedEndOfStream { offset: 2 }));
    }

    #[test]
    fn test_ref_xys_and_macros() {
        let mut r = reader(&[0x0A, 0x00, 0xFE, 0xFF, 0x05, 0x00, 0x01, 0x02]);
        let refs = r.read_ref_xys(1).unwrap();
        assert_eq!(refs[0].id, ObjectId::new(10));
        assert_eq!(refs[0].x, -2);
        assert_eq!(refs[0].y, 5);
        let macros = r.read_macros(1).unwrap();
        assert_eq!(macros[0].event, 1);
        assert_eq!(macros[0].macro_id, 2);
    }
}
