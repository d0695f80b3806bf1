//! Little-endian binary pool writer (`.iop`)

use super::byte_writer::{fit_string, ByteWriter};
use crate::error::Result;
use crate::types::{Color, ObjectId};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Binary pool stream writer
pub struct BinaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> BinaryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ByteWriter for BinaryWriter<W> {
    fn write_byte(&mut self, value: u8) -> Result<()> {
        self.writer.write_u8(value)?;
        Ok(())
    }

    fn write_word(&mut self, value: u16) -> Result<()> {
        self.writer.write_u16::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_dword(&mut self, value: u32) -> Result<()> {
        self.writer.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_float(&mut self, value: f32) -> Result<()> {
        self.writer.write_f32::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_color(&mut self, value: Color) -> Result<()> {
        self.write_byte(value.index())
    }

    fn write_type(&mut self, value: u8) -> Result<()> {
        self.write_byte(value)
    }

    fn write_key_code(&mut self, value: u8) -> Result<()> {
        self.write_byte(value)
    }

    fn write_ref(&mut self, value: ObjectId) -> Result<()> {
        self.write_word(value.value())
    }

    fn write_id(&mut self, value: ObjectId) -> Result<()> {
        self.write_ref(value)
    }

    /// Latin-1; characters above U+00FF become `?`
    fn write_string(&mut self, value: &str, len: usize) -> Result<()> {
        let bytes: Vec<u8> = fit_string(value, len)
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect();
        self.writer.write_all(&bytes)?;
        Ok(())
    }

    fn write_byte_array(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        Ok(())
    }
}
