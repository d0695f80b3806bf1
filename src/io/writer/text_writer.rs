//! Keyword-tagged textual pool writer (`.sav`)
//!
//! Each record is written as a name line followed by a `desc` line.

use super::byte_writer::{fit_string, ByteWriter};
use crate::error::Result;
use crate::types::{Color, ObjectId};
use std::io::Write;

/// Textual pool stream writer
pub struct TextWriter<W: Write> {
    writer: W,
    tokens: Vec<String>,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
        }
    }

    /// Flush the fields collected since the last record as `name` + desc line
    pub fn end_record(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "{name}")?;
        writeln!(self.writer, "desc {}", self.tokens.join(" "))?;
        self.tokens.clear();
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn tagged(&mut self, keyword: &str, value: impl ToString) -> Result<()> {
        self.tokens.push(keyword.to_string());
        self.tokens.push(value.to_string());
        Ok(())
    }
}

/// Quote `value` so that it stays on one line.
///
/// `"` and `\` are backslash escaped, line breaks and tabs use `\n`, `\r`
/// and `\t`, any other control character is written as `\xNN`.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\x{:02X}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl<W: Write> ByteWriter for TextWriter<W> {
    fn write_byte(&mut self, value: u8) -> Result<()> {
        self.tagged("BYTE", value)
    }

    fn write_word(&mut self, value: u16) -> Result<()> {
        self.tagged("WORD", value)
    }

    fn write_dword(&mut self, value: u32) -> Result<()> {
        self.tagged("DWORD", value)
    }

    fn write_float(&mut self, value: f32) -> Result<()> {
        self.tagged("FLOAT", value)
    }

    fn write_color(&mut self, value: Color) -> Result<()> {
        self.tagged("COLOR", value.index())
    }

    fn write_type(&mut self, value: u8) -> Result<()> {
        self.tagged("TYPE", value)
    }

    fn write_key_code(&mut self, value: u8) -> Result<()> {
        self.tagged("KEYCODE", value)
    }

    fn write_ref(&mut self, value: ObjectId) -> Result<()> {
        self.tagged("REF", value.value())
    }

    fn write_id(&mut self, value: ObjectId) -> Result<()> {
        self.tagged("ID", value.value())
    }

    fn write_string(&mut self, value: &str, len: usize) -> Result<()> {
        self.tagged("STRING", quote(&fit_string(value, len)))
    }

    fn write_byte_array(&mut self, data: &[u8]) -> Result<()> {
        self.tokens.push("BYTEARRAY".to_string());
        self.tokens.extend(data.iter().map(u8::to_string));
        Ok(())
    }
}
