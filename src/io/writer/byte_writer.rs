//! Typed write primitives, the counterpart of `ByteReader`

use crate::error::Result;
use crate::types::{Color, MacroRef, ObjectId, PlacedRef, Point};

/// Trait for writing pool primitives to a sink
pub trait ByteWriter {
    fn write_byte(&mut self, value: u8) -> Result<()>;

    fn write_word(&mut self, value: u16) -> Result<()>;

    fn write_dword(&mut self, value: u32) -> Result<()>;

    fn write_float(&mut self, value: f32) -> Result<()>;

    fn write_color(&mut self, value: Color) -> Result<()>;

    fn write_type(&mut self, value: u8) -> Result<()>;

    fn write_key_code(&mut self, value: u8) -> Result<()>;

    fn write_ref(&mut self, value: ObjectId) -> Result<()>;

    fn write_id(&mut self, value: ObjectId) -> Result<()>;

    /// String in `len` allocated bytes; longer values are cut, shorter ones space padded
    fn write_string(&mut self, value: &str, len: usize) -> Result<()>;

    fn write_byte_array(&mut self, data: &[u8]) -> Result<()>;

    fn write_coordinate(&mut self, value: i16) -> Result<()> {
        self.write_word(value as u16)
    }

    /// `n` filler bytes
    fn write_padding(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.write_byte(0xFF)?;
        }
        Ok(())
    }

    fn write_refs(&mut self, refs: &[ObjectId]) -> Result<()> {
        for id in refs {
            self.write_ref(*id)?;
        }
        Ok(())
    }

    fn write_ref_xys(&mut self, refs: &[PlacedRef]) -> Result<()> {
        for placed in refs {
            self.write_ref(placed.id)?;
            self.write_coordinate(placed.x)?;
            self.write_coordinate(placed.y)?;
        }
        Ok(())
    }

    fn write_points(&mut self, points: &[Point]) -> Result<()> {
        for point in points {
            self.write_coordinate(point.x)?;
            self.write_coordinate(point.y)?;
        }
        Ok(())
    }

    fn write_languages(&mut self, languages: &[String]) -> Result<()> {
        for language in languages {
            self.write_string(language, 2)?;
        }
        Ok(())
    }

    fn write_macros(&mut self, macros: &[MacroRef]) -> Result<()> {
        for macro_ref in macros {
            self.write_byte(macro_ref.event)?;
            self.write_byte(macro_ref.macro_id)?;
        }
        Ok(())
    }
}

/// `value` fitted to exactly `len` characters
pub(crate) fn fit_string(value: &str, len: usize) -> String {
    let mut fitted: String = value.chars().take(len).collect();
    let count = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(len - count));
    fitted
}
