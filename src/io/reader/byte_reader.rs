//! Typed read primitives shared by every pool source

use crate::error::{Location, Result};
use crate::types::{Color, MacroRef, ObjectId, PlacedRef, Point};

/// Trait for reading pool primitives from a source.
///
/// Binary, textual and C-array sources implement the same primitives with
/// the same meaning. `offset` counts consumed wire bytes in every variant,
/// so length-prefixed lists can be checked the same way for all of them.
pub trait ByteReader {
    /// Wire bytes consumed so far
    fn offset(&self) -> u64;

    /// Position to report in errors
    fn location(&self) -> Location;

    /// Whether the source holds no further record
    fn is_at_end(&mut self) -> Result<bool>;

    fn read_byte(&mut self) -> Result<u8>;

    /// 16-bit value
    fn read_word(&mut self) -> Result<u16>;

    /// 32-bit value
    fn read_dword(&mut self) -> Result<u32>;

    /// IEEE-754 single
    fn read_float(&mut self) -> Result<f32>;

    fn read_color(&mut self) -> Result<Color>;

    /// Object type tag
    fn read_type(&mut self) -> Result<u8>;

    fn read_key_code(&mut self) -> Result<u8>;

    /// Reference to another object, `ObjectId::NULL` when absent
    fn read_ref(&mut self) -> Result<ObjectId>;

    /// Id of the record being declared
    fn read_id(&mut self) -> Result<ObjectId>;

    /// String with `len` allocated bytes
    fn read_string(&mut self, len: usize) -> Result<String>;

    /// Raw byte buffer of `len` bytes
    fn read_byte_array(&mut self, len: usize) -> Result<Vec<u8>>;

    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        (0..n).map(|_| self.read_byte()).collect()
    }

    /// Signed coordinate, stored as a word
    fn read_coordinate(&mut self) -> Result<i16> {
        Ok(self.read_word()? as i16)
    }

    fn read_refs(&mut self, n: usize) -> Result<Vec<ObjectId>> {
        (0..n).map(|_| self.read_ref()).collect()
    }

    /// `n` triples of (ref, x, y)
    fn read_ref_xys(&mut self, n: usize) -> Result<Vec<PlacedRef>> {
        let mut refs = Vec::with_capacity(n);
        for _ in 0..n {
            let id = self.read_ref()?;
            let x = self.read_coordinate()?;
            let y = self.read_coordinate()?;
            refs.push(PlacedRef::new(id, x, y));
        }
        Ok(refs)
    }

    /// `n` pairs of (x, y)
    fn read_points(&mut self, n: usize) -> Result<Vec<Point>> {
        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            let x = self.read_coordinate()?;
            let y = self.read_coordinate()?;
            points.push(Point::new(x, y));
        }
        Ok(points)
    }

    /// `n` two-letter language codes
    fn read_languages(&mut self, n: usize) -> Result<Vec<String>> {
        (0..n).map(|_| self.read_string(2)).collect()
    }

    /// `n` pairs of (event, macro id)
    fn read_macros(&mut self, n: usize) -> Result<Vec<MacroRef>> {
        let mut macros = Vec::with_capacity(n);
        for _ in 0..n {
            let event = self.read_byte()?;
            let macro_id = self.read_byte()?;
            macros.push(MacroRef::new(event, macro_id));
        }
        Ok(macros)
    }
}
