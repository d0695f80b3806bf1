//! Object id type for VT objects
//!
//! Ids are 16-bit handles unique within one decode pass. The value `0xFFFF`
//! is reserved by the wire format to mean "no reference".

use std::fmt;

/// A numeric object id as found on the wire
///
/// Every reference field in the pool is an `ObjectId`. A reference is weak:
/// it does not own the target and is resolved to a name after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u16);

impl ObjectId {
    /// The "no reference" sentinel (0xFFFF)
    pub const NULL: ObjectId = ObjectId(0xFFFF);

    #[inline]
    pub const fn new(value: u16) -> Self {
        ObjectId(value)
    }

    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Check if this is the "no reference" sentinel
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0xFFFF
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        ObjectId::NULL
    }
}

impl From<u16> for ObjectId {
    fn from(value: u16) -> Self {
        ObjectId(value)
    }
}

impl From<ObjectId> for u16 {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "NULL")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A child reference placed at a position inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRef {
    pub id: ObjectId,
    pub x: i16,
    pub y: i16,
}

impl PlacedRef {
    pub const fn new(id: ObjectId, x: i16, y: i16) -> Self {
        PlacedRef { id, x, y }
    }
}

/// A macro bound to an event of its owner
///
/// Macro ids are single bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroRef {
    pub event: u8,
    pub macro_id: u8,
}

impl MacroRef {
    pub const fn new(event: u8, macro_id: u8) -> Self {
        MacroRef { event, macro_id }
    }

    /// The id of the referenced macro object
    pub fn object_id(&self) -> ObjectId {
        ObjectId::new(self.macro_id as u16)
    }
}

/// A polygon vertex relative to the polygon origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Point { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_id() {
        let null = ObjectId::NULL;
        assert!(null.is_null());
        assert_eq!(null.value(), 0xFFFF);
        assert_eq!(ObjectId::default(), ObjectId::NULL);
    }

    #[test]
    fn test_valid_id() {
        let id = ObjectId::new(0xFFFE);
        assert!(!id.is_null());
        assert_eq!(format!("{}", id), "65534");
        assert_eq!(format!("{}", ObjectId::NULL), "NULL");
    }

    #[test]
    fn test_id_conversion() {
        let id: ObjectId = 1234u16.into();
        let back: u16 = id.into();
        assert_eq!(back, 1234);
    }

    #[test]
    fn test_macro_ref_object_id() {
        let m = MacroRef::new(1, 42);
        assert_eq!(m.object_id(), ObjectId::new(42));
    }
}
