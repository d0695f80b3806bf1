//! Top-level masks and the containers that position child objects

use crate::types::options::ButtonOptions;
use crate::types::{Color, MacroRef, ObjectId, PlacedRef};

/// The root object of a pool, one per working set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkingSet {
    pub background_colour: Color,
    pub selectable: bool,
    pub active_mask: ObjectId,
    pub objects: Vec<PlacedRef>,
    pub macros: Vec<MacroRef>,
    /// Two-letter ISO 639 language codes
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataMask {
    pub background_colour: Color,
    pub soft_key_mask: ObjectId,
    pub objects: Vec<PlacedRef>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlarmMask {
    pub background_colour: Color,
    pub soft_key_mask: ObjectId,
    pub priority: u8,
    pub acoustic_signal: u8,
    pub objects: Vec<PlacedRef>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub width: u16,
    pub height: u16,
    pub hidden: bool,
    pub objects: Vec<PlacedRef>,
    pub macros: Vec<MacroRef>,
}

/// Soft key mask; keys are listed without positions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoftKeyMask {
    pub background_colour: Color,
    pub keys: Vec<ObjectId>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Key {
    pub background_colour: Color,
    pub key_code: u8,
    pub objects: Vec<PlacedRef>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Button {
    pub width: u16,
    pub height: u16,
    pub background_colour: Color,
    pub border_colour: Color,
    pub key_code: u8,
    pub options: ButtonOptions,
    pub objects: Vec<PlacedRef>,
    pub macros: Vec<MacroRef>,
}
