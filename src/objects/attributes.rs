//! Variables, attribute blocks, pointers and auxiliary control objects

use crate::types::options::FontStyle;
use crate::types::{Color, MacroRef, ObjectId, PlacedRef};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberVariable {
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringVariable {
    pub length: u16,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontAttributes {
    pub font_colour: Color,
    pub font_size: u8,
    pub font_type: u8,
    pub font_style: FontStyle,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineAttributes {
    pub line_colour: Color,
    pub line_width: u8,
    /// 16-bit on/off pattern, most significant bit first
    pub line_art: u16,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FillAttributes {
    pub fill_type: u8,
    pub fill_colour: Color,
    /// Picture graphic used when `fill_type` is 3
    pub fill_pattern: ObjectId,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputAttributes {
    pub validation_type: u8,
    pub length: u8,
    pub validation_string: String,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectPointer {
    pub value: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuxiliaryFunction {
    pub background_colour: Color,
    pub function_type: u8,
    pub objects: Vec<PlacedRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuxiliaryInput {
    pub background_colour: Color,
    pub function_type: u8,
    pub input_id: u8,
    pub objects: Vec<PlacedRef>,
}
