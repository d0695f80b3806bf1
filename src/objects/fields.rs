//! Input and output field objects
//!
//! Most fields either show an inline value or take it from a variable
//! object. A `variable_reference` of `ObjectId::NULL` selects the inline value.

use crate::types::options::{InputOptions, NumberOptions, StringOptions};
use crate::types::{Color, MacroRef, ObjectId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputBoolean {
    pub background_colour: Color,
    pub width: u16,
    /// Font attributes object supplying the foreground colour
    pub foreground_colour: ObjectId,
    pub variable_reference: ObjectId,
    pub value: bool,
    pub enabled: bool,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputString {
    pub width: u16,
    pub height: u16,
    pub background_colour: Color,
    pub font_attributes: ObjectId,
    pub input_attributes: ObjectId,
    pub options: StringOptions,
    pub variable_reference: ObjectId,
    pub justification: u8,
    /// Allocated length in bytes
    pub length: u8,
    /// Present on the wire only when `variable_reference` is NULL
    pub value: Option<String>,
    pub enabled: bool,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputNumber {
    pub width: u16,
    pub height: u16,
    pub background_colour: Color,
    pub font_attributes: ObjectId,
    pub options: NumberOptions,
    pub variable_reference: ObjectId,
    pub value: u32,
    pub min_value: u32,
    pub max_value: u32,
    pub offset: i32,
    pub scale: f32,
    pub number_of_decimals: u8,
    pub format: u8,
    pub justification: u8,
    pub options2: InputOptions,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputList {
    pub width: u16,
    pub height: u16,
    pub variable_reference: ObjectId,
    pub value: u8,
    pub options: InputOptions,
    pub items: Vec<ObjectId>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputString {
    pub width: u16,
    pub height: u16,
    pub background_colour: Color,
    pub font_attributes: ObjectId,
    pub options: StringOptions,
    pub variable_reference: ObjectId,
    pub justification: u8,
    pub length: u16,
    /// Present on the wire only when `variable_reference` is NULL
    pub value: Option<String>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputNumber {
    pub width: u16,
    pub height: u16,
    pub background_colour: Color,
    pub font_attributes: ObjectId,
    pub options: NumberOptions,
    pub variable_reference: ObjectId,
    pub value: u32,
    pub offset: i32,
    pub scale: f32,
    pub number_of_decimals: u8,
    pub format: u8,
    pub justification: u8,
    pub macros: Vec<MacroRef>,
}
