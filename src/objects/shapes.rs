//! Output graphics: lines, shapes, gauges and pictures

use crate::types::options::{
    ArchedBarGraphOptions, LineSuppression, LinearBarGraphOptions, MeterOptions, PictureOptions,
};
use crate::types::{Color, MacroRef, ObjectId, Point};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub line_attributes: ObjectId,
    pub width: u16,
    pub height: u16,
    pub line_direction: u8,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub line_attributes: ObjectId,
    pub width: u16,
    pub height: u16,
    pub line_suppression: LineSuppression,
    pub fill_attributes: ObjectId,
    pub macros: Vec<MacroRef>,
}

/// Ellipse; angles are in degrees (0-360), stored halved on the wire
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ellipse {
    pub line_attributes: ObjectId,
    pub width: u16,
    pub height: u16,
    pub ellipse_type: u8,
    pub start_angle: u16,
    pub end_angle: u16,
    pub fill_attributes: ObjectId,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub width: u16,
    pub height: u16,
    pub line_attributes: ObjectId,
    pub fill_attributes: ObjectId,
    pub polygon_type: u8,
    pub points: Vec<Point>,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meter {
    pub width: u16,
    pub needle_colour: Color,
    pub border_colour: Color,
    pub arc_and_tick_colour: Color,
    pub options: MeterOptions,
    pub number_of_ticks: u8,
    pub start_angle: u16,
    pub end_angle: u16,
    pub min_value: u16,
    pub max_value: u16,
    pub variable_reference: ObjectId,
    pub value: u16,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearBarGraph {
    pub width: u16,
    pub height: u16,
    pub colour: Color,
    pub target_line_colour: Color,
    pub options: LinearBarGraphOptions,
    pub number_of_ticks: u8,
    pub min_value: u16,
    pub max_value: u16,
    pub variable_reference: ObjectId,
    pub value: u16,
    pub target_value_variable_reference: ObjectId,
    pub target_value: u16,
    pub macros: Vec<MacroRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArchedBarGraph {
    pub width: u16,
    pub height: u16,
    pub colour: Color,
    pub target_line_colour: Color,
    pub options: ArchedBarGraphOptions,
    pub start_angle: u16,
    pub end_angle: u16,
    pub bar_graph_width: u16,
    pub min_value: u16,
    pub max_value: u16,
    pub variable_reference: ObjectId,
    pub value: u16,
    pub target_value_variable_reference: ObjectId,
    pub target_value: u16,
    pub macros: Vec<MacroRef>,
}

/// Pixel layout of a picture graphic's raw data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PictureFormat {
    #[default]
    Monochrome,
    FourBit,
    EightBit,
    /// A format byte this decoder does not know
    Unknown(u8),
}

impl PictureFormat {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Monochrome,
            1 => Self::FourBit,
            2 => Self::EightBit,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Monochrome => 0,
            Self::FourBit => 1,
            Self::EightBit => 2,
            Self::Unknown(code) => *code,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Monochrome => "monochrome".to_string(),
            Self::FourBit => "4bit".to_string(),
            Self::EightBit => "8bit".to_string(),
            Self::Unknown(code) => code.to_string(),
        }
    }
}

/// Picture graphic. `width` is the displayed width; the raster itself is
/// `actual_width` x `actual_height`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PictureGraphic {
    pub width: u16,
    pub actual_width: u16,
    pub actual_height: u16,
    pub format: PictureFormat,
    pub options: PictureOptions,
    pub transparency_colour: Color,
    pub data: Vec<u8>,
    pub macros: Vec<MacroRef>,
}
