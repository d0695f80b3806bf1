//! Core value types shared by the object model, codecs and renderer

pub mod color;
pub mod object_id;
pub mod options;

pub use color::{Color, Rgb, COLOR_NAMES, PALETTE};
pub use object_id::{MacroRef, ObjectId, PlacedRef, Point};
