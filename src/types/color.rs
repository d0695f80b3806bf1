//! Colour representation for VT objects
//!
//! VT objects store colours as an index into a fixed 256-entry palette:
//! - 0-15: the ISO standard colours, which have names
//! - 16-231: a 6x6x6 colour cube
//! - 232-255: proprietary, rendered black

use once_cell::sync::Lazy;
use std::fmt;

/// Names of the 16 standard colours, by index
pub const COLOR_NAMES: [&str; 16] = [
    "black", "white", "green", "teal", "maroon", "purple", "olive", "silver", "grey", "blue",
    "lime", "cyan", "red", "magenta", "yellow", "navy",
];

const STANDARD_RGB: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00),
    (0xFF, 0xFF, 0xFF),
    (0x00, 0x99, 0x00),
    (0x00, 0x99, 0x99),
    (0x99, 0x00, 0x00),
    (0x99, 0x00, 0x99),
    (0x99, 0x99, 0x00),
    (0xCC, 0xCC, 0xCC),
    (0x99, 0x99, 0x99),
    (0x00, 0x00, 0xFF),
    (0x00, 0xFF, 0x00),
    (0x00, 0xFF, 0xFF),
    (0xFF, 0x00, 0x00),
    (0xFF, 0x00, 0xFF),
    (0xFF, 0xFF, 0x00),
    (0x00, 0x00, 0x99),
];

/// The default VT palette shared by 4-bit and 8-bit pictures
pub static PALETTE: Lazy<[Rgb; 256]> = Lazy::new(|| {
    let mut palette = [Rgb::BLACK; 256];
    for (i, &(r, g, b)) in STANDARD_RGB.iter().enumerate() {
        palette[i] = Rgb::new(r, g, b);
    }
    for i in 16..232usize {
        let cube = i - 16;
        let step = |v: usize| (v * 51) as u8;
        palette[i] = Rgb::new(step(cube / 36), step((cube / 6) % 6), step(cube % 6));
    }
    palette
});

/// A 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A palette colour index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const WHITE: Color = Color(1);

    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Standard colour name, for indices 0-15
    pub fn name(&self) -> Option<&'static str> {
        COLOR_NAMES.get(self.0 as usize).copied()
    }

    /// RGB value in the default palette
    pub fn rgb(&self) -> Rgb {
        PALETTE[self.0 as usize]
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color(index)
    }
}

/// Formats as the colour name for 0-15, the decimal index otherwise
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.0),
        }
    }
}
