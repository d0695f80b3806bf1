//! Option bitmasks of VT objects
//!
//! Each option byte is a `bitflags` set. The paired `*_FLAGS` table lists
//! `(bit, flag-name)` in output order; rendering joins the set names with `+`.

use bitflags::bitflags;

bitflags! {
    /// Button options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonOptions: u8 {
        const LATCHABLE = 0x01;
        const LATCHED = 0x02;
        const SUPPRESS_BORDER = 0x04;
        const TRANSPARENT_BACKGROUND = 0x08;
        const DISABLED = 0x10;
        const NO_BORDER = 0x20;
    }
}

bitflags! {
    /// Input/output string options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StringOptions: u8 {
        const TRANSPARENT = 0x01;
        const AUTO_WRAP = 0x02;
        const WRAP_ON_HYPHEN = 0x04;
    }
}

bitflags! {
    /// Input/output number options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NumberOptions: u8 {
        const TRANSPARENT = 0x01;
        const LEADING_ZEROS = 0x02;
        const ZERO_AS_BLANK = 0x04;
        const TRUNCATE = 0x08;
    }
}

bitflags! {
    /// Second option byte of input numbers, and input list options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputOptions: u8 {
        const ENABLED = 0x01;
        const REAL_TIME_EDITING = 0x02;
    }
}

bitflags! {
    /// Meter options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MeterOptions: u8 {
        const ARC = 0x01;
        const BORDER = 0x02;
        const TICKS = 0x04;
        const CLOCKWISE = 0x08;
    }
}

bitflags! {
    /// Linear bar graph options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LinearBarGraphOptions: u8 {
        const BORDER = 0x01;
        const TARGET_LINE = 0x02;
        const TICKS = 0x04;
        const NO_FILL = 0x08;
        const HORIZONTAL = 0x10;
        const GROW_POSITIVE = 0x20;
    }
}

bitflags! {
    /// Arched bar graph options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ArchedBarGraphOptions: u8 {
        const BORDER = 0x01;
        const TARGET_LINE = 0x02;
        const NO_FILL = 0x08;
        const CLOCKWISE = 0x10;
    }
}

bitflags! {
    /// Picture graphic options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PictureOptions: u8 {
        const TRANSPARENT = 0x01;
        const FLASHING = 0x02;
        const RUN_LENGTH_ENCODED = 0x04;
    }
}

bitflags! {
    /// Font style.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontStyle: u8 {
        const BOLD = 0x01;
        const CROSSED_OUT = 0x02;
        const UNDERLINED = 0x04;
        const ITALIC = 0x08;
        const INVERTED = 0x10;
        const FLASHING_INVERTED = 0x20;
        const FLASHING_HIDDEN = 0x40;
        const PROPORTIONAL = 0x80;
    }
}

bitflags! {
    /// Rectangle edges that are not drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LineSuppression: u8 {
        const TOP = 0x01;
        const RIGHT = 0x02;
        const BOTTOM = 0x04;
        const LEFT = 0x08;
    }
}

pub const BUTTON_FLAGS: &[(u8, &str)] = &[
    (0x01, "latchable"),
    (0x02, "latched"),
    (0x04, "suppress_border"),
    (0x08, "transparent_background"),
    (0x10, "disabled"),
    (0x20, "no_border"),
];

pub const STRING_FLAGS: &[(u8, &str)] = &[
    (0x01, "transparent"),
    (0x02, "auto_wrap"),
    (0x04, "wrap_on_hyphen"),
];

pub const NUMBER_FLAGS: &[(u8, &str)] = &[
    (0x01, "transparent"),
    (0x02, "leading_zeros"),
    (0x04, "zero_as_blank"),
    (0x08, "truncate"),
];

pub const INPUT_FLAGS: &[(u8, &str)] = &[(0x01, "enabled"), (0x02, "real_time_editing")];

pub const METER_FLAGS: &[(u8, &str)] = &[
    (0x01, "arc"),
    (0x02, "border"),
    (0x04, "ticks"),
    (0x08, "clockwise"),
];

pub const LINEAR_BAR_GRAPH_FLAGS: &[(u8, &str)] = &[
    (0x01, "border"),
    (0x02, "target_line"),
    (0x04, "ticks"),
    (0x08, "nofill"),
    (0x10, "horizontal"),
    (0x20, "growpositive"),
];

pub const ARCHED_BAR_GRAPH_FLAGS: &[(u8, &str)] = &[
    (0x01, "border"),
    (0x02, "target_line"),
    (0x08, "nofill"),
    (0x10, "clockwise"),
];

pub const PICTURE_FLAGS: &[(u8, &str)] = &[
    (0x01, "transparent"),
    (0x02, "flashing"),
    (0x04, "run_length_encoded"),
];

pub const FONT_STYLE_FLAGS: &[(u8, &str)] = &[
    (0x01, "bold"),
    (0x02, "crossed"),
    (0x04, "underlined"),
    (0x08, "italic"),
    (0x10, "inverted"),
    (0x20, "flashing_inverted"),
    (0x40, "flashing_hidden"),
    (0x80, "proportional"),
];

pub const LINE_SUPPRESSION_FLAGS: &[(u8, &str)] = &[
    (0x01, "top"),
    (0x02, "right"),
    (0x04, "bottom"),
    (0x08, "left"),
];

/// Join the names of the set bits in table order; `default` when none are set
pub fn flags_to_string(bits: u8, table: &[(u8, &str)], default: &str) -> String {
    let names: Vec<&str> = table
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        default.to_string()
    } else {
        names.join("+")
    }
}
