//! Macro objects and the VT commands they carry
//!
//! Commands are fixed-size records (8 bytes including the tag) except for
//! `ChangeStringValue`, which carries a length-prefixed string, and
//! `ChangeChildPosition`, which is 9 bytes.

use crate::types::{Color, ObjectId};

/// Bias applied to the relative offsets of `ChangeChildLocation` on the wire
pub const CHILD_LOCATION_BIAS: i16 = 127;

/// Macro command tag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandType {
    HideShowObject = 0xA0,
    EnableDisableObject = 0xA1,
    SelectInputObject = 0xA2,
    ControlAudioDevice = 0xA3,
    SetAudioVolume = 0xA4,
    ChangeChildLocation = 0xA5,
    ChangeSize = 0xA6,
    ChangeBackgroundColour = 0xA7,
    ChangeNumericValue = 0xA8,
    ChangeEndPoint = 0xA9,
    ChangeFontAttributes = 0xAA,
    ChangeLineAttributes = 0xAB,
    ChangeFillAttributes = 0xAC,
    ChangeActiveMask = 0xAD,
    ChangeSoftKeyMask = 0xAE,
    ChangeAttribute = 0xAF,
    ChangePriority = 0xB0,
    ChangeListItem = 0xB1,
    ChangeStringValue = 0xB3,
    ChangeChildPosition = 0xB4,
}

impl CommandType {
    pub fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            0xA0 => Self::HideShowObject,
            0xA1 => Self::EnableDisableObject,
            0xA2 => Self::SelectInputObject,
            0xA3 => Self::ControlAudioDevice,
            0xA4 => Self::SetAudioVolume,
            0xA5 => Self::ChangeChildLocation,
            0xA6 => Self::ChangeSize,
            0xA7 => Self::ChangeBackgroundColour,
            0xA8 => Self::ChangeNumericValue,
            0xA9 => Self::ChangeEndPoint,
            0xAA => Self::ChangeFontAttributes,
            0xAB => Self::ChangeLineAttributes,
            0xAC => Self::ChangeFillAttributes,
            0xAD => Self::ChangeActiveMask,
            0xAE => Self::ChangeSoftKeyMask,
            0xAF => Self::ChangeAttribute,
            0xB0 => Self::ChangePriority,
            0xB1 => Self::ChangeListItem,
            0xB3 => Self::ChangeStringValue,
            0xB4 => Self::ChangeChildPosition,
            _ => return None,
        })
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Element name used in the output document
    pub fn name(self) -> &'static str {
        match self {
            Self::HideShowObject => "command_hide_show_object",
            Self::EnableDisableObject => "command_enable_disable_object",
            Self::SelectInputObject => "command_select_input_object",
            Self::ControlAudioDevice => "command_control_audio_device",
            Self::SetAudioVolume => "command_set_audio_volume",
            Self::ChangeChildLocation => "command_change_child_location",
            Self::ChangeSize => "command_change_size",
            Self::ChangeBackgroundColour => "command_change_background_colour",
            Self::ChangeNumericValue => "command_change_numeric_value",
            Self::ChangeEndPoint => "command_change_end_point",
            Self::ChangeFontAttributes => "command_change_font_attributes",
            Self::ChangeLineAttributes => "command_change_line_attributes",
            Self::ChangeFillAttributes => "command_change_fill_attributes",
            Self::ChangeActiveMask => "command_change_active_mask",
            Self::ChangeSoftKeyMask => "command_change_softkey_mask",
            Self::ChangeAttribute => "command_change_attribute",
            Self::ChangePriority => "command_change_priority",
            Self::ChangeListItem => "command_change_list_item",
            Self::ChangeStringValue => "command_change_string_value",
            Self::ChangeChildPosition => "command_change_child_position",
        }
    }

    /// Wire size without the variable-length part, tag included
    pub fn fixed_size(self) -> u64 {
        match self {
            Self::ChangeStringValue => 5,
            Self::ChangeChildPosition => 9,
            _ => 8,
        }
    }
}

/// A decoded macro command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    HideShowObject { object: ObjectId, show: bool },
    EnableDisableObject { object: ObjectId, enable: bool },
    SelectInputObject { object: ObjectId, option: u8 },
    ControlAudioDevice { repetitions: u8, frequency: u16, on_time: u16, off_time: u16 },
    SetAudioVolume { volume: u8 },
    /// Offsets are signed deltas, already un-biased
    ChangeChildLocation { parent: ObjectId, child: ObjectId, dx: i16, dy: i16 },
    ChangeSize { object: ObjectId, width: u16, height: u16 },
    ChangeBackgroundColour { object: ObjectId, colour: Color },
    ChangeNumericValue { object: ObjectId, value: u32 },
    ChangeEndPoint { object: ObjectId, width: u16, height: u16, line_direction: u8 },
    ChangeFontAttributes { object: ObjectId, colour: Color, size: u8, font_type: u8, style: u8 },
    ChangeLineAttributes { object: ObjectId, colour: Color, width: u8, line_art: u16 },
    ChangeFillAttributes { object: ObjectId, fill_type: u8, colour: Color, pattern: ObjectId },
    ChangeActiveMask { working_set: ObjectId, mask: ObjectId },
    ChangeSoftKeyMask { mask_type: u8, mask: ObjectId, soft_key_mask: ObjectId },
    ChangeAttribute { object: ObjectId, attribute_id: u8, value: u32 },
    ChangePriority { object: ObjectId, priority: u8 },
    ChangeListItem { list: ObjectId, index: u8, new_object: ObjectId },
    ChangeStringValue { object: ObjectId, value: String },
    ChangeChildPosition { parent: ObjectId, child: ObjectId, x: i16, y: i16 },
}

impl Command {
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::HideShowObject { .. } => CommandType::HideShowObject,
            Command::EnableDisableObject { .. } => CommandType::EnableDisableObject,
            Command::SelectInputObject { .. } => CommandType::SelectInputObject,
            Command::ControlAudioDevice { .. } => CommandType::ControlAudioDevice,
            Command::SetAudioVolume { .. } => CommandType::SetAudioVolume,
            Command::ChangeChildLocation { .. } => CommandType::ChangeChildLocation,
            Command::ChangeSize { .. } => CommandType::ChangeSize,
            Command::ChangeBackgroundColour { .. } => CommandType::ChangeBackgroundColour,
            Command::ChangeNumericValue { .. } => CommandType::ChangeNumericValue,
            Command::ChangeEndPoint { .. } => CommandType::ChangeEndPoint,
            Command::ChangeFontAttributes { .. } => CommandType::ChangeFontAttributes,
            Command::ChangeLineAttributes { .. } => CommandType::ChangeLineAttributes,
            Command::ChangeFillAttributes { .. } => CommandType::ChangeFillAttributes,
            Command::ChangeActiveMask { .. } => CommandType::ChangeActiveMask,
            Command::ChangeSoftKeyMask { .. } => CommandType::ChangeSoftKeyMask,
            Command::ChangeAttribute { .. } => CommandType::ChangeAttribute,
            Command::ChangePriority { .. } => CommandType::ChangePriority,
            Command::ChangeListItem { .. } => CommandType::ChangeListItem,
            Command::ChangeStringValue { .. } => CommandType::ChangeStringValue,
            Command::ChangeChildPosition { .. } => CommandType::ChangeChildPosition,
        }
    }

    /// Number of wire bytes this command occupies, tag included
    pub fn wire_size(&self) -> u64 {
        let fixed = self.command_type().fixed_size();
        match self {
            Command::ChangeStringValue { value, .. } => fixed + value.chars().count() as u64,
            _ => fixed,
        }
    }
}

/// A macro object: an ordered list of commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Macro {
    pub commands: Vec<Command>,
}

impl Macro {
    /// Total wire length of the command list
    pub fn command_bytes(&self) -> u64 {
        self.commands.iter().map(Command::wire_size).sum()
    }
}
