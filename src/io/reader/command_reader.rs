//! Macro command decoding

use super::byte_reader::ByteReader;
use crate::error::{PoolError, Result};
use crate::objects::commands::{Command, CommandType, Macro, CHILD_LOCATION_BIAS};

/// Skip `n` padding bytes
fn skip<R: ByteReader + ?Sized>(reader: &mut R, n: usize) -> Result<()> {
    reader.read_bytes(n)?;
    Ok(())
}

/// Decode the body of a command whose tag has already been read.
pub fn decode_command<R: ByteReader + ?Sized>(
    command_type: CommandType,
    reader: &mut R,
) -> Result<Command> {
    let command = match command_type {
        CommandType::HideShowObject => {
            let object = reader.read_ref()?;
            let show = reader.read_byte()? != 0;
            skip(reader, 4)?;
            Command::HideShowObject { object, show }
        }
        CommandType::EnableDisableObject => {
            let object = reader.read_ref()?;
            let enable = reader.read_byte()? != 0;
            skip(reader, 4)?;
            Command::EnableDisableObject { object, enable }
        }
        CommandType::SelectInputObject => {
            let object = reader.read_ref()?;
            let option = reader.read_byte()?;
            skip(reader, 4)?;
            Command::SelectInputObject { object, option }
        }
        CommandType::ControlAudioDevice => Command::ControlAudioDevice {
            repetitions: reader.read_byte()?,
            frequency: reader.read_word()?,
            on_time: reader.read_word()?,
            off_time: reader.read_word()?,
        },
        CommandType::SetAudioVolume => {
            let volume = reader.read_byte()?;
            skip(reader, 6)?;
            Command::SetAudioVolume { volume }
        }
        CommandType::ChangeChildLocation => {
            let parent = reader.read_ref()?;
            let child = reader.read_ref()?;
            let dx = reader.read_byte()? as i16 - CHILD_LOCATION_BIAS;
            let dy = reader.read_byte()? as i16 - CHILD_LOCATION_BIAS;
            skip(reader, 1)?;
            Command::ChangeChildLocation {
                parent,
                child,
                dx,
                dy,
            }
        }
        CommandType::ChangeSize => {
            let object = reader.read_ref()?;
            let width = reader.read_word()?;
            let height = reader.read_word()?;
            skip(reader, 1)?;
            Command::ChangeSize {
                object,
                width,
                height,
            }
        }
        CommandType::ChangeBackgroundColour => {
            let object = reader.read_ref()?;
            let colour = reader.read_color()?;
            skip(reader, 4)?;
            Command::ChangeBackgroundColour { object, colour }
        }
        CommandType::ChangeNumericValue => {
            let object = reader.read_ref()?;
            skip(reader, 1)?;
            let value = reader.read_dword()?;
            Command::ChangeNumericValue { object, value }
        }
        CommandType::ChangeEndPoint => Command::ChangeEndPoint {
            object: reader.read_ref()?,
            width: reader.read_word()?,
            height: reader.read_word()?,
            line_direction: reader.read_byte()?,
        },
        CommandType::ChangeFontAttributes => {
            let object = reader.read_ref()?;
            let colour = reader.read_color()?;
            let size = reader.read_byte()?;
            let font_type = reader.read_byte()?;
            let style = reader.read_byte()?;
            skip(reader, 1)?;
            Command::ChangeFontAttributes {
                object,
                colour,
                size,
                font_type,
                style,
            }
        }
        CommandType::ChangeLineAttributes => {
            let object = reader.read_ref()?;
            let colour = reader.read_color()?;
            let width = reader.read_byte()?;
            let line_art = reader.read_word()?;
            skip(reader, 1)?;
            Command::ChangeLineAttributes {
                object,
                colour,
                width,
                line_art,
            }
        }
        CommandType::ChangeFillAttributes => {
            let object = reader.read_ref()?;
            let fill_type = reader.read_byte()?;
            let colour = reader.read_color()?;
            let pattern = reader.read_ref()?;
            skip(reader, 1)?;
            Command::ChangeFillAttributes {
                object,
                fill_type,
                colour,
                pattern,
            }
        }
        CommandType::ChangeActiveMask => {
            let working_set = reader.read_ref()?;
            let mask = reader.read_ref()?;
            skip(reader, 3)?;
            Command::ChangeActiveMask { working_set, mask }
        }
        CommandType::ChangeSoftKeyMask => {
            let mask_type = reader.read_byte()?;
            let mask = reader.read_ref()?;
            let soft_key_mask = reader.read_ref()?;
            skip(reader, 2)?;
            Command::ChangeSoftKeyMask {
                mask_type,
                mask,
                soft_key_mask,
            }
        }
        CommandType::ChangeAttribute => Command::ChangeAttribute {
            object: reader.read_ref()?,
            attribute_id: reader.read_byte()?,
            value: reader.read_dword()?,
        },
        CommandType::ChangePriority => {
            let object = reader.read_ref()?;
            let priority = reader.read_byte()?;
            skip(reader, 4)?;
            Command::ChangePriority { object, priority }
        }
        CommandType::ChangeListItem => {
            let list = reader.read_ref()?;
            let index = reader.read_byte()?;
            let new_object = reader.read_ref()?;
            skip(reader, 2)?;
            Command::ChangeListItem {
                list,
                index,
                new_object,
            }
        }
        CommandType::ChangeStringValue => {
            let object = reader.read_ref()?;
            let length = reader.read_word()?;
            let value = reader.read_string(length as usize)?;
            Command::ChangeStringValue { object, value }
        }
        CommandType::ChangeChildPosition => Command::ChangeChildPosition {
            parent: reader.read_ref()?,
            child: reader.read_ref()?,
            x: reader.read_coordinate()?,
            y: reader.read_coordinate()?,
        },
    };
    Ok(command)
}

/// Decode a macro body: a word byte count followed by exactly that many command bytes.
pub fn decode_macro<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Macro> {
    let declared = reader.read_word()? as u64;
    let start = reader.offset();
    let mut commands = Vec::new();

    while reader.offset() - start < declared {
        let remaining = declared - (reader.offset() - start);
        let location = reader.location();
        let command_start = reader.offset();

        let tag = reader.read_byte()?;
        let command_type = CommandType::from_tag(tag)
            .ok_or(PoolError::UnknownCommandType { tag, location })?;
        if command_type.fixed_size() > remaining {
            return Err(PoolError::DataCorruption(format!(
                "{} at {} needs {} bytes, only {} left of a {}-byte command list",
                command_type.name(),
                location,
                command_type.fixed_size(),
                remaining,
                declared
            )));
        }

        let command = decode_command(command_type, reader)?;
        let consumed = reader.offset() - command_start;
        if consumed != command.wire_size() || consumed > remaining {
            return Err(PoolError::DataCorruption(format!(
                "{} at {} consumed {} bytes of a {}-byte command list with {} left",
                command_type.name(),
                location,
                consumed,
                declared,
                remaining
            )));
        }
        commands.push(command);
    }

    Ok(Macro { commands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::binary_reader::BinaryReader;
    use crate::types::ObjectId;
    use std::io::Cursor;

    fn reader(bytes: Vec<u8>) -> BinaryReader<Cursor<Vec<u8>>> {
        BinaryReader::new(Cursor::new(bytes))
    }

    #[test]
    fn test_child_location_bias() {
        let mut r = reader(vec![0x01, 0x00, 0x02, 0x00, 132, 120, 0xFF]);
        let command = decode_command(CommandType::ChangeChildLocation, &mut r).unwrap();
        assert_eq!(
            command,
            Command::ChangeChildLocation {
                parent: ObjectId::new(1),
                child: ObjectId::new(2),
                dx: 5,
                dy: -7,
            }
        );
    }

    #[test]
    fn test_macro_exact_length() {
        let mut bytes = vec![16, 0];
        bytes.extend([0xA0, 0x05, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF]);
        bytes.extend([0xA4, 50, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        let m = decode_macro(&mut reader(bytes)).unwrap();
        assert_eq!(m.commands.len(), 2);
        assert_eq!(m.commands[1], Command::SetAudioVolume { volume: 50 });
    }

    #[test]
    fn test_macro_string_value() {
        let mut bytes = vec![8, 0, 0xB3, 0x07, 0x00, 0x03, 0x00];
        bytes.extend(b"abc");
        let m = decode_macro(&mut reader(bytes)).unwrap();
        assert_eq!(
            m.commands,
            vec![Command::ChangeStringValue {
                object: ObjectId::new(7),
                value: "abc".to_string()
            }]
        );
    }

    #[test]
    fn test_macro_unknown_command() {
        let err = decode_macro(&mut reader(vec![8, 0, 0xB2, 0, 0, 0, 0, 0, 0, 0])).unwrap_err();
        assert!(matches!(err, PoolError::UnknownCommandType { tag: 0xB2, .. }));
    }
}
