//! Object and command encoding, field for field the inverse of the decoders

use super::byte_writer::ByteWriter;
use crate::error::{PoolError, Result};
use crate::objects::*;
use crate::types::ObjectId;

/// Write a complete record: id, type tag and payload.
pub fn encode_record<W: ByteWriter + ?Sized>(
    id: ObjectId,
    body: &VtObject,
    writer: &mut W,
) -> Result<()> {
    writer.write_id(id)?;
    writer.write_type(body.object_type().tag())?;
    encode_object(body, writer)
}

fn unencodable(field: &'static str, value: impl ToString) -> PoolError {
    PoolError::Unencodable {
        field,
        value: value.to_string(),
    }
}

/// Angle in degrees, stored halved in one byte
fn write_angle<W: ByteWriter + ?Sized>(
    writer: &mut W,
    field: &'static str,
    degrees: u16,
) -> Result<()> {
    let half = u8::try_from(degrees / 2).map_err(|_| unencodable(field, degrees))?;
    writer.write_byte(half)
}

/// One-byte element count of a list
fn write_count<W: ByteWriter + ?Sized>(
    writer: &mut W,
    field: &'static str,
    count: usize,
) -> Result<()> {
    let count = u8::try_from(count).map_err(|_| unencodable(field, count))?;
    writer.write_byte(count)
}

/// Write the payload of `body`.
pub fn encode_object<W: ByteWriter + ?Sized>(body: &VtObject, w: &mut W) -> Result<()> {
    match body {
        VtObject::WorkingSet(o) => {
            w.write_color(o.background_colour)?;
            w.write_byte(o.selectable as u8)?;
            w.write_ref(o.active_mask)?;
            write_count(w, "objects", o.objects.len())?;
            write_count(w, "macros", o.macros.len())?;
            write_count(w, "languages", o.languages.len())?;
            w.write_ref_xys(&o.objects)?;
            w.write_macros(&o.macros)?;
            w.write_languages(&o.languages)?;
        }
        VtObject::DataMask(o) => {
            w.write_color(o.background_colour)?;
            w.write_ref(o.soft_key_mask)?;
            write_count(w, "objects", o.objects.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_ref_xys(&o.objects)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::AlarmMask(o) => {
            w.write_color(o.background_colour)?;
            w.write_ref(o.soft_key_mask)?;
            w.write_byte(o.priority)?;
            w.write_byte(o.acoustic_signal)?;
            write_count(w, "objects", o.objects.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_ref_xys(&o.objects)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Container(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_byte(o.hidden as u8)?;
            write_count(w, "objects", o.objects.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_ref_xys(&o.objects)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::SoftKeyMask(o) => {
            w.write_color(o.background_colour)?;
            write_count(w, "keys", o.keys.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_refs(&o.keys)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Key(o) => {
            w.write_color(o.background_colour)?;
            w.write_key_code(o.key_code)?;
            write_count(w, "objects", o.objects.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_ref_xys(&o.objects)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Button(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.background_colour)?;
            w.write_color(o.border_colour)?;
            w.write_key_code(o.key_code)?;
            w.write_byte(o.options.bits())?;
            write_count(w, "objects", o.objects.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_ref_xys(&o.objects)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::InputBoolean(o) => {
            w.write_color(o.background_colour)?;
            w.write_word(o.width)?;
            w.write_ref(o.foreground_colour)?;
            w.write_ref(o.variable_reference)?;
            w.write_byte(o.value as u8)?;
            w.write_byte(o.enabled as u8)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::InputString(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.background_colour)?;
            w.write_ref(o.font_attributes)?;
            w.write_ref(o.input_attributes)?;
            w.write_byte(o.options.bits())?;
            w.write_ref(o.variable_reference)?;
            w.write_byte(o.justification)?;
            w.write_byte(o.length)?;
            if o.variable_reference.is_null() {
                w.write_string(o.value.as_deref().unwrap_or_default(), o.length as usize)?;
            }
            w.write_byte(o.enabled as u8)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::InputNumber(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.background_colour)?;
            w.write_ref(o.font_attributes)?;
            w.write_byte(o.options.bits())?;
            w.write_ref(o.variable_reference)?;
            w.write_dword(o.value)?;
            w.write_dword(o.min_value)?;
            w.write_dword(o.max_value)?;
            w.write_dword(o.offset as u32)?;
            w.write_float(o.scale)?;
            w.write_byte(o.number_of_decimals)?;
            w.write_byte(o.format)?;
            w.write_byte(o.justification)?;
            w.write_byte(o.options2.bits())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::InputList(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_ref(o.variable_reference)?;
            w.write_byte(o.value)?;
            write_count(w, "items", o.items.len())?;
            w.write_byte(o.options.bits())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_refs(&o.items)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::OutputString(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.background_colour)?;
            w.write_ref(o.font_attributes)?;
            w.write_byte(o.options.bits())?;
            w.write_ref(o.variable_reference)?;
            w.write_byte(o.justification)?;
            w.write_word(o.length)?;
            if o.variable_reference.is_null() {
                w.write_string(o.value.as_deref().unwrap_or_default(), o.length as usize)?;
            }
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::OutputNumber(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.background_colour)?;
            w.write_ref(o.font_attributes)?;
            w.write_byte(o.options.bits())?;
            w.write_ref(o.variable_reference)?;
            w.write_dword(o.value)?;
            w.write_dword(o.offset as u32)?;
            w.write_float(o.scale)?;
            w.write_byte(o.number_of_decimals)?;
            w.write_byte(o.format)?;
            w.write_byte(o.justification)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Line(o) => {
            w.write_ref(o.line_attributes)?;
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_byte(o.line_direction)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Rectangle(o) => {
            w.write_ref(o.line_attributes)?;
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_byte(o.line_suppression.bits())?;
            w.write_ref(o.fill_attributes)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Ellipse(o) => {
            w.write_ref(o.line_attributes)?;
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_byte(o.ellipse_type)?;
            write_angle(w, "start_angle", o.start_angle)?;
            write_angle(w, "end_angle", o.end_angle)?;
            w.write_ref(o.fill_attributes)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Polygon(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_ref(o.line_attributes)?;
            w.write_ref(o.fill_attributes)?;
            w.write_byte(o.polygon_type)?;
            write_count(w, "points", o.points.len())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_points(&o.points)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::Meter(o) => {
            w.write_word(o.width)?;
            w.write_color(o.needle_colour)?;
            w.write_color(o.border_colour)?;
            w.write_color(o.arc_and_tick_colour)?;
            w.write_byte(o.options.bits())?;
            w.write_byte(o.number_of_ticks)?;
            write_angle(w, "start_angle", o.start_angle)?;
            write_angle(w, "end_angle", o.end_angle)?;
            w.write_word(o.min_value)?;
            w.write_word(o.max_value)?;
            w.write_ref(o.variable_reference)?;
            w.write_word(o.value)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::LinearBarGraph(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.colour)?;
            w.write_color(o.target_line_colour)?;
            w.write_byte(o.options.bits())?;
            w.write_byte(o.number_of_ticks)?;
            w.write_word(o.min_value)?;
            w.write_word(o.max_value)?;
            w.write_ref(o.variable_reference)?;
            w.write_word(o.value)?;
            w.write_ref(o.target_value_variable_reference)?;
            w.write_word(o.target_value)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::ArchedBarGraph(o) => {
            w.write_word(o.width)?;
            w.write_word(o.height)?;
            w.write_color(o.colour)?;
            w.write_color(o.target_line_colour)?;
            w.write_byte(o.options.bits())?;
            write_angle(w, "start_angle", o.start_angle)?;
            write_angle(w, "end_angle", o.end_angle)?;
            w.write_word(o.bar_graph_width)?;
            w.write_word(o.min_value)?;
            w.write_word(o.max_value)?;
            w.write_ref(o.variable_reference)?;
            w.write_word(o.value)?;
            w.write_ref(o.target_value_variable_reference)?;
            w.write_word(o.target_value)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::PictureGraphic(o) => {
            w.write_word(o.width)?;
            w.write_word(o.actual_width)?;
            w.write_word(o.actual_height)?;
            w.write_byte(o.format.code())?;
            w.write_byte(o.options.bits())?;
            w.write_color(o.transparency_colour)?;
            let nbytes = u32::try_from(o.data.len()).map_err(|_| unencodable("data", o.data.len()))?;
            w.write_dword(nbytes)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_byte_array(&o.data)?;
            w.write_macros(&o.macros)?;
        }
        VtObject::NumberVariable(o) => w.write_dword(o.value)?,
        VtObject::StringVariable(o) => {
            w.write_word(o.length)?;
            w.write_string(&o.value, o.length as usize)?;
        }
        VtObject::FontAttributes(o) => {
            w.write_color(o.font_colour)?;
            w.write_byte(o.font_size)?;
            w.write_byte(o.font_type)?;
            w.write_byte(o.font_style.bits())?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::LineAttributes(o) => {
            w.write_color(o.line_colour)?;
            w.write_byte(o.line_width)?;
            w.write_word(o.line_art)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::FillAttributes(o) => {
            w.write_byte(o.fill_type)?;
            w.write_color(o.fill_colour)?;
            w.write_ref(o.fill_pattern)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::InputAttributes(o) => {
            w.write_byte(o.validation_type)?;
            w.write_byte(o.length)?;
            w.write_string(&o.validation_string, o.length as usize)?;
            write_count(w, "macros", o.macros.len())?;
            w.write_macros(&o.macros)?;
        }
        VtObject::ObjectPointer(o) => w.write_ref(o.value)?,
        VtObject::Macro(m) => {
            let length = m.command_bytes();
            let length = u16::try_from(length).map_err(|_| unencodable("commands", length))?;
            w.write_word(length)?;
            for command in &m.commands {
                encode_command(command, w)?;
            }
        }
        VtObject::AuxiliaryFunction(o) => {
            w.write_color(o.background_colour)?;
            w.write_byte(o.function_type)?;
            write_count(w, "objects", o.objects.len())?;
            w.write_ref_xys(&o.objects)?;
        }
        VtObject::AuxiliaryInput(o) => {
            w.write_color(o.background_colour)?;
            w.write_byte(o.function_type)?;
            w.write_byte(o.input_id)?;
            write_count(w, "objects", o.objects.len())?;
            w.write_ref_xys(&o.objects)?;
        }
    }
    Ok(())
}

fn biased(field: &'static str, delta: i16) -> Result<u8> {
    delta
        .checked_add(CHILD_LOCATION_BIAS)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or_else(|| unencodable(field, delta))
}

/// Write one command, tag first.
pub fn encode_command<W: ByteWriter + ?Sized>(command: &Command, w: &mut W) -> Result<()> {
    w.write_byte(command.command_type().tag())?;
    match command {
        Command::HideShowObject { object, show } => {
            w.write_ref(*object)?;
            w.write_byte(*show as u8)?;
            w.write_padding(4)?;
        }
        Command::EnableDisableObject { object, enable } => {
            w.write_ref(*object)?;
            w.write_byte(*enable as u8)?;
            w.write_padding(4)?;
        }
        Command::SelectInputObject { object, option } => {
            w.write_ref(*object)?;
            w.write_byte(*option)?;
            w.write_padding(4)?;
        }
        Command::ControlAudioDevice {
            repetitions,
            frequency,
            on_time,
            off_time,
        } => {
            w.write_byte(*repetitions)?;
            w.write_word(*frequency)?;
            w.write_word(*on_time)?;
            w.write_word(*off_time)?;
        }
        Command::SetAudioVolume { volume } => {
            w.write_byte(*volume)?;
            w.write_padding(6)?;
        }
        Command::ChangeChildLocation {
            parent,
            child,
            dx,
            dy,
        } => {
            w.write_ref(*parent)?;
            w.write_ref(*child)?;
            w.write_byte(biased("dx", *dx)?)?;
            w.write_byte(biased("dy", *dy)?)?;
            w.write_padding(1)?;
        }
        Command::ChangeSize {
            object,
            width,
            height,
        } => {
            w.write_ref(*object)?;
            w.write_word(*width)?;
            w.write_word(*height)?;
            w.write_padding(1)?;
        }
        Command::ChangeBackgroundColour { object, colour } => {
            w.write_ref(*object)?;
            w.write_color(*colour)?;
            w.write_padding(4)?;
        }
        Command::ChangeNumericValue { object, value } => {
            w.write_ref(*object)?;
            w.write_padding(1)?;
            w.write_dword(*value)?;
        }
        Command::ChangeEndPoint {
            object,
            width,
            height,
            line_direction,
        } => {
            w.write_ref(*object)?;
            w.write_word(*width)?;
            w.write_word(*height)?;
            w.write_byte(*line_direction)?;
        }
        Command::ChangeFontAttributes {
            object,
            colour,
            size,
            font_type,
            style,
        } => {
            w.write_ref(*object)?;
            w.write_color(*colour)?;
            w.write_byte(*size)?;
            w.write_byte(*font_type)?;
            w.write_byte(*style)?;
            w.write_padding(1)?;
        }
        Command::ChangeLineAttributes {
            object,
            colour,
            width,
            line_art,
        } => {
            w.write_ref(*object)?;
            w.write_color(*colour)?;
            w.write_byte(*width)?;
            w.write_word(*line_art)?;
            w.write_padding(1)?;
        }
        Command::ChangeFillAttributes {
            object,
            fill_type,
            colour,
            pattern,
        } => {
            w.write_ref(*object)?;
            w.write_byte(*fill_type)?;
            w.write_color(*colour)?;
            w.write_ref(*pattern)?;
            w.write_padding(1)?;
        }
        Command::ChangeActiveMask { working_set, mask } => {
            w.write_ref(*working_set)?;
            w.write_ref(*mask)?;
            w.write_padding(3)?;
        }
        Command::ChangeSoftKeyMask {
            mask_type,
            mask,
            soft_key_mask,
        } => {
            w.write_byte(*mask_type)?;
            w.write_ref(*mask)?;
            w.write_ref(*soft_key_mask)?;
            w.write_padding(2)?;
        }
        Command::ChangeAttribute {
            object,
            attribute_id,
            value,
        } => {
            w.write_ref(*object)?;
            w.write_byte(*attribute_id)?;
            w.write_dword(*value)?;
        }
        Command::ChangePriority { object, priority } => {
            w.write_ref(*object)?;
            w.write_byte(*priority)?;
            w.write_padding(4)?;
        }
        Command::ChangeListItem {
            list,
            index,
            new_object,
        } => {
            w.write_ref(*list)?;
            w.write_byte(*index)?;
            w.write_ref(*new_object)?;
            w.write_padding(2)?;
        }
        Command::ChangeStringValue { object, value } => {
            let length = value.chars().count();
            let length = u16::try_from(length).map_err(|_| unencodable("value", length))?;
            w.write_ref(*object)?;
            w.write_word(length)?;
            w.write_string(value, length as usize)?;
        }
        Command::ChangeChildPosition { parent, child, x, y } => {
            w.write_ref(*parent)?;
            w.write_ref(*child)?;
            w.write_coordinate(*x)?;
            w.write_coordinate(*y)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::binary_reader::BinaryReader;
    use crate::io::reader::byte_reader::ByteReader;
    use crate::io::reader::command_reader::decode_macro;
    use crate::io::writer::binary_writer::BinaryWriter;
    use crate::types::MacroRef;
    use std::io::Cursor;

    #[test]
    fn test_command_sizes_match_wire_size() {
        let commands = vec![
            Command::SetAudioVolume { volume: 3 },
            Command::ChangeChildPosition {
                parent: ObjectId::new(1),
                child: ObjectId::new(2),
                x: -1,
                y: 1,
            },
            Command::ChangeStringValue {
                object: ObjectId::new(1),
                value: "hi".to_string(),
            },
        ];
        for command in &commands {
            let mut w = BinaryWriter::new(Vec::new());
            encode_command(command, &mut w).unwrap();
            assert_eq!(w.into_inner().len() as u64, command.wire_size());
        }
    }

    fn encode(body: &VtObject) -> Result<Vec<u8>> {
        let mut w = BinaryWriter::new(Vec::new());
        encode_object(body, &mut w)?;
        Ok(w.into_inner())
    }

    #[test]
    fn test_oversized_list_is_refused() {
        let container = Container {
            macros: vec![MacroRef::new(0, 1); 256],
            ..Default::default()
        };
        let err = encode(&VtObject::Container(container.clone())).unwrap_err();
        assert!(matches!(err, PoolError::Unencodable { field: "macros", .. }));

        let fits = Container {
            macros: vec![MacroRef::new(0, 1); 255],
            ..container
        };
        assert_eq!(encode(&VtObject::Container(fits)).unwrap().len(), 7 + 255 * 2);
    }

    #[test]
    fn test_angle_beyond_byte_is_refused() {
        let ellipse = Ellipse {
            end_angle: 512,
            ..Default::default()
        };
        let err = encode(&VtObject::Ellipse(ellipse)).unwrap_err();
        assert!(matches!(err, PoolError::Unencodable { field: "end_angle", .. }));
    }

    #[test]
    fn test_child_location_outside_bias_is_refused() {
        let command = Command::ChangeChildLocation {
            parent: ObjectId::new(1),
            child: ObjectId::new(2),
            dx: 129,
            dy: 0,
        };
        let mut w = BinaryWriter::new(Vec::new());
        let err = encode_command(&command, &mut w).unwrap_err();
        assert!(matches!(err, PoolError::Unencodable { field: "dx", .. }));
    }

    #[test]
    fn test_macro_roundtrip() {
        let m = Macro {
            commands: vec![
                Command::ChangeChildLocation {
                    parent: ObjectId::new(1),
                    child: ObjectId::new(2),
                    dx: 5,
                    dy: -127,
                },
                Command::ChangeNumericValue {
                    object: ObjectId::new(4),
                    value: 0xDEAD_BEEF,
                },
            ],
        };
        let mut w = BinaryWriter::new(Vec::new());
        encode_object(&VtObject::Macro(m.clone()), &mut w).unwrap();
        let bytes = w.into_inner();
        assert_eq!(&bytes[0..2], &[16u8, 0]);
        assert_eq!(bytes[2 + 5], 132);

        let mut r = BinaryReader::new(Cursor::new(bytes));
        assert_eq!(decode_macro(&mut r).unwrap(), m);
        assert!(r.is_at_end().unwrap());
    }
}
