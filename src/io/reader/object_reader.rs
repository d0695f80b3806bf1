//! Object record decoding
//!
//! One `read_*` routine per object kind, each consuming the kind's fields
//! in wire order. Count bytes come first, then the lists they size.

use super::byte_reader::ByteReader;
use super::command_reader::decode_macro;
use crate::error::{Location, PoolError, Result};
use crate::objects::*;
use crate::types::options::*;
use crate::types::ObjectId;

/// A decoded `(id, type, payload)` record
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub id: ObjectId,
    pub body: VtObject,
    /// Where the record started
    pub location: Location,
}

/// Read one complete record: id, type tag and payload.
pub fn read_record<R: ByteReader + ?Sized>(reader: &mut R) -> Result<RawRecord> {
    let location = reader.location();
    let id = reader.read_id()?;
    if id.is_null() {
        return Err(PoolError::ReservedObjectId { location });
    }
    let tag = reader.read_type()?;
    let object_type =
        ObjectType::from_tag(tag).ok_or(PoolError::UnknownObjectType { tag, location })?;
    let body = decode_object(object_type, reader)?;
    Ok(RawRecord { id, body, location })
}

/// Decode the payload of an object whose type tag has already been read.
pub fn decode_object<R: ByteReader + ?Sized>(
    object_type: ObjectType,
    reader: &mut R,
) -> Result<VtObject> {
    let object = match object_type {
        ObjectType::WorkingSet => VtObject::WorkingSet(read_working_set(reader)?),
        ObjectType::DataMask => VtObject::DataMask(read_data_mask(reader)?),
        ObjectType::AlarmMask => VtObject::AlarmMask(read_alarm_mask(reader)?),
        ObjectType::Container => VtObject::Container(read_container(reader)?),
        ObjectType::SoftKeyMask => VtObject::SoftKeyMask(read_soft_key_mask(reader)?),
        ObjectType::Key => VtObject::Key(read_key(reader)?),
        ObjectType::Button => VtObject::Button(read_button(reader)?),
        ObjectType::InputBoolean => VtObject::InputBoolean(read_input_boolean(reader)?),
        ObjectType::InputString => VtObject::InputString(read_input_string(reader)?),
        ObjectType::InputNumber => VtObject::InputNumber(read_input_number(reader)?),
        ObjectType::InputList => VtObject::InputList(read_input_list(reader)?),
        ObjectType::OutputString => VtObject::OutputString(read_output_string(reader)?),
        ObjectType::OutputNumber => VtObject::OutputNumber(read_output_number(reader)?),
        ObjectType::Line => VtObject::Line(read_line(reader)?),
        ObjectType::Rectangle => VtObject::Rectangle(read_rectangle(reader)?),
        ObjectType::Ellipse => VtObject::Ellipse(read_ellipse(reader)?),
        ObjectType::Polygon => VtObject::Polygon(read_polygon(reader)?),
        ObjectType::Meter => VtObject::Meter(read_meter(reader)?),
        ObjectType::LinearBarGraph => VtObject::LinearBarGraph(read_linear_bar_graph(reader)?),
        ObjectType::ArchedBarGraph => VtObject::ArchedBarGraph(read_arched_bar_graph(reader)?),
        ObjectType::PictureGraphic => VtObject::PictureGraphic(read_picture_graphic(reader)?),
        ObjectType::NumberVariable => VtObject::NumberVariable(NumberVariable {
            value: reader.read_dword()?,
        }),
        ObjectType::StringVariable => {
            let length = reader.read_word()?;
            let value = reader.read_string(length as usize)?;
            VtObject::StringVariable(StringVariable { length, value })
        }
        ObjectType::FontAttributes => VtObject::FontAttributes(read_font_attributes(reader)?),
        ObjectType::LineAttributes => VtObject::LineAttributes(read_line_attributes(reader)?),
        ObjectType::FillAttributes => VtObject::FillAttributes(read_fill_attributes(reader)?),
        ObjectType::InputAttributes => VtObject::InputAttributes(read_input_attributes(reader)?),
        ObjectType::ObjectPointer => VtObject::ObjectPointer(ObjectPointer {
            value: reader.read_ref()?,
        }),
        ObjectType::Macro => VtObject::Macro(decode_macro(reader)?),
        ObjectType::AuxiliaryFunction => {
            VtObject::AuxiliaryFunction(read_auxiliary_function(reader)?)
        }
        ObjectType::AuxiliaryInput => VtObject::AuxiliaryInput(read_auxiliary_input(reader)?),
    };
    Ok(object)
}

/// Angles are stored in half degrees
fn read_angle<R: ByteReader + ?Sized>(reader: &mut R) -> Result<u16> {
    Ok(reader.read_byte()? as u16 * 2)
}

fn read_count<R: ByteReader + ?Sized>(reader: &mut R) -> Result<usize> {
    Ok(reader.read_byte()? as usize)
}

fn read_working_set<R: ByteReader + ?Sized>(reader: &mut R) -> Result<WorkingSet> {
    let background_colour = reader.read_color()?;
    let selectable = reader.read_byte()? != 0;
    let active_mask = reader.read_ref()?;
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    let nlang = read_count(reader)?;
    Ok(WorkingSet {
        background_colour,
        selectable,
        active_mask,
        objects: reader.read_ref_xys(nobj)?,
        macros: reader.read_macros(nmac)?,
        languages: reader.read_languages(nlang)?,
    })
}

fn read_data_mask<R: ByteReader + ?Sized>(reader: &mut R) -> Result<DataMask> {
    let background_colour = reader.read_color()?;
    let soft_key_mask = reader.read_ref()?;
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(DataMask {
        background_colour,
        soft_key_mask,
        objects: reader.read_ref_xys(nobj)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_alarm_mask<R: ByteReader + ?Sized>(reader: &mut R) -> Result<AlarmMask> {
    let background_colour = reader.read_color()?;
    let soft_key_mask = reader.read_ref()?;
    let priority = reader.read_byte()?;
    let acoustic_signal = reader.read_byte()?;
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(AlarmMask {
        background_colour,
        soft_key_mask,
        priority,
        acoustic_signal,
        objects: reader.read_ref_xys(nobj)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_container<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Container> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let hidden = reader.read_byte()? != 0;
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(Container {
        width,
        height,
        hidden,
        objects: reader.read_ref_xys(nobj)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_soft_key_mask<R: ByteReader + ?Sized>(reader: &mut R) -> Result<SoftKeyMask> {
    let background_colour = reader.read_color()?;
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(SoftKeyMask {
        background_colour,
        keys: reader.read_refs(nobj)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_key<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Key> {
    let background_colour = reader.read_color()?;
    let key_code = reader.read_key_code()?;
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(Key {
        background_colour,
        key_code,
        objects: reader.read_ref_xys(nobj)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_button<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Button> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let background_colour = reader.read_color()?;
    let border_colour = reader.read_color()?;
    let key_code = reader.read_key_code()?;
    let options = ButtonOptions::from_bits_retain(reader.read_byte()?);
    let nobj = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(Button {
        width,
        height,
        background_colour,
        border_colour,
        key_code,
        options,
        objects: reader.read_ref_xys(nobj)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_input_boolean<R: ByteReader + ?Sized>(reader: &mut R) -> Result<InputBoolean> {
    let background_colour = reader.read_color()?;
    let width = reader.read_word()?;
    let foreground_colour = reader.read_ref()?;
    let variable_reference = reader.read_ref()?;
    let value = reader.read_byte()? != 0;
    let enabled = reader.read_byte()? != 0;
    let nmac = read_count(reader)?;
    Ok(InputBoolean {
        background_colour,
        width,
        foreground_colour,
        variable_reference,
        value,
        enabled,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_input_string<R: ByteReader + ?Sized>(reader: &mut R) -> Result<InputString> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let background_colour = reader.read_color()?;
    let font_attributes = reader.read_ref()?;
    let input_attributes = reader.read_ref()?;
    let options = StringOptions::from_bits_retain(reader.read_byte()?);
    let variable_reference = reader.read_ref()?;
    let justification = reader.read_byte()?;
    let length = reader.read_byte()?;
    let value = if variable_reference.is_null() {
        Some(reader.read_string(length as usize)?)
    } else {
        None
    };
    let enabled = reader.read_byte()? != 0;
    let nmac = read_count(reader)?;
    Ok(InputString {
        width,
        height,
        background_colour,
        font_attributes,
        input_attributes,
        options,
        variable_reference,
        justification,
        length,
        value,
        enabled,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_input_number<R: ByteReader + ?Sized>(reader: &mut R) -> Result<InputNumber> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let background_colour = reader.read_color()?;
    let font_attributes = reader.read_ref()?;
    let options = NumberOptions::from_bits_retain(reader.read_byte()?);
    let variable_reference = reader.read_ref()?;
    let value = reader.read_dword()?;
    let min_value = reader.read_dword()?;
    let max_value = reader.read_dword()?;
    let offset = reader.read_dword()? as i32;
    let scale = reader.read_float()?;
    let number_of_decimals = reader.read_byte()?;
    let format = reader.read_byte()?;
    let justification = reader.read_byte()?;
    let options2 = InputOptions::from_bits_retain(reader.read_byte()?);
    let nmac = read_count(reader)?;
    Ok(InputNumber {
        width,
        height,
        background_colour,
        font_attributes,
        options,
        variable_reference,
        value,
        min_value,
        max_value,
        offset,
        scale,
        number_of_decimals,
        format,
        justification,
        options2,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_input_list<R: ByteReader + ?Sized>(reader: &mut R) -> Result<InputList> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let variable_reference = reader.read_ref()?;
    let value = reader.read_byte()?;
    let nitems = read_count(reader)?;
    let options = InputOptions::from_bits_retain(reader.read_byte()?);
    let nmac = read_count(reader)?;
    Ok(InputList {
        width,
        height,
        variable_reference,
        value,
        options,
        items: reader.read_refs(nitems)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_output_string<R: ByteReader + ?Sized>(reader: &mut R) -> Result<OutputString> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let background_colour = reader.read_color()?;
    let font_attributes = reader.read_ref()?;
    let options = StringOptions::from_bits_retain(reader.read_byte()?);
    let variable_reference = reader.read_ref()?;
    let justification = reader.read_byte()?;
    let length = reader.read_word()?;
    let value = if variable_reference.is_null() {
        Some(reader.read_string(length as usize)?)
    } else {
        None
    };
    let nmac = read_count(reader)?;
    Ok(OutputString {
        width,
        height,
        background_colour,
        font_attributes,
        options,
        variable_reference,
        justification,
        length,
        value,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_output_number<R: ByteReader + ?Sized>(reader: &mut R) -> Result<OutputNumber> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let background_colour = reader.read_color()?;
    let font_attributes = reader.read_ref()?;
    let options = NumberOptions::from_bits_retain(reader.read_byte()?);
    let variable_reference = reader.read_ref()?;
    let value = reader.read_dword()?;
    let offset = reader.read_dword()? as i32;
    let scale = reader.read_float()?;
    let number_of_decimals = reader.read_byte()?;
    let format = reader.read_byte()?;
    let justification = reader.read_byte()?;
    let nmac = read_count(reader)?;
    Ok(OutputNumber {
        width,
        height,
        background_colour,
        font_attributes,
        options,
        variable_reference,
        value,
        offset,
        scale,
        number_of_decimals,
        format,
        justification,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_line<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Line> {
    let line_attributes = reader.read_ref()?;
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let line_direction = reader.read_byte()?;
    let nmac = read_count(reader)?;
    Ok(Line {
        line_attributes,
        width,
        height,
        line_direction,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_rectangle<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Rectangle> {
    let line_attributes = reader.read_ref()?;
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let line_suppression = LineSuppression::from_bits_retain(reader.read_byte()?);
    let fill_attributes = reader.read_ref()?;
    let nmac = read_count(reader)?;
    Ok(Rectangle {
        line_attributes,
        width,
        height,
        line_suppression,
        fill_attributes,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_ellipse<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Ellipse> {
    let line_attributes = reader.read_ref()?;
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let ellipse_type = reader.read_byte()?;
    let start_angle = read_angle(reader)?;
    let end_angle = read_angle(reader)?;
    let fill_attributes = reader.read_ref()?;
    let nmac = read_count(reader)?;
    Ok(Ellipse {
        line_attributes,
        width,
        height,
        ellipse_type,
        start_angle,
        end_angle,
        fill_attributes,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_polygon<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Polygon> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let line_attributes = reader.read_ref()?;
    let fill_attributes = reader.read_ref()?;
    let polygon_type = reader.read_byte()?;
    let npoints = read_count(reader)?;
    let nmac = read_count(reader)?;
    Ok(Polygon {
        width,
        height,
        line_attributes,
        fill_attributes,
        polygon_type,
        points: reader.read_points(npoints)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_meter<R: ByteReader + ?Sized>(reader: &mut R) -> Result<Meter> {
    let width = reader.read_word()?;
    let needle_colour = reader.read_color()?;
    let border_colour = reader.read_color()?;
    let arc_and_tick_colour = reader.read_color()?;
    let options = MeterOptions::from_bits_retain(reader.read_byte()?);
    let number_of_ticks = reader.read_byte()?;
    let start_angle = read_angle(reader)?;
    let end_angle = read_angle(reader)?;
    let min_value = reader.read_word()?;
    let max_value = reader.read_word()?;
    let variable_reference = reader.read_ref()?;
    let value = reader.read_word()?;
    let nmac = read_count(reader)?;
    Ok(Meter {
        width,
        needle_colour,
        border_colour,
        arc_and_tick_colour,
        options,
        number_of_ticks,
        start_angle,
        end_angle,
        min_value,
        max_value,
        variable_reference,
        value,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_linear_bar_graph<R: ByteReader + ?Sized>(reader: &mut R) -> Result<LinearBarGraph> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let colour = reader.read_color()?;
    let target_line_colour = reader.read_color()?;
    let options = LinearBarGraphOptions::from_bits_retain(reader.read_byte()?);
    let number_of_ticks = reader.read_byte()?;
    let min_value = reader.read_word()?;
    let max_value = reader.read_word()?;
    let variable_reference = reader.read_ref()?;
    let value = reader.read_word()?;
    let target_value_variable_reference = reader.read_ref()?;
    let target_value = reader.read_word()?;
    let nmac = read_count(reader)?;
    Ok(LinearBarGraph {
        width,
        height,
        colour,
        target_line_colour,
        options,
        number_of_ticks,
        min_value,
        max_value,
        variable_reference,
        value,
        target_value_variable_reference,
        target_value,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_arched_bar_graph<R: ByteReader + ?Sized>(reader: &mut R) -> Result<ArchedBarGraph> {
    let width = reader.read_word()?;
    let height = reader.read_word()?;
    let colour = reader.read_color()?;
    let target_line_colour = reader.read_color()?;
    let options = ArchedBarGraphOptions::from_bits_retain(reader.read_byte()?);
    let start_angle = read_angle(reader)?;
    let end_angle = read_angle(reader)?;
    let bar_graph_width = reader.read_word()?;
    let min_value = reader.read_word()?;
    let max_value = reader.read_word()?;
    let variable_reference = reader.read_ref()?;
    let value = reader.read_word()?;
    let target_value_variable_reference = reader.read_ref()?;
    let target_value = reader.read_word()?;
    let nmac = read_count(reader)?;
    Ok(ArchedBarGraph {
        width,
        height,
        colour,
        target_line_colour,
        options,
        start_angle,
        end_angle,
        bar_graph_width,
        min_value,
        max_value,
        variable_reference,
        value,
        target_value_variable_reference,
        target_value,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_picture_graphic<R: ByteReader + ?Sized>(reader: &mut R) -> Result<PictureGraphic> {
    let width = reader.read_word()?;
    let actual_width = reader.read_word()?;
    let actual_height = reader.read_word()?;
    let format = PictureFormat::from_code(reader.read_byte()?);
    let options = PictureOptions::from_bits_retain(reader.read_byte()?);
    let transparency_colour = reader.read_color()?;
    let nbytes = reader.read_dword()? as usize;
    let nmac = read_count(reader)?;
    Ok(PictureGraphic {
        width,
        actual_width,
        actual_height,
        format,
        options,
        transparency_colour,
        data: reader.read_byte_array(nbytes)?,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_font_attributes<R: ByteReader + ?Sized>(reader: &mut R) -> Result<FontAttributes> {
    let font_colour = reader.read_color()?;
    let font_size = reader.read_byte()?;
    let font_type = reader.read_byte()?;
    let font_style = FontStyle::from_bits_retain(reader.read_byte()?);
    let nmac = read_count(reader)?;
    Ok(FontAttributes {
        font_colour,
        font_size,
        font_type,
        font_style,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_line_attributes<R: ByteReader + ?Sized>(reader: &mut R) -> Result<LineAttributes> {
    let line_colour = reader.read_color()?;
    let line_width = reader.read_byte()?;
    let line_art = reader.read_word()?;
    let nmac = read_count(reader)?;
    Ok(LineAttributes {
        line_colour,
        line_width,
        line_art,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_fill_attributes<R: ByteReader + ?Sized>(reader: &mut R) -> Result<FillAttributes> {
    let fill_type = reader.read_byte()?;
    let fill_colour = reader.read_color()?;
    let fill_pattern = reader.read_ref()?;
    let nmac = read_count(reader)?;
    Ok(FillAttributes {
        fill_type,
        fill_colour,
        fill_pattern,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_input_attributes<R: ByteReader + ?Sized>(reader: &mut R) -> Result<InputAttributes> {
    let validation_type = reader.read_byte()?;
    let length = reader.read_byte()?;
    let validation_string = reader.read_string(length as usize)?;
    let nmac = read_count(reader)?;
    Ok(InputAttributes {
        validation_type,
        length,
        validation_string,
        macros: reader.read_macros(nmac)?,
    })
}

fn read_auxiliary_function<R: ByteReader + ?Sized>(reader: &mut R) -> Result<AuxiliaryFunction> {
    let background_colour = reader.read_color()?;
    let function_type = reader.read_byte()?;
    let nobj = read_count(reader)?;
    Ok(AuxiliaryFunction {
        background_colour,
        function_type,
        objects: reader.read_ref_xys(nobj)?,
    })
}

fn read_auxiliary_input<R: ByteReader + ?Sized>(reader: &mut R) -> Result<AuxiliaryInput> {
    let background_colour = reader.read_color()?;
    let function_type = reader.read_byte()?;
    let input_id = reader.read_byte()?;
    let nobj = read_count(reader)?;
    Ok(AuxiliaryInput {
        background_colour,
        function_type,
        input_id,
        objects: reader.read_ref_xys(nobj)?,
    })
}
