//! Rendering decoded objects into output elements
//!
//! Literal fields go through fixed value tables. References become
//! `include_object` children, and only when they resolve in the name table;
//! a NULL or dangling reference is left out.

use crate::document::Element;
use crate::naming::NameTable;
use crate::objects::*;
use crate::types::options::*;
use crate::types::{Color, MacroRef, ObjectId, PlacedRef};

pub const FILL_TYPES: &[&str] = &[
    "no_fill",
    "fill_with_line_colour",
    "fill_with_specified_colour",
    "fill_with_pattern",
];
pub const ELLIPSE_TYPES: &[&str] = &["closed", "open", "closed_segment", "closed_section"];
pub const POLYGON_TYPES: &[&str] = &["convex", "non_convex", "complex", "open"];
pub const LINE_DIRECTIONS: &[&str] = &["toplefttobottomright", "bottomlefttotopright"];
pub const NUMBER_FORMATS: &[&str] = &["fixed", "exponential"];
pub const FONT_SIZES: &[&str] = &[
    "6x8", "8x8", "8x12", "12x16", "16x16", "16x24", "24x32", "32x32", "32x48", "48x64", "64x64",
    "64x96", "96x128", "128x128", "128x192",
];
pub const FONT_TYPES: &[&str] = &[
    "latin1", "latin9", "latin2", "reserved", "latin4", "cyrillic", "reserved", "greek",
];
pub const VALIDATION_TYPES: &[&str] = &["valid_characters", "invalid_characters"];
pub const PRIORITIES: &[&str] = &["high", "medium", "low"];
pub const ACOUSTIC_SIGNALS: &[&str] = &["highest", "medium", "lowest", "none"];
pub const HORIZONTAL_JUSTIFICATIONS: &[&str] = &["left", "middle", "right"];
pub const VERTICAL_JUSTIFICATIONS: &[&str] = &["top", "middle", "bottom"];
pub const FUNCTION_TYPES: &[&str] = &["latching", "analog", "non_latching"];
pub const MASK_TYPES: &[&str] = &["", "data", "alarm"];

/// Event names by event id, starting at 1
pub const EVENTS: &[&str] = &[
    "on_activate",
    "on_deactivate",
    "on_show",
    "on_hide",
    "on_enable",
    "on_disable",
    "on_change_active_mask",
    "on_change_soft_key_mask",
    "on_change_attribute",
    "on_change_background_colour",
    "on_change_font_attributes",
    "on_change_line_attributes",
    "on_change_fill_attributes",
    "on_change_child_location",
    "on_change_size",
    "on_change_value",
    "on_change_priority",
    "on_change_end_point",
    "on_input_field_selection",
    "on_input_field_deselection",
    "on_esc",
    "on_entry_of_value",
    "on_entry_of_new_value",
    "on_key_press",
    "on_key_release",
    "on_change_child_position",
];

/// Table entry for `value`, or its decimal form when outside the table
pub fn lookup(table: &[&str], value: u8) -> String {
    match table.get(value as usize) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => value.to_string(),
    }
}

pub fn font_type_name(value: u8) -> String {
    if value == 255 {
        "proprietary".to_string()
    } else {
        lookup(FONT_TYPES, value)
    }
}

pub fn event_name(event: u8) -> String {
    match event.checked_sub(1).and_then(|i| EVENTS.get(i as usize)) {
        Some(name) => name.to_string(),
        None => event.to_string(),
    }
}

/// 16-bit line pattern as a zero-padded binary string
pub fn get_line_art(line_art: u16) -> String {
    format!("{line_art:016b}")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Renders one object at a time against a finished name table
pub struct Renderer<'a> {
    names: &'a NameTable,
}

impl<'a> Renderer<'a> {
    pub fn new(names: &'a NameTable) -> Self {
        Self { names }
    }

    /// Append an `include_object` for `id` with `role`; false when it does not resolve
    fn include_role(&self, element: &mut Element, id: ObjectId, role: &str) -> bool {
        match self.names.resolve(id) {
            Some(name) => {
                element.push(
                    Element::new("include_object")
                        .with_attribute("name", name)
                        .with_attribute("role", role),
                );
                true
            }
            None => false,
        }
    }

    fn include_placed(&self, element: &mut Element, objects: &[PlacedRef]) {
        for placed in objects {
            if let Some(name) = self.names.resolve(placed.id) {
                element.push(
                    Element::new("include_object")
                        .with_attribute("name", name)
                        .with_attribute("pos_x", placed.x)
                        .with_attribute("pos_y", placed.y),
                );
            }
        }
    }

    fn include_list(&self, element: &mut Element, ids: &[ObjectId]) {
        for id in ids {
            if let Some(name) = self.names.resolve(*id) {
                element.push(Element::new("include_object").with_attribute("name", name));
            }
        }
    }

    fn include_macros(&self, element: &mut Element, macros: &[MacroRef]) {
        for macro_ref in macros {
            if let Some(name) = self.names.resolve(macro_ref.object_id()) {
                element.push(
                    Element::new("include_object")
                        .with_attribute("name", name)
                        .with_attribute("role", "macro")
                        .with_attribute("event", event_name(macro_ref.event)),
                );
            }
        }
    }

    fn justification(element: &mut Element, justification: u8) {
        element.set_attribute(
            "horizontal_justification",
            lookup(HORIZONTAL_JUSTIFICATIONS, justification & 0x03),
        );
        element.set_attribute(
            "vertical_justification",
            lookup(VERTICAL_JUSTIFICATIONS, (justification >> 2) & 0x03),
        );
    }

    /// Element for a named object
    pub fn render_object(&self, object: &PoolObject) -> Element {
        let mut e = Element::new(object.object_type().name()).with_attribute("name", &object.name);

        match &object.body {
            VtObject::WorkingSet(o) => {
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("selectable", yes_no(o.selectable));
                self.include_role(&mut e, o.active_mask, "active_mask");
                self.include_placed(&mut e, &o.objects);
                self.include_macros(&mut e, &o.macros);
                for language in &o.languages {
                    e.push(Element::new("language").with_attribute("code", language.trim_end()));
                }
            }
            VtObject::DataMask(o) => {
                e.set_attribute("background_colour", o.background_colour);
                self.include_role(&mut e, o.soft_key_mask, "soft_key_mask");
                self.include_placed(&mut e, &o.objects);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::AlarmMask(o) => {
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("priority", lookup(PRIORITIES, o.priority));
                e.set_attribute("acoustic_signal", lookup(ACOUSTIC_SIGNALS, o.acoustic_signal));
                self.include_role(&mut e, o.soft_key_mask, "soft_key_mask");
                self.include_placed(&mut e, &o.objects);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Container(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("hidden", yes_no(o.hidden));
                self.include_placed(&mut e, &o.objects);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::SoftKeyMask(o) => {
                e.set_attribute("background_colour", o.background_colour);
                self.include_list(&mut e, &o.keys);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Key(o) => {
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("key_code", o.key_code);
                self.include_placed(&mut e, &o.objects);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Button(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("border_colour", o.border_colour);
                e.set_attribute("key_code", o.key_code);
                e.set_attribute("options", flags_to_string(o.options.bits(), BUTTON_FLAGS, "none"));
                self.include_placed(&mut e, &o.objects);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::InputBoolean(o) => {
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("width", o.width);
                if self.names.resolve(o.variable_reference).is_none() {
                    e.set_attribute("value", yes_no(o.value));
                }
                e.set_attribute("enabled", yes_no(o.enabled));
                self.include_role(&mut e, o.foreground_colour, "foreground_colour");
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::InputString(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("options", flags_to_string(o.options.bits(), STRING_FLAGS, "none"));
                Self::justification(&mut e, o.justification);
                e.set_attribute("length", o.length);
                if let Some(value) = self.inline_string(o.variable_reference, &o.value) {
                    e.set_attribute("value", value);
                }
                e.set_attribute("enabled", yes_no(o.enabled));
                self.include_role(&mut e, o.font_attributes, "font_attributes");
                self.include_role(&mut e, o.input_attributes, "input_attributes");
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::InputNumber(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("options", flags_to_string(o.options.bits(), NUMBER_FLAGS, "none"));
                if self.names.resolve(o.variable_reference).is_none() {
                    e.set_attribute("value", o.value);
                }
                e.set_attribute("min_value", o.min_value);
                e.set_attribute("max_value", o.max_value);
                e.set_attribute("offset", o.offset);
                e.set_attribute("scale", o.scale);
                e.set_attribute("number_of_decimals", o.number_of_decimals);
                e.set_attribute("format", lookup(NUMBER_FORMATS, o.format));
                Self::justification(&mut e, o.justification);
                e.set_attribute("options2", flags_to_string(o.options2.bits(), INPUT_FLAGS, "none"));
                self.include_role(&mut e, o.font_attributes, "font_attributes");
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::InputList(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                if self.names.resolve(o.variable_reference).is_none() {
                    e.set_attribute("value", o.value);
                }
                e.set_attribute("options", flags_to_string(o.options.bits(), INPUT_FLAGS, "none"));
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_list(&mut e, &o.items);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::OutputString(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("options", flags_to_string(o.options.bits(), STRING_FLAGS, "none"));
                Self::justification(&mut e, o.justification);
                e.set_attribute("length", o.length);
                if let Some(value) = self.inline_string(o.variable_reference, &o.value) {
                    e.set_attribute("value", value);
                }
                self.include_role(&mut e, o.font_attributes, "font_attributes");
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::OutputNumber(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("options", flags_to_string(o.options.bits(), NUMBER_FLAGS, "none"));
                if self.names.resolve(o.variable_reference).is_none() {
                    e.set_attribute("value", o.value);
                }
                e.set_attribute("offset", o.offset);
                e.set_attribute("scale", o.scale);
                e.set_attribute("number_of_decimals", o.number_of_decimals);
                e.set_attribute("format", lookup(NUMBER_FORMATS, o.format));
                Self::justification(&mut e, o.justification);
                self.include_role(&mut e, o.font_attributes, "font_attributes");
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Line(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("line_direction", lookup(LINE_DIRECTIONS, o.line_direction));
                self.include_role(&mut e, o.line_attributes, "line_attributes");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Rectangle(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute(
                    "line_suppression",
                    flags_to_string(o.line_suppression.bits(), LINE_SUPPRESSION_FLAGS, "none"),
                );
                self.include_role(&mut e, o.line_attributes, "line_attributes");
                self.include_role(&mut e, o.fill_attributes, "fill_attributes");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Ellipse(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("ellipse_type", lookup(ELLIPSE_TYPES, o.ellipse_type));
                e.set_attribute("start_angle", o.start_angle);
                e.set_attribute("end_angle", o.end_angle);
                self.include_role(&mut e, o.line_attributes, "line_attributes");
                self.include_role(&mut e, o.fill_attributes, "fill_attributes");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Polygon(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("polygon_type", lookup(POLYGON_TYPES, o.polygon_type));
                self.include_role(&mut e, o.line_attributes, "line_attributes");
                self.include_role(&mut e, o.fill_attributes, "fill_attributes");
                for point in &o.points {
                    e.push(
                        Element::new("point")
                            .with_attribute("pos_x", point.x)
                            .with_attribute("pos_y", point.y),
                    );
                }
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::Meter(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("needle_colour", o.needle_colour);
                e.set_attribute("border_colour", o.border_colour);
                e.set_attribute("arc_and_tick_colour", o.arc_and_tick_colour);
                e.set_attribute("options", flags_to_string(o.options.bits(), METER_FLAGS, "none"));
                e.set_attribute("number_of_ticks", o.number_of_ticks);
                e.set_attribute("start_angle", o.start_angle);
                e.set_attribute("end_angle", o.end_angle);
                e.set_attribute("min_value", o.min_value);
                e.set_attribute("max_value", o.max_value);
                if self.names.resolve(o.variable_reference).is_none() {
                    e.set_attribute("value", o.value);
                }
                self.include_role(&mut e, o.variable_reference, "variable_reference");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::LinearBarGraph(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("colour", o.colour);
                e.set_attribute("target_line_colour", o.target_line_colour);
                e.set_attribute(
                    "options",
                    flags_to_string(o.options.bits(), LINEAR_BAR_GRAPH_FLAGS, "none"),
                );
                e.set_attribute("number_of_ticks", o.number_of_ticks);
                e.set_attribute("min_value", o.min_value);
                e.set_attribute("max_value", o.max_value);
                self.bar_graph_values(
                    &mut e,
                    (o.variable_reference, o.value),
                    (o.target_value_variable_reference, o.target_value),
                );
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::ArchedBarGraph(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("height", o.height);
                e.set_attribute("colour", o.colour);
                e.set_attribute("target_line_colour", o.target_line_colour);
                e.set_attribute(
                    "options",
                    flags_to_string(o.options.bits(), ARCHED_BAR_GRAPH_FLAGS, "none"),
                );
                e.set_attribute("start_angle", o.start_angle);
                e.set_attribute("end_angle", o.end_angle);
                e.set_attribute("bar_graph_width", o.bar_graph_width);
                e.set_attribute("min_value", o.min_value);
                e.set_attribute("max_value", o.max_value);
                self.bar_graph_values(
                    &mut e,
                    (o.variable_reference, o.value),
                    (o.target_value_variable_reference, o.target_value),
                );
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::PictureGraphic(o) => {
                e.set_attribute("width", o.width);
                e.set_attribute("actual_width", o.actual_width);
                e.set_attribute("actual_height", o.actual_height);
                e.set_attribute("format", o.format.name());
                e.set_attribute("options", flags_to_string(o.options.bits(), PICTURE_FLAGS, "none"));
                e.set_attribute("transparency_colour", o.transparency_colour);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::NumberVariable(o) => {
                e.set_attribute("value", o.value);
            }
            VtObject::StringVariable(o) => {
                e.set_attribute("value", &o.value);
            }
            VtObject::FontAttributes(o) => {
                e.set_attribute("font_colour", o.font_colour);
                e.set_attribute("font_size", lookup(FONT_SIZES, o.font_size));
                e.set_attribute("font_type", font_type_name(o.font_type));
                e.set_attribute(
                    "font_style",
                    flags_to_string(o.font_style.bits(), FONT_STYLE_FLAGS, "normal"),
                );
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::LineAttributes(o) => {
                e.set_attribute("line_colour", o.line_colour);
                e.set_attribute("line_width", o.line_width);
                e.set_attribute("line_art", get_line_art(o.line_art));
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::FillAttributes(o) => {
                e.set_attribute("fill_type", lookup(FILL_TYPES, o.fill_type));
                e.set_attribute("fill_colour", o.fill_colour);
                self.include_role(&mut e, o.fill_pattern, "fill_pattern");
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::InputAttributes(o) => {
                e.set_attribute("validation_type", lookup(VALIDATION_TYPES, o.validation_type));
                e.set_attribute("length", o.length);
                e.set_attribute("validation_string", &o.validation_string);
                self.include_macros(&mut e, &o.macros);
            }
            VtObject::ObjectPointer(o) => {
                self.include_role(&mut e, o.value, "value");
            }
            VtObject::Macro(m) => {
                for command in &m.commands {
                    e.push(self.render_command(command));
                }
            }
            VtObject::AuxiliaryFunction(o) => {
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("function_type", lookup(FUNCTION_TYPES, o.function_type));
                self.include_placed(&mut e, &o.objects);
            }
            VtObject::AuxiliaryInput(o) => {
                e.set_attribute("background_colour", o.background_colour);
                e.set_attribute("function_type", lookup(FUNCTION_TYPES, o.function_type));
                e.set_attribute("input_id", o.input_id);
                self.include_placed(&mut e, &o.objects);
            }
        }

        e
    }

    /// Inline string value, shown only when the variable does not resolve
    fn inline_string<'v>(&self, variable: ObjectId, value: &'v Option<String>) -> Option<&'v str> {
        if self.names.resolve(variable).is_some() {
            return None;
        }
        value.as_deref()
    }

    fn bar_graph_values(&self, e: &mut Element, value: (ObjectId, u16), target: (ObjectId, u16)) {
        if !self.include_role(e, value.0, "variable_reference") {
            e.set_attribute("value", value.1);
        }
        if !self.include_role(e, target.0, "target_value_variable_reference") {
            e.set_attribute("target_value", target.1);
        }
    }

    /// Element for one macro command
    pub fn render_command(&self, command: &Command) -> Element {
        let mut e = Element::new(command.command_type().name());
        let colour = |c: &Color| c.to_string();

        match command {
            Command::HideShowObject { object, show } => {
                e.set_attribute("show", yes_no(*show));
                self.include_role(&mut e, *object, "object");
            }
            Command::EnableDisableObject { object, enable } => {
                e.set_attribute("enable", yes_no(*enable));
                self.include_role(&mut e, *object, "object");
            }
            Command::SelectInputObject { object, option } => {
                e.set_attribute("option", option);
                self.include_role(&mut e, *object, "object");
            }
            Command::ControlAudioDevice {
                repetitions,
                frequency,
                on_time,
                off_time,
            } => {
                e.set_attribute("repetitions", repetitions);
                e.set_attribute("frequency", frequency);
                e.set_attribute("on_time_duration", on_time);
                e.set_attribute("off_time_duration", off_time);
            }
            Command::SetAudioVolume { volume } => {
                e.set_attribute("volume", volume);
            }
            Command::ChangeChildLocation {
                parent,
                child,
                dx,
                dy,
            } => {
                e.set_attribute("d_pos_x", dx);
                e.set_attribute("d_pos_y", dy);
                self.include_role(&mut e, *parent, "parent");
                self.include_role(&mut e, *child, "child");
            }
            Command::ChangeSize {
                object,
                width,
                height,
            } => {
                e.set_attribute("width", width);
                e.set_attribute("height", height);
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeBackgroundColour { object, colour: c } => {
                e.set_attribute("background_colour", colour(c));
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeNumericValue { object, value } => {
                e.set_attribute("value", value);
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeEndPoint {
                object,
                width,
                height,
                line_direction,
            } => {
                e.set_attribute("width", width);
                e.set_attribute("height", height);
                e.set_attribute("line_direction", lookup(LINE_DIRECTIONS, *line_direction));
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeFontAttributes {
                object,
                colour: c,
                size,
                font_type,
                style,
            } => {
                e.set_attribute("font_colour", colour(c));
                e.set_attribute("font_size", lookup(FONT_SIZES, *size));
                e.set_attribute("font_type", font_type_name(*font_type));
                e.set_attribute("font_style", flags_to_string(*style, FONT_STYLE_FLAGS, "normal"));
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeLineAttributes {
                object,
                colour: c,
                width,
                line_art,
            } => {
                e.set_attribute("line_colour", colour(c));
                e.set_attribute("line_width", width);
                e.set_attribute("line_art", get_line_art(*line_art));
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeFillAttributes {
                object,
                fill_type,
                colour: c,
                pattern,
            } => {
                e.set_attribute("fill_type", lookup(FILL_TYPES, *fill_type));
                e.set_attribute("fill_colour", colour(c));
                self.include_role(&mut e, *object, "object");
                self.include_role(&mut e, *pattern, "fill_pattern");
            }
            Command::ChangeActiveMask { working_set, mask } => {
                self.include_role(&mut e, *working_set, "working_set");
                self.include_role(&mut e, *mask, "mask");
            }
            Command::ChangeSoftKeyMask {
                mask_type,
                mask,
                soft_key_mask,
            } => {
                e.set_attribute("mask_type", lookup(MASK_TYPES, *mask_type));
                self.include_role(&mut e, *mask, "mask");
                self.include_role(&mut e, *soft_key_mask, "soft_key_mask");
            }
            Command::ChangeAttribute {
                object,
                attribute_id,
                value,
            } => {
                e.set_attribute("attribute_id", attribute_id);
                e.set_attribute("value", value);
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangePriority { object, priority } => {
                e.set_attribute("priority", lookup(PRIORITIES, *priority));
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeListItem {
                list,
                index,
                new_object,
            } => {
                e.set_attribute("index", index);
                self.include_role(&mut e, *list, "list");
                self.include_role(&mut e, *new_object, "new_object");
            }
            Command::ChangeStringValue { object, value } => {
                e.set_attribute("value", value);
                self.include_role(&mut e, *object, "object");
            }
            Command::ChangeChildPosition { parent, child, x, y } => {
                e.set_attribute("pos_x", x);
                e.set_attribute("pos_y", y);
                self.include_role(&mut e, *parent, "parent");
                self.include_role(&mut e, *child, "child");
            }
        }

        e
    }
}

/// Render `object` against `names`
pub fn render_object(object: &PoolObject, names: &NameTable) -> Element {
    Renderer::new(names).render_object(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[(u16, &str)]) -> NameTable {
        let mut table = NameTable::new();
        for (id, name) in entries {
            table.assign(ObjectId::new(*id), name, "x", crate::error::Location::Line(1)).unwrap();
        }
        table
    }

    #[test]
    fn test_line_art() {
        assert_eq!(get_line_art(5), "0000000000000101");
        assert_eq!(get_line_art(0xFFFF), "1111111111111111");
    }

    #[test]
    fn test_lookup_fallback() {
        assert_eq!(lookup(FILL_TYPES, 2), "fill_with_specified_colour");
        assert_eq!(lookup(FILL_TYPES, 9), "9");
        assert_eq!(font_type_name(255), "proprietary");
        assert_eq!(event_name(1), "on_activate");
        assert_eq!(event_name(26), "on_change_child_position");
        assert_eq!(event_name(0), "0");
        assert_eq!(event_name(200), "200");
    }

    #[test]
    fn test_null_variable_renders_inline_value() {
        let table = names(&[(1, "num")]);
        let object = PoolObject::new(
            ObjectId::new(1),
            "num",
            VtObject::OutputNumber(OutputNumber {
                variable_reference: ObjectId::NULL,
                value: 42,
                scale: 1.0,
                ..Default::default()
            }),
        );
        let e = render_object(&object, &table);
        assert_eq!(e.attribute("value"), Some("42"));
        assert_eq!(e.includes_with_role("variable_reference").count(), 0);
    }

    #[test]
    fn test_resolved_variable_renders_role() {
        let table = names(&[(1, "num"), (2, "var")]);
        let object = PoolObject::new(
            ObjectId::new(1),
            "num",
            VtObject::OutputNumber(OutputNumber {
                variable_reference: ObjectId::new(2),
                value: 42,
                ..Default::default()
            }),
        );
        let e = render_object(&object, &table);
        assert!(!e.has_attribute("value"));
        let roles: Vec<&Element> = e.includes_with_role("variable_reference").collect();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].attribute("name"), Some("var"));
    }

    #[test]
    fn test_dangling_reference_omitted() {
        let table = names(&[(1, "rect")]);
        let object = PoolObject::new(
            ObjectId::new(1),
            "rect",
            VtObject::Rectangle(Rectangle {
                line_attributes: ObjectId::new(77),
                ..Default::default()
            }),
        );
        let e = render_object(&object, &table);
        assert!(e.children.is_empty());
        assert_eq!(e.attribute("line_suppression"), Some("none"));
    }

    #[test]
    fn test_macro_event_include() {
        let table = names(&[(1, "mask"), (3, "showIt")]);
        let object = PoolObject::new(
            ObjectId::new(1),
            "mask",
            VtObject::DataMask(DataMask {
                background_colour: Color(12),
                macros: vec![MacroRef::new(3, 3)],
                ..Default::default()
            }),
        );
        let e = render_object(&object, &table);
        assert_eq!(e.attribute("background_colour"), Some("red"));
        let macros: Vec<&Element> = e.includes_with_role("macro").collect();
        assert_eq!(macros[0].attribute("event"), Some("on_show"));
        assert_eq!(macros[0].attribute("name"), Some("showIt"));
    }

    #[test]
    fn test_command_roles() {
        let table = names(&[(1, "ws"), (2, "mask")]);
        let renderer = Renderer::new(&table);
        let e = renderer.render_command(&Command::ChangeActiveMask {
            working_set: ObjectId::new(1),
            mask: ObjectId::new(2),
        });
        assert_eq!(e.name, "command_change_active_mask");
        assert_eq!(e.includes_with_role("working_set").count(), 1);
        assert_eq!(e.includes_with_role("mask").count(), 1);
    }

    #[test]
    fn test_child_location_attributes() {
        let table = NameTable::new();
        let e = Renderer::new(&table).render_command(&Command::ChangeChildLocation {
            parent: ObjectId::new(1),
            child: ObjectId::new(2),
            dx: 5,
            dy: -3,
        });
        assert_eq!(e.attribute("d_pos_x"), Some("5"));
        assert_eq!(e.attribute("d_pos_y"), Some("-3"));
    }
}
