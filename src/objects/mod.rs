//! VT object model
//!
//! Every object kind of the pool format is a struct; `VtObject` is the
//! closed set of kinds and `ObjectType` the tag table that selects one on
//! the wire. A decoded object is kept together with its id and assigned
//! name in a `PoolObject`.

pub mod attributes;
pub mod commands;
pub mod fields;
pub mod masks;
pub mod shapes;

pub use attributes::*;
pub use commands::{Command, CommandType, Macro, CHILD_LOCATION_BIAS};
pub use fields::*;
pub use masks::*;
pub use shapes::*;

use crate::types::{MacroRef, ObjectId};

/// Object type tag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectType {
    WorkingSet = 0,
    DataMask = 1,
    AlarmMask = 2,
    Container = 3,
    SoftKeyMask = 4,
    Key = 5,
    Button = 6,
    InputBoolean = 7,
    InputString = 8,
    InputNumber = 9,
    InputList = 10,
    OutputString = 11,
    OutputNumber = 12,
    Line = 13,
    Rectangle = 14,
    Ellipse = 15,
    Polygon = 16,
    Meter = 17,
    LinearBarGraph = 18,
    ArchedBarGraph = 19,
    PictureGraphic = 20,
    NumberVariable = 21,
    StringVariable = 22,
    FontAttributes = 23,
    LineAttributes = 24,
    FillAttributes = 25,
    InputAttributes = 26,
    ObjectPointer = 27,
    Macro = 28,
    AuxiliaryFunction = 29,
    AuxiliaryInput = 30,
}

impl ObjectType {
    pub const ALL: [ObjectType; 31] = [
        Self::WorkingSet,
        Self::DataMask,
        Self::AlarmMask,
        Self::Container,
        Self::SoftKeyMask,
        Self::Key,
        Self::Button,
        Self::InputBoolean,
        Self::InputString,
        Self::InputNumber,
        Self::InputList,
        Self::OutputString,
        Self::OutputNumber,
        Self::Line,
        Self::Rectangle,
        Self::Ellipse,
        Self::Polygon,
        Self::Meter,
        Self::LinearBarGraph,
        Self::ArchedBarGraph,
        Self::PictureGraphic,
        Self::NumberVariable,
        Self::StringVariable,
        Self::FontAttributes,
        Self::LineAttributes,
        Self::FillAttributes,
        Self::InputAttributes,
        Self::ObjectPointer,
        Self::Macro,
        Self::AuxiliaryFunction,
        Self::AuxiliaryInput,
    ];

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Canonical element name, also the base of synthesized object names
    pub fn name(self) -> &'static str {
        match self {
            Self::WorkingSet => "workingset",
            Self::DataMask => "datamask",
            Self::AlarmMask => "alarmmask",
            Self::Container => "container",
            Self::SoftKeyMask => "softkeymask",
            Self::Key => "key",
            Self::Button => "button",
            Self::InputBoolean => "inputboolean",
            Self::InputString => "inputstring",
            Self::InputNumber => "inputnumber",
            Self::InputList => "inputlist",
            Self::OutputString => "outputstring",
            Self::OutputNumber => "outputnumber",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Polygon => "polygon",
            Self::Meter => "meter",
            Self::LinearBarGraph => "linearbargraph",
            Self::ArchedBarGraph => "archedbargraph",
            Self::PictureGraphic => "picturegraphic",
            Self::NumberVariable => "numbervariable",
            Self::StringVariable => "stringvariable",
            Self::FontAttributes => "fontattributes",
            Self::LineAttributes => "lineattributes",
            Self::FillAttributes => "fillattributes",
            Self::InputAttributes => "inputattributes",
            Self::ObjectPointer => "objectpointer",
            Self::Macro => "macro",
            Self::AuxiliaryFunction => "auxiliaryfunction",
            Self::AuxiliaryInput => "auxiliaryinput",
        }
    }
}

/// A decoded object body, one variant per object kind
#[derive(Debug, Clone, PartialEq)]
pub enum VtObject {
    WorkingSet(WorkingSet),
    DataMask(DataMask),
    AlarmMask(AlarmMask),
    Container(Container),
    SoftKeyMask(SoftKeyMask),
    Key(Key),
    Button(Button),
    InputBoolean(InputBoolean),
    InputString(InputString),
    InputNumber(InputNumber),
    InputList(InputList),
    OutputString(OutputString),
    OutputNumber(OutputNumber),
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Meter(Meter),
    LinearBarGraph(LinearBarGraph),
    ArchedBarGraph(ArchedBarGraph),
    PictureGraphic(PictureGraphic),
    NumberVariable(NumberVariable),
    StringVariable(StringVariable),
    FontAttributes(FontAttributes),
    LineAttributes(LineAttributes),
    FillAttributes(FillAttributes),
    InputAttributes(InputAttributes),
    ObjectPointer(ObjectPointer),
    Macro(Macro),
    AuxiliaryFunction(AuxiliaryFunction),
    AuxiliaryInput(AuxiliaryInput),
}

impl VtObject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            VtObject::WorkingSet(_) => ObjectType::WorkingSet,
            VtObject::DataMask(_) => ObjectType::DataMask,
            VtObject::AlarmMask(_) => ObjectType::AlarmMask,
            VtObject::Container(_) => ObjectType::Container,
            VtObject::SoftKeyMask(_) => ObjectType::SoftKeyMask,
            VtObject::Key(_) => ObjectType::Key,
            VtObject::Button(_) => ObjectType::Button,
            VtObject::InputBoolean(_) => ObjectType::InputBoolean,
            VtObject::InputString(_) => ObjectType::InputString,
            VtObject::InputNumber(_) => ObjectType::InputNumber,
            VtObject::InputList(_) => ObjectType::InputList,
            VtObject::OutputString(_) => ObjectType::OutputString,
            VtObject::OutputNumber(_) => ObjectType::OutputNumber,
            VtObject::Line(_) => ObjectType::Line,
            VtObject::Rectangle(_) => ObjectType::Rectangle,
            VtObject::Ellipse(_) => ObjectType::Ellipse,
            VtObject::Polygon(_) => ObjectType::Polygon,
            VtObject::Meter(_) => ObjectType::Meter,
            VtObject::LinearBarGraph(_) => ObjectType::LinearBarGraph,
            VtObject::ArchedBarGraph(_) => ObjectType::ArchedBarGraph,
            VtObject::PictureGraphic(_) => ObjectType::PictureGraphic,
            VtObject::NumberVariable(_) => ObjectType::NumberVariable,
            VtObject::StringVariable(_) => ObjectType::StringVariable,
            VtObject::FontAttributes(_) => ObjectType::FontAttributes,
            VtObject::LineAttributes(_) => ObjectType::LineAttributes,
            VtObject::FillAttributes(_) => ObjectType::FillAttributes,
            VtObject::InputAttributes(_) => ObjectType::InputAttributes,
            VtObject::ObjectPointer(_) => ObjectType::ObjectPointer,
            VtObject::Macro(_) => ObjectType::Macro,
            VtObject::AuxiliaryFunction(_) => ObjectType::AuxiliaryFunction,
            VtObject::AuxiliaryInput(_) => ObjectType::AuxiliaryInput,
        }
    }

    /// Macros bound to events of this object
    pub fn macros(&self) -> &[MacroRef] {
        match self {
            VtObject::WorkingSet(o) => &o.macros,
            VtObject::DataMask(o) => &o.macros,
            VtObject::AlarmMask(o) => &o.macros,
            VtObject::Container(o) => &o.macros,
            VtObject::SoftKeyMask(o) => &o.macros,
            VtObject::Key(o) => &o.macros,
            VtObject::Button(o) => &o.macros,
            VtObject::InputBoolean(o) => &o.macros,
            VtObject::InputString(o) => &o.macros,
            VtObject::InputNumber(o) => &o.macros,
            VtObject::InputList(o) => &o.macros,
            VtObject::OutputString(o) => &o.macros,
            VtObject::OutputNumber(o) => &o.macros,
            VtObject::Line(o) => &o.macros,
            VtObject::Rectangle(o) => &o.macros,
            VtObject::Ellipse(o) => &o.macros,
            VtObject::Polygon(o) => &o.macros,
            VtObject::Meter(o) => &o.macros,
            VtObject::LinearBarGraph(o) => &o.macros,
            VtObject::ArchedBarGraph(o) => &o.macros,
            VtObject::PictureGraphic(o) => &o.macros,
            VtObject::FontAttributes(o) => &o.macros,
            VtObject::LineAttributes(o) => &o.macros,
            VtObject::FillAttributes(o) => &o.macros,
            VtObject::InputAttributes(o) => &o.macros,
            VtObject::NumberVariable(_)
            | VtObject::StringVariable(_)
            | VtObject::ObjectPointer(_)
            | VtObject::Macro(_)
            | VtObject::AuxiliaryFunction(_)
            | VtObject::AuxiliaryInput(_) => &[],
        }
    }

    /// Every non-NULL id this object refers to, macros and command targets included
    pub fn references(&self) -> Vec<ObjectId> {
        let mut refs = Vec::new();
        let placed = |refs: &mut Vec<ObjectId>, objects: &[crate::types::PlacedRef]| {
            refs.extend(objects.iter().map(|p| p.id));
        };
        match self {
            VtObject::WorkingSet(o) => {
                refs.push(o.active_mask);
                placed(&mut refs, &o.objects);
            }
            VtObject::DataMask(o) => {
                refs.push(o.soft_key_mask);
                placed(&mut refs, &o.objects);
            }
            VtObject::AlarmMask(o) => {
                refs.push(o.soft_key_mask);
                placed(&mut refs, &o.objects);
            }
            VtObject::Container(o) => placed(&mut refs, &o.objects),
            VtObject::SoftKeyMask(o) => refs.extend(o.keys.iter().copied()),
            VtObject::Key(o) => placed(&mut refs, &o.objects),
            VtObject::Button(o) => placed(&mut refs, &o.objects),
            VtObject::InputBoolean(o) => {
                refs.extend([o.foreground_colour, o.variable_reference]);
            }
            VtObject::InputString(o) => {
                refs.extend([o.font_attributes, o.input_attributes, o.variable_reference]);
            }
            VtObject::InputNumber(o) => refs.extend([o.font_attributes, o.variable_reference]),
            VtObject::InputList(o) => {
                refs.push(o.variable_reference);
                refs.extend(o.items.iter().copied());
            }
            VtObject::OutputString(o) => refs.extend([o.font_attributes, o.variable_reference]),
            VtObject::OutputNumber(o) => refs.extend([o.font_attributes, o.variable_reference]),
            VtObject::Line(o) => refs.push(o.line_attributes),
            VtObject::Rectangle(o) => refs.extend([o.line_attributes, o.fill_attributes]),
            VtObject::Ellipse(o) => refs.extend([o.line_attributes, o.fill_attributes]),
            VtObject::Polygon(o) => refs.extend([o.line_attributes, o.fill_attributes]),
            VtObject::Meter(o) => refs.push(o.variable_reference),
            VtObject::LinearBarGraph(o) => {
                refs.extend([o.variable_reference, o.target_value_variable_reference]);
            }
            VtObject::ArchedBarGraph(o) => {
                refs.extend([o.variable_reference, o.target_value_variable_reference]);
            }
            VtObject::FillAttributes(o) => refs.push(o.fill_pattern),
            VtObject::ObjectPointer(o) => refs.push(o.value),
            VtObject::Macro(m) => {
                for command in &m.commands {
                    refs.extend(command_references(command));
                }
            }
            VtObject::AuxiliaryFunction(o) => placed(&mut refs, &o.objects),
            VtObject::AuxiliaryInput(o) => placed(&mut refs, &o.objects),
            VtObject::PictureGraphic(_)
            | VtObject::NumberVariable(_)
            | VtObject::StringVariable(_)
            | VtObject::FontAttributes(_)
            | VtObject::LineAttributes(_)
            | VtObject::InputAttributes(_) => {}
        }
        refs.extend(self.macros().iter().map(MacroRef::object_id));
        refs.retain(|id| !id.is_null());
        refs
    }
}

fn command_references(command: &Command) -> Vec<ObjectId> {
    match command {
        Command::HideShowObject { object, .. }
        | Command::EnableDisableObject { object, .. }
        | Command::SelectInputObject { object, .. }
        | Command::ChangeSize { object, .. }
        | Command::ChangeBackgroundColour { object, .. }
        | Command::ChangeNumericValue { object, .. }
        | Command::ChangeEndPoint { object, .. }
        | Command::ChangeFontAttributes { object, .. }
        | Command::ChangeLineAttributes { object, .. }
        | Command::ChangeAttribute { object, .. }
        | Command::ChangePriority { object, .. }
        | Command::ChangeStringValue { object, .. } => vec![*object],
        Command::ChangeFillAttributes { object, pattern, .. } => vec![*object, *pattern],
        Command::ChangeChildLocation { parent, child, .. }
        | Command::ChangeChildPosition { parent, child, .. } => vec![*parent, *child],
        Command::ChangeActiveMask { working_set, mask } => vec![*working_set, *mask],
        Command::ChangeSoftKeyMask { mask, soft_key_mask, .. } => vec![*mask, *soft_key_mask],
        Command::ChangeListItem { list, new_object, .. } => vec![*list, *new_object],
        Command::ControlAudioDevice { .. } | Command::SetAudioVolume { .. } => Vec::new(),
    }
}

/// A top-level object of a decoded pool
#[derive(Debug, Clone, PartialEq)]
pub struct PoolObject {
    /// Wire id, meaningful only within one decode pass
    pub id: ObjectId,
    /// Unique name assigned during naming
    pub name: String,
    pub body: VtObject,
}

impl PoolObject {
    pub fn new(id: ObjectId, name: impl Into<String>, body: VtObject) -> Self {
        PoolObject {
            id,
            name: name.into(),
            body,
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.body.object_type()
    }
}
