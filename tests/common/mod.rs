//! Shared test utilities for vtpool integration tests.
//!
//! Builds synthetic pools in each of the three input encodings from the
//! same typed objects, so tests can compare what the importer makes of them.

#![allow(dead_code)]

use vtpool::io::writer::{encode_record, BinaryWriter, TextWriter};
use vtpool::objects::*;
use vtpool::types::options::{NumberOptions, PictureOptions, StringOptions};
use vtpool::types::{Color, MacroRef, ObjectId, PlacedRef};
use vtpool::{Element, ImportedPool, InputFormat, PoolImporter};

/// An object of a test pool: declared name, id and body
pub type Entry = (&'static str, u16, VtObject);

pub fn id(value: u16) -> ObjectId {
    ObjectId::new(value)
}

// ===========================================================================
// Encoders
// ===========================================================================

/// Binary records for `objects`
pub fn binary_pool<N: AsRef<str>>(objects: &[(N, u16, VtObject)]) -> Vec<u8> {
    let mut writer = BinaryWriter::new(Vec::new());
    for (_, object_id, body) in objects {
        encode_record(id(*object_id), body, &mut writer).expect("encode record");
    }
    writer.into_inner()
}

/// Name and desc lines for `objects`
pub fn sav_pool<N: AsRef<str>>(objects: &[(N, u16, VtObject)]) -> String {
    let mut writer = TextWriter::new(Vec::new());
    for (name, object_id, body) in objects {
        encode_record(id(*object_id), body, &mut writer).expect("encode record");
        writer.end_record(name.as_ref()).expect("end record");
    }
    String::from_utf8(writer.into_inner()).expect("utf-8 sav")
}

/// A C header holding `bytes` as an array, with a `#define` per entry in `names`
pub fn header_pool(bytes: &[u8], names: &[(&str, u16)]) -> String {
    let mut text = String::from("/* generated pool */\n");
    for (name, object_id) in names {
        text.push_str(&format!("#define {name} {object_id}\n"));
    }
    text.push_str("const unsigned char pool[] = {\n");
    for chunk in bytes.chunks(12) {
        let row: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
        text.push_str("    ");
        text.push_str(&row.join(", "));
        text.push_str(",\n");
    }
    text.push_str("};\n");
    text
}

/// Header form of `objects`, declaring every entry's name
pub fn header_pool_of(objects: &[Entry]) -> String {
    let names: Vec<(&str, u16)> = objects.iter().map(|(n, i, _)| (*n, *i)).collect();
    header_pool(&binary_pool(objects), &names)
}

pub fn import(format: InputFormat, bytes: impl Into<Vec<u8>>) -> ImportedPool {
    PoolImporter::from_bytes(format, bytes.into())
        .import()
        .expect("import pool")
}

// ===========================================================================
// Sample pool
// ===========================================================================

/// A small pool touching masks, fields, shapes, attributes, a macro and a picture.
///
/// Names match what a binary import assigns, so every encoding renders the
/// same document.
pub fn sample_pool() -> Vec<Entry> {
    vec![
        (
            "workingset0",
            0,
            VtObject::WorkingSet(WorkingSet {
                background_colour: Color(1),
                selectable: true,
                active_mask: id(1000),
                objects: vec![PlacedRef::new(id(31), 0, 0)],
                macros: vec![MacroRef::new(0, 200)],
                languages: vec!["en".to_string(), "de".to_string()],
            }),
        ),
        (
            "datamask0",
            1000,
            VtObject::DataMask(DataMask {
                background_colour: Color(0),
                soft_key_mask: ObjectId::NULL,
                objects: vec![
                    PlacedRef::new(id(11000), 10, 20),
                    PlacedRef::new(id(12000), -5, 40),
                    PlacedRef::new(id(2000), 60, 60),
                    PlacedRef::new(id(20000), 0, 100),
                ],
                macros: Vec::new(),
            }),
        ),
        (
            "outputstring0",
            11000,
            VtObject::OutputString(OutputString {
                width: 120,
                height: 16,
                background_colour: Color(1),
                font_attributes: id(23000),
                options: StringOptions::TRANSPARENT,
                variable_reference: id(22000),
                justification: 0b0110,
                length: 8,
                value: None,
                macros: Vec::new(),
            }),
        ),
        (
            "stringvariable0",
            22000,
            VtObject::StringVariable(StringVariable {
                length: 8,
                value: "Speed   ".to_string(),
            }),
        ),
        (
            "outputnumber0",
            12000,
            VtObject::OutputNumber(OutputNumber {
                width: 80,
                height: 16,
                background_colour: Color(1),
                font_attributes: id(23000),
                options: NumberOptions::empty(),
                variable_reference: ObjectId::NULL,
                value: 42,
                offset: -10,
                scale: 0.5,
                number_of_decimals: 1,
                format: 0,
                justification: 0,
                macros: Vec::new(),
            }),
        ),
        (
            "ellipse0",
            2000,
            VtObject::Ellipse(Ellipse {
                line_attributes: id(24000),
                width: 30,
                height: 20,
                ellipse_type: 1,
                start_angle: 180,
                end_angle: 90,
                fill_attributes: ObjectId::NULL,
                macros: Vec::new(),
            }),
        ),
        (
            "picturegraphic0",
            20000,
            VtObject::PictureGraphic(PictureGraphic {
                width: 8,
                actual_width: 8,
                actual_height: 2,
                format: PictureFormat::Monochrome,
                options: PictureOptions::empty(),
                transparency_colour: Color(0),
                data: vec![0b1010_0000, 0xFF],
                macros: Vec::new(),
            }),
        ),
        (
            "fontattributes0",
            23000,
            VtObject::FontAttributes(FontAttributes {
                font_colour: Color(0),
                font_size: 2,
                font_type: 0,
                font_style: Default::default(),
                macros: Vec::new(),
            }),
        ),
        (
            "lineattributes0",
            24000,
            VtObject::LineAttributes(LineAttributes {
                line_colour: Color(12),
                line_width: 1,
                line_art: 0xFFFF,
                macros: Vec::new(),
            }),
        ),
        (
            "numbervariable0",
            31,
            VtObject::NumberVariable(NumberVariable { value: 7 }),
        ),
        (
            "macro0",
            200,
            VtObject::Macro(Macro {
                commands: vec![
                    Command::HideShowObject {
                        object: id(2000),
                        show: false,
                    },
                    Command::ChangeChildLocation {
                        parent: id(1000),
                        child: id(2000),
                        dx: 5,
                        dy: -3,
                    },
                    Command::ChangeStringValue {
                        object: id(22000),
                        value: "Stop".to_string(),
                    },
                ],
            }),
        ),
    ]
}

// ===========================================================================
// Document helpers
// ===========================================================================

/// The element named `name`, panicking when it is missing
pub fn element<'a>(pool: &'a ImportedPool, name: &str) -> &'a Element {
    pool.document
        .find(name)
        .unwrap_or_else(|| panic!("no element named {name}"))
}
