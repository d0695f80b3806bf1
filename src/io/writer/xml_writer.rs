//! XML serialization of the output document

use crate::document::{Element, PoolDocument};
use crate::error::Result;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escaped attribute text.
///
/// Line breaks and tabs become character references so parsers keep them.
/// Trailing NUL padding is dropped; any other character XML 1.0 cannot
/// carry becomes U+FFFD.
fn attribute_value(value: &str) -> String {
    let escaped = escape(value.trim_end_matches('\0'));
    let mut text = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\n' => text.push_str("&#10;"),
            '\r' => text.push_str("&#13;"),
            '\t' => text.push_str("&#9;"),
            c if is_xml_char(c) => text.push(c),
            _ => text.push(char::REPLACEMENT_CHARACTER),
        }
    }
    text
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        let value = attribute_value(value);
        start.push_attribute(Attribute::from((key.as_bytes(), value.as_bytes())));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// Write `document` as UTF-8 XML with 2-space indentation
pub fn write_document<W: Write>(document: &PoolDocument, output: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(output, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, document.root())?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::document::{Element, PoolDocument};
    use crate::io::reader::ImportConfiguration;

    #[test]
    fn test_serialized_layout() {
        let mut document = PoolDocument::new(&ImportConfiguration::default());
        let mut mask = Element::new("datamask").with_attribute("name", "main");
        mask.push(
            Element::new("include_object")
                .with_attribute("name", "a<b")
                .with_attribute("pos_x", 0)
                .with_attribute("pos_y", 0),
        );
        document.push_object(mask);
        let xml = document.to_xml_string().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<objectpool dimension=\"200\""));
        assert!(xml.contains("\n  <datamask name=\"main\">"));
        assert!(xml.contains("\n    <include_object name=\"a&lt;b\" pos_x=\"0\" pos_y=\"0\"/>"));
        assert!(xml.trim_end().ends_with("</objectpool>"));
    }

    #[test]
    fn test_attribute_text_stays_well_formed() {
        let mut document = PoolDocument::new(&ImportConfiguration::default());
        document.push_object(
            Element::new("stringvariable")
                .with_attribute("name", "s")
                .with_attribute("value", "a\nb\tc\u{1}d\0\0"),
        );
        let xml = document.to_xml_string().unwrap();

        assert!(xml.contains("value=\"a&#10;b&#9;c\u{FFFD}d\""));
        assert!(!xml.contains('\0'));
        assert!(!xml.contains('\u{1}'));
    }

    #[test]
    fn test_attribute_value_escapes_markup() {
        assert_eq!(super::attribute_value("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(super::attribute_value("x\r\n"), "x&#13;&#10;");
    }
}
