//! Splitting textual inputs into records
//!
//! `.sav` files hold a name line and a desc line per object. `.h` files hold
//! one `unsigned char` array literal with the binary pool, plus
//! `#define NAME ID` lines naming the objects.

use crate::error::{Location, PoolError, Result};
use encoding_rs::WINDOWS_1252;
use indexmap::IndexMap;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric1, digit1, hex_digit1, space0, space1};
use nom::combinator::{all_consuming, map_res, recognize};
use nom::multi::many0_count;
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;

/// Decode a text file as UTF-8, falling back to Windows-1252
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// One object of a `.sav` file
#[derive(Debug, Clone, PartialEq)]
pub struct SavRecord {
    /// Declared object name
    pub name: String,
    /// Field tokens, starting at `ID`
    pub desc: String,
    /// Line number of the desc line
    pub line: usize,
}

/// Pair up name and desc lines, ignoring blank lines
pub fn split_sav(text: &str) -> Result<Vec<SavRecord>> {
    let mut records = Vec::new();
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    while let Some((name_line, name)) = lines.next() {
        let (line, desc) = lines.next().ok_or_else(|| PoolError::MalformedToken {
            location: Location::Line(name_line),
            expected: "desc line".to_string(),
            found: "end of file".to_string(),
        })?;
        records.push(SavRecord {
            name: name.to_string(),
            desc: desc.to_string(),
            line,
        });
    }

    Ok(records)
}

/// Parsed C header: the pool bytes and the declared names
#[derive(Debug, Clone, Default)]
pub struct HeaderSource {
    pub bytes: Vec<u8>,
    /// Source line of each byte
    pub lines: Vec<usize>,
    /// Declared names by object id, in file order
    pub names: IndexMap<u16, String>,
}

fn hex_literal(input: &str) -> IResult<&str, u64> {
    map_res(preceded(alt((tag("0x"), tag("0X"))), hex_digit1), |digits: &str| {
        u64::from_str_radix(digits, 16)
    })(input)
}

fn decimal_literal(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |digits: &str| digits.parse::<u64>())(input)
}

/// C integer literal, decimal or `0x` hex
pub fn integer_literal(input: &str) -> IResult<&str, u64> {
    alt((hex_literal, decimal_literal))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// `#define NAME ID`
pub fn define_line(input: &str) -> IResult<&str, (&str, u64)> {
    let (rest, (_, _, _, name, _, value)) = tuple((
        space0,
        tag("#define"),
        space1,
        identifier,
        space1,
        integer_literal,
    ))(input)?;
    Ok((rest, (name, value)))
}

/// Blank out `//` and `/* */` comments, keeping line breaks in place
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = ' ';
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                    }
                    if previous == '*' && c == '/' {
                        break;
                    }
                    previous = c;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

impl HeaderSource {
    pub fn parse(text: &str) -> Result<Self> {
        let text = strip_comments(text);
        let mut source = HeaderSource::default();

        for (i, line) in text.lines().enumerate() {
            if let Ok((_, (name, value))) = define_line(line) {
                let id = u16::try_from(value).map_err(|_| PoolError::ValueOutOfRange {
                    location: Location::Line(i + 1),
                    keyword: "ID",
                    value: value.to_string(),
                })?;
                source.names.entry(id).or_insert_with(|| name.to_string());
            }
        }

        let open = text
            .find('{')
            .ok_or_else(|| PoolError::UnsupportedInput("no array literal in header".to_string()))?;
        let close = text[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| PoolError::MalformedToken {
                location: Location::Line(text[..open].matches('\n').count() + 1),
                expected: "closing brace".to_string(),
                found: "end of file".to_string(),
            })?;

        let mut line = text[..open].matches('\n').count() + 1;
        for (i, segment) in text[open + 1..close].split('\n').enumerate() {
            if i > 0 {
                line += 1;
            }
            for token in segment
                .split(|c: char| matches!(c, ',' | '(' | ')') || c.is_whitespace())
                .filter(|t| !t.is_empty())
            {
                let value = all_consuming(integer_literal)(token)
                    .map(|(_, value)| value)
                    .map_err(|_| PoolError::MalformedToken {
                        location: Location::Line(line),
                        expected: "byte literal".to_string(),
                        found: token.to_string(),
                    })?;
                let byte = u8::try_from(value).map_err(|_| PoolError::ValueOutOfRange {
                    location: Location::Line(line),
                    keyword: "BYTE",
                    value: token.to_string(),
                })?;
                source.bytes.push(byte);
                source.lines.push(line);
            }
        }

        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literals() {
        assert_eq!(integer_literal("0x1F,").unwrap(), (",", 31));
        assert_eq!(integer_literal("255").unwrap(), ("", 255));
        assert!(integer_literal("zz").is_err());
    }

    #[test]
    fn test_define_line() {
        let (_, (name, id)) = define_line("#define Cell2 0x3E8").unwrap();
        assert_eq!(name, "Cell2");
        assert_eq!(id, 1000);
        assert!(define_line("#define FOO bar").is_err());
    }

    #[test]
    fn test_header_parse() {
        let text = "/* pool */\nunsigned char pool[] = {\n  0x00, 0x00, // ws id\n  0, 1\n};\n#define WS 0\n#define Other_1 7\n";
        let source = HeaderSource::parse(text).unwrap();
        assert_eq!(source.bytes, vec![0, 0, 0, 1]);
        assert_eq!(source.lines, vec![3, 3, 4, 4]);
        assert_eq!(source.names.get(&0).map(String::as_str), Some("WS"));
        assert_eq!(source.names.get(&7).map(String::as_str), Some("Other_1"));
    }

    #[test]
    fn test_header_byte_out_of_range() {
        let err = HeaderSource::parse("x = {\n1,\n256 };").unwrap_err();
        match err {
            PoolError::ValueOutOfRange { location, .. } => assert_eq!(location, Location::Line(3)),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_header_without_array() {
        let err = HeaderSource::parse("#define A 1\n").unwrap_err();
        assert!(matches!(err, PoolError::UnsupportedInput(_)));
    }

    #[test]
    fn test_split_sav() {
        let text = "ws\ndesc ID 0 TYPE 0\n\nvar1\ndesc ID 1 TYPE 21 DWORD 0\n";
        let records = split_sav(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "var1");
        assert_eq!(records[1].line, 5);
    }

    #[test]
    fn test_split_sav_missing_desc() {
        assert!(split_sav("lonely\n").is_err());
    }

    #[test]
    fn test_decode_text_fallback() {
        assert_eq!(decode_text(b"caf\xE9"), "caf\u{e9}");
        assert_eq!(decode_text("café".as_bytes()), "café");
    }
}
