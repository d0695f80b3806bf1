//! Keyword-tagged textual pool reader (`.sav` desc lines)

use super::byte_reader::ByteReader;
use crate::error::{Location, PoolError, Result};
use crate::types::{Color, ObjectId};

/// A token of a desc line
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Came from a `"..."` literal
    pub quoted: bool,
    pub line: usize,
}

/// Split a line on whitespace, `,`, `(` and `)`; quoted strings are single tokens.
pub fn tokenize(text: &str, line: usize) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || matches!(c, ',' | '(' | ')') {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let mut value = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next() {
                        Some(escaped @ ('"' | '\\')) => value.push(escaped),
                        Some('n') => value.push('\n'),
                        Some('r') => value.push('\r'),
                        Some('t') => value.push('\t'),
                        Some('x') => {
                            let hex: String = chars.by_ref().take(2).collect();
                            let code = match u8::from_str_radix(&hex, 16) {
                                Ok(code) if hex.len() == 2 && !hex.starts_with('+') => code,
                                _ => {
                                    return Err(PoolError::MalformedToken {
                                        location: Location::Line(line),
                                        expected: "two hex digits after \\x".to_string(),
                                        found: hex,
                                    })
                                }
                            };
                            value.push(char::from(code));
                        }
                        Some(other) => {
                            value.push('\\');
                            value.push(other);
                        }
                        None => value.push('\\'),
                    },
                    other => value.push(other),
                }
            }
            if !closed {
                return Err(PoolError::MalformedToken {
                    location: Location::Line(line),
                    expected: "closing quote".to_string(),
                    found: format!("\"{value}"),
                });
            }
            tokens.push(Token {
                text: value,
                quoted: true,
                line,
            });
            continue;
        }

        let mut word = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || matches!(c, ',' | '(' | ')' | '"') {
                break;
            }
            word.push(c);
            chars.next();
        }
        tokens.push(Token {
            text: word,
            quoted: false,
            line,
        });
    }

    Ok(tokens)
}

/// Textual stream reader over the tokens of one record
pub struct TextReader {
    tokens: Vec<Token>,
    position: usize,
    consumed: u64,
    line: usize,
}

impl TextReader {
    pub fn new(tokens: Vec<Token>, line: usize) -> Self {
        Self {
            tokens,
            position: 0,
            consumed: 0,
            line,
        }
    }

    /// Reader over a desc line; a leading bare `desc` word is skipped
    pub fn from_line(text: &str, line: usize) -> Result<Self> {
        let mut tokens = tokenize(text, line)?;
        if tokens
            .first()
            .is_some_and(|t| !t.quoted && t.text.eq_ignore_ascii_case("desc"))
        {
            tokens.remove(0);
        }
        Ok(Self::new(tokens, line))
    }

    /// Fail if tokens are left after a complete record
    pub fn finish(&self) -> Result<()> {
        match self.tokens.get(self.position) {
            Some(token) => Err(PoolError::MalformedToken {
                location: Location::Line(token.line),
                expected: "end of record".to_string(),
                found: token.text.clone(),
            }),
            None => Ok(()),
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<Token> {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                Ok(token.clone())
            }
            None => Err(PoolError::MalformedToken {
                location: Location::Line(self.line),
                expected: expected.to_string(),
                found: "end of line".to_string(),
            }),
        }
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<()> {
        let token = self.next_token(keyword)?;
        if token.quoted || token.text != keyword {
            return Err(PoolError::MalformedToken {
                location: Location::Line(token.line),
                expected: keyword.to_string(),
                found: token.text,
            });
        }
        Ok(())
    }

    /// A bare decimal value checked against `max`
    fn read_value(&mut self, keyword: &'static str, max: u64) -> Result<u64> {
        let token = self.next_token("decimal value")?;
        let malformed = || PoolError::MalformedToken {
            location: Location::Line(token.line),
            expected: format!("{keyword} value"),
            found: token.text.clone(),
        };
        if token.quoted {
            return Err(malformed());
        }
        let out_of_range = || PoolError::ValueOutOfRange {
            location: Location::Line(token.line),
            keyword,
            value: token.text.clone(),
        };
        match token.text.parse::<u64>() {
            Ok(value) if value <= max => Ok(value),
            Ok(_) => Err(out_of_range()),
            Err(_) => match token.text.parse::<i128>() {
                Ok(_) => Err(out_of_range()),
                Err(_) => Err(malformed()),
            },
        }
    }

    fn read_tagged(&mut self, keyword: &'static str, max: u64, width: u64) -> Result<u64> {
        self.expect_keyword(keyword)?;
        let value = self.read_value(keyword, max)?;
        self.consumed += width;
        Ok(value)
    }
}

impl ByteReader for TextReader {
    fn offset(&self) -> u64 {
        self.consumed
    }

    fn location(&self) -> Location {
        let line = self
            .tokens
            .get(self.position)
            .map_or(self.line, |token| token.line);
        Location::Line(line)
    }

    fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.position >= self.tokens.len())
    }

    fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_tagged("BYTE", u8::MAX as u64, 1)? as u8)
    }

    fn read_word(&mut self) -> Result<u16> {
        Ok(self.read_tagged("WORD", u16::MAX as u64, 2)? as u16)
    }

    fn read_dword(&mut self) -> Result<u32> {
        Ok(self.read_tagged("DWORD", u32::MAX as u64, 4)? as u32)
    }

    fn read_float(&mut self) -> Result<f32> {
        self.expect_keyword("FLOAT")?;
        let token = self.next_token("FLOAT value")?;
        let value = token
            .text
            .parse::<f32>()
            .map_err(|_| PoolError::MalformedToken {
                location: Location::Line(token.line),
                expected: "FLOAT value".to_string(),
                found: token.text.clone(),
            })?;
        self.consumed += 4;
        Ok(value)
    }

    fn read_color(&mut self) -> Result<Color> {
        Ok(Color(self.read_tagged("COLOR", u8::MAX as u64, 1)? as u8))
    }

    fn read_type(&mut self) -> Result<u8> {
        Ok(self.read_tagged("TYPE", u8::MAX as u64, 1)? as u8)
    }

    fn read_key_code(&mut self) -> Result<u8> {
        Ok(self.read_tagged("KEYCODE", u8::MAX as u64, 1)? as u8)
    }

    fn read_ref(&mut self) -> Result<ObjectId> {
        Ok(ObjectId::new(self.read_tagged("REF", u16::MAX as u64, 2)? as u16))
    }

    fn read_id(&mut self) -> Result<ObjectId> {
        Ok(ObjectId::new(self.read_tagged("ID", u16::MAX as u64, 2)? as u16))
    }

    /// Quoted string, padded with spaces to the allocated length
    fn read_string(&mut self, len: usize) -> Result<String> {
        self.expect_keyword("STRING")?;
        let token = self.next_token("quoted string")?;
        if !token.quoted {
            return Err(PoolError::MalformedToken {
                location: Location::Line(token.line),
                expected: "quoted string".to_string(),
                found: token.text,
            });
        }
        let count = token.text.chars().count();
        if count > len {
            return Err(PoolError::ValueOutOfRange {
                location: Location::Line(token.line),
                keyword: "STRING",
                value: token.text,
            });
        }
        let mut value = token.text;
        value.extend(std::iter::repeat(' ').take(len - count));
        self.consumed += len as u64;
        Ok(value)
    }

    fn read_byte_array(&mut self, len: usize) -> Result<Vec<u8>> {
        self.expect_keyword("BYTEARRAY")?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(self.read_value("BYTEARRAY", u8::MAX as u64)? as u8);
        }
        self.consumed += len as u64;
        Ok(data)
    }
}
