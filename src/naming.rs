//! Object naming and the id to name table
//!
//! Names are assigned once, during the first import phase, and are the only
//! linkage between objects in the output document.

use crate::error::{Location, PoolError, Result};
use crate::types::ObjectId;
use ahash::AHashSet;
use indexmap::IndexMap;

/// Derive a name that `is_used` does not know yet.
///
/// An empty `declared` name uses `kind` as the base. Otherwise any trailing
/// digits are stripped and counting resumes from their value. The suffix is
/// counted as a decimal string, so it has no upper bound.
pub fn create_unique_name(declared: &str, kind: &str, is_used: impl Fn(&str) -> bool) -> String {
    if !declared.is_empty() && !is_used(declared) {
        return declared.to_string();
    }

    let (base, start) = if declared.is_empty() {
        (kind, "0")
    } else {
        let base = declared.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = declared[base.len()..].trim_start_matches('0');
        (base, if digits.is_empty() { "0" } else { digits })
    };

    let mut counter = start.to_string();
    loop {
        let candidate = format!("{base}{counter}");
        if !is_used(&candidate) {
            return candidate;
        }
        counter = increment(&counter);
    }
}

/// `digits` plus one, in decimal
fn increment(digits: &str) -> String {
    let mut next: Vec<char> = digits.chars().collect();
    for digit in next.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return next.into_iter().collect();
        }
    }
    std::iter::once('1').chain(next).collect()
}

/// Id to name mapping, built during naming and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: IndexMap<ObjectId, String>,
    used: AHashSet<String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Assign a unique name to `id` and return it; `location` is where the
    /// object was declared
    pub fn assign(
        &mut self,
        id: ObjectId,
        declared: &str,
        kind: &str,
        location: Location,
    ) -> Result<String> {
        if self.names.contains_key(&id) {
            return Err(PoolError::DuplicateObjectId {
                id: id.value(),
                location,
            });
        }
        let name = create_unique_name(declared, kind, |candidate| self.is_used(candidate));
        self.used.insert(name.clone());
        self.names.insert(id, name.clone());
        Ok(name)
    }

    /// Name of `id`; `None` for NULL and for ids not in the pool
    pub fn resolve(&self, id: ObjectId) -> Option<&str> {
        if id.is_null() {
            return None;
        }
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
