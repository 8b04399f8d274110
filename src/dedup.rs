//! Name deduplication
//!
//! Two separate steps, and they are not interchangeable:
//! - [`distinct_names`] drops exact repeats of a raw name (`.btn` used in two rules)
//! - [`assign_unique`] gives different raw names that normalize to the same
//!   identifier their own suffixed identifier (`my.name` and `My-Name`)

use std::collections::HashSet;

/// A constant to emit: identifier plus the original string it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    pub identifier: String,
    pub value: String,
}

/// Ordered identifier -> value table with unique identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantTable {
    entries: Vec<ConstantEntry>,
    used: HashSet<String>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `identifier`, or under the first free `identifier_N` (N >= 1)
    /// if it is taken. Returns the identifier actually used.
    pub fn insert_unique(&mut self, identifier: &str, value: &str) -> &str {
        let mut unique = identifier.to_string();
        let mut index = 1;
        while self.used.contains(&unique) {
            unique = format!("{}_{}", identifier, index);
            index += 1;
        }

        self.used.insert(unique.clone());
        self.entries.push(ConstantEntry {
            identifier: unique,
            value: value.to_string(),
        });

        &self.entries[self.entries.len() - 1].identifier
    }

    pub fn entries(&self) -> &[ConstantEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstantEntry> {
        self.entries.iter()
    }
}

/// Remove exact duplicates, keeping the first occurrence of each name in order.
pub fn distinct_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for name in names {
        let name = name.into();
        if seen.insert(name.clone()) {
            result.push(name);
        }
    }
    result
}

/// Build a table of unique identifiers from `(identifier, value)` candidates.
///
/// Candidates with a blank identifier or a blank value are skipped. A taken
/// identifier gets `_1`, `_2`, ... appended until it is free. Order follows the
/// candidates. Equal values are never merged, only identifiers are compared.
pub fn assign_unique<I, K, V>(candidates: I) -> ConstantTable
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut table = ConstantTable::new();
    for (identifier, value) in candidates {
        let identifier = identifier.as_ref();
        let value = value.as_ref();
        if identifier.trim().is_empty() || value.trim().is_empty() {
            log::debug!("Skipping blank constant candidate ({:?}, {:?})", identifier, value);
            continue;
        }
        table.insert_unique(identifier, value);
    }
    table
}
