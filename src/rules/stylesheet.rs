//! Stylesheet storage and lookup.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::{Error, Result};

/// Property-name to value mapping, scoped to one selector.
///
/// Values are opaque text; re-declaring a property overwrites the prior
/// value. Insertion order carries no meaning.
pub type PropertyTable = HashMap<String, String>;

/// The full parsed result: a mapping from selector name to its properties.
///
/// Selector keys are unique; parsing a second rule with the same selector
/// merges its declarations into the existing table rather than creating a
/// second entry. The stylesheet has no behavior of its own beyond storage and
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// The rules, keyed by selector name.
    pub rules: HashMap<String, PropertyTable>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Parse a stylesheet from source text.
    pub fn from_css(css: &str) -> Result<Self> {
        crate::parser::parse_css(css)
    }

    /// Load and parse a stylesheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_css(&content)
    }

    /// Get the property table under `selector`, creating an empty one when
    /// absent.
    pub fn entry(&mut self, selector: &str) -> &mut PropertyTable {
        self.rules.entry(selector.to_owned()).or_default()
    }

    /// Insert or overwrite a property under `selector`.
    pub fn insert(
        &mut self,
        selector: &str,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entry(selector).insert(property.into(), value.into());
    }

    /// The property table for `selector`, if declared.
    pub fn rule(&self, selector: &str) -> Option<&PropertyTable> {
        self.rules.get(selector)
    }

    /// Look up a single property value.
    pub fn value(&self, selector: &str, property: &str) -> Option<&str> {
        self.rules
            .get(selector)
            .and_then(|table| table.get(property))
            .map(String::as_str)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyTable)> {
        self.rules
            .iter()
            .map(|(selector, table)| (selector.as_str(), table))
    }

    /// Remove all rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

impl fmt::Display for Stylesheet {
    /// Renders every selector followed by its indented `property: value`
    /// lines. Keys are sorted so the output is stable across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut selectors: Vec<_> = self.rules.keys().collect();
        selectors.sort();
        for selector in selectors {
            writeln!(f, "{selector}")?;
            let table = &self.rules[selector];
            let mut properties: Vec<_> = table.keys().collect();
            properties.sort();
            for property in properties {
                writeln!(f, "  {property}: {}", table[property])?;
            }
        }
        Ok(())
    }
}
