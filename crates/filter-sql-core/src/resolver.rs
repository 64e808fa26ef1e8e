//! Column resolution for property references.
//!
//! Mapping a property of the data model to a SQL column is a capability the
//! caller injects. Any `Fn(&PropertyRef) -> Option<String>` closure is a
//! resolver; returning `None` means "unresolvable" and aborts translation.

use std::collections::HashMap;

use crate::ast::PropertyRef;

/// Maps a property reference to the column name emitted in SQL.
///
/// The returned name is emitted verbatim, so any quoting is the resolver's
/// responsibility.
pub trait ColumnResolver {
    /// Resolves `property`, or returns `None` when it has no column.
    fn resolve(&self, property: &PropertyRef) -> Option<String>;
}

impl<F> ColumnResolver for F
where
    F: Fn(&PropertyRef) -> Option<String>,
{
    fn resolve(&self, property: &PropertyRef) -> Option<String> {
        self(property)
    }
}

/// The resolver used when the caller supplies none.
///
/// Plain identifiers map to themselves (`entity.name` when qualified);
/// anything that would need quoting is unresolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultColumnResolver;

impl DefaultColumnResolver {
    /// Creates the default resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl ColumnResolver for DefaultColumnResolver {
    fn resolve(&self, property: &PropertyRef) -> Option<String> {
        if !is_plain_identifier(&property.name) {
            return None;
        }
        match &property.entity {
            Some(entity) if is_plain_identifier(entity) => {
                Some(format!("{entity}.{}", property.name))
            }
            Some(_) => None,
            None => Some(property.name.clone()),
        }
    }
}

/// An explicit property-to-column map.
///
/// Keys are the property's display form: `Name`, or `Entity/Name` for
/// qualified references. Unknown properties are unresolved.
#[derive(Debug, Default, Clone)]
pub struct ColumnMap {
    columns: HashMap<String, String>,
}

impl ColumnMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `property` to `column`, replacing any previous mapping.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(property, column);
        self
    }

    /// Maps `property` to `column`, replacing any previous mapping.
    pub fn insert(&mut self, property: impl Into<String>, column: impl Into<String>) {
        self.columns.insert(property.into(), column.into());
    }

    /// Returns the number of mapped properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no property is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (property, column) in iter {
            map.insert(property, column);
        }
        map
    }
}

impl ColumnResolver for ColumnMap {
    fn resolve(&self, property: &PropertyRef) -> Option<String> {
        self.columns.get(&property.to_string()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolver_plain_names() {
        let resolver = DefaultColumnResolver::new();
        assert_eq!(
            resolver.resolve(&PropertyRef::new("UnitPrice")),
            Some(String::from("UnitPrice"))
        );
        assert_eq!(
            resolver.resolve(&PropertyRef::qualified("o", "Total")),
            Some(String::from("o.Total"))
        );
    }

    #[test]
    fn test_default_resolver_rejects_non_identifiers() {
        let resolver = DefaultColumnResolver::new();
        assert_eq!(resolver.resolve(&PropertyRef::new("")), None);
        assert_eq!(resolver.resolve(&PropertyRef::new("1st")), None);
        assert_eq!(resolver.resolve(&PropertyRef::new("Name; DROP")), None);
        assert_eq!(
            resolver.resolve(&PropertyRef::qualified("Order Lines", "Qty")),
            None
        );
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |p: &PropertyRef| Some(format!("[{}]", p.name));
        assert_eq!(
            resolver.resolve(&PropertyRef::new("Name")),
            Some(String::from("[Name]"))
        );
    }

    #[test]
    fn test_column_map() {
        let map: ColumnMap = [("Name", "c.full_name"), ("Order/Total", "o.total")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.resolve(&PropertyRef::new("Name")),
            Some(String::from("c.full_name"))
        );
        assert_eq!(
            map.resolve(&PropertyRef::qualified("Order", "Total")),
            Some(String::from("o.total"))
        );
        assert_eq!(map.resolve(&PropertyRef::new("Total")), None);
    }
}
