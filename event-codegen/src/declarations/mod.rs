//! Declaration table and its front-ends
//!
//! The declaration table is the intermediate representation the generator
//! works on. Front-ends (Rust source, TOML manifests) fill it; the scanner,
//! enumerator and emitter only read it.

pub mod manifest;
pub mod rust;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What kind of item a declaration is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Enum,
    Struct,
    Trait,
    Union,
    TypeAlias,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Enum => write!(f, "enum"),
            DeclarationKind::Struct => write!(f, "struct"),
            DeclarationKind::Trait => write!(f, "trait"),
            DeclarationKind::Union => write!(f, "union"),
            DeclarationKind::TypeAlias => write!(f, "type alias"),
        }
    }
}

/// Whether the set of direct members is fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// All direct members are known (a plain enum)
    Closed,
    /// Members may be added elsewhere (`#[non_exhaustive]`, structs, traits)
    Open,
}

/// Where a declaration or member was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Origin {
    /// Source file or manifest name
    pub file: String,
    /// 1-based line number, when the front-end knows it
    pub line: Option<usize>,
}

impl Origin {
    pub fn new(file: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => write!(f, "{}", self.file),
        }
    }
}

/// Fields of a member's constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFields {
    /// No fields (`ButtonTapped`)
    Unit,
    /// Named fields in declaration order (`ShareImage { image_name, full_string }`)
    Named(Vec<String>),
    /// Positional fields only (`Point(i32, i32)`), with their count
    Positional(usize),
}

/// A direct member (variant) of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Member name as written
    pub name: String,
    /// Declared supertype; `None` means the enclosing declaration
    pub parent: Option<String>,
    pub fields: MemberFields,
    pub origin: Origin,
}

/// A type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Simple name (`MyEvent`)
    pub name: String,
    /// Qualified path (`crate::event::MyEvent`)
    pub path: String,
    pub kind: DeclarationKind,
    pub modality: Modality,
    /// Attribute names carried by the declaration (last path segment)
    pub markers: Vec<String>,
    /// True if the declaration has generic parameters
    pub generic: bool,
    /// Direct members in encounter order
    pub members: Vec<Member>,
    pub origin: Origin,
}

impl Declaration {
    /// Check whether the declaration carries a marker attribute
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Check whether the declaration is a closed variant set
    pub fn is_closed_set(&self) -> bool {
        self.kind == DeclarationKind::Enum && self.modality == Modality::Closed
    }
}

/// Ordered collection of declarations from all loaded inputs
///
/// Iteration follows insertion order. A declaration whose qualified path is
/// already present replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct DeclarationTable {
    declarations: Vec<Declaration>,
    /// Qualified path -> index into `declarations`
    by_path: HashMap<String, usize>,
}

impl DeclarationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration to the table
    pub fn add(&mut self, declaration: Declaration) {
        if let Some(&index) = self.by_path.get(&declaration.path) {
            log::warn!(
                "Declaration {} redefined in {}, replacing the one from {}",
                declaration.path,
                declaration.origin,
                self.declarations[index].origin
            );
            self.declarations[index] = declaration;
        } else {
            self.by_path
                .insert(declaration.path.clone(), self.declarations.len());
            self.declarations.push(declaration);
        }
    }

    /// Add every declaration from an iterator
    pub fn extend(&mut self, declarations: impl IntoIterator<Item = Declaration>) {
        for declaration in declarations {
            self.add(declaration);
        }
    }

    /// Look up a declaration by qualified path
    pub fn get(&self, path: &str) -> Option<&Declaration> {
        self.by_path.get(path).map(|&index| &self.declarations[index])
    }

    /// Iterate over declarations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations carrying the given marker, in insertion order
    pub fn marked<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.declarations.iter().filter(move |d| d.has_marker(marker))
    }

    /// Get table statistics
    pub fn stats(&self, marker: &str) -> TableStats {
        TableStats {
            num_declarations: self.declarations.len(),
            num_marked: self.marked(marker).count(),
            num_members: self.declarations.iter().map(|d| d.members.len()).sum(),
        }
    }
}

/// Declaration table statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Total number of declarations
    pub num_declarations: usize,
    /// Declarations carrying the marker
    pub num_marked: usize,
    /// Total number of members across all declarations
    pub num_members: usize,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = DeclarationTable::new();
        let stats = table.stats("analytics_event");
        assert_eq!(stats.num_declarations, 0);
        assert_eq!(stats.num_marked, 0);
        assert_eq!(stats.num_members, 0);
    }

    #[test]
    fn test_add_and_lookup() {
        let mut table = DeclarationTable::new();
        table.add(my_event());

        let mut unmarked = closed_enum("crate::Other", vec![]);
        unmarked.markers.clear();
        table.add(unmarked);

        let stats = table.stats("analytics_event");
        assert_eq!(stats.num_declarations, 2);
        assert_eq!(stats.num_marked, 1);
        assert_eq!(stats.num_members, 2);

        let found = table.get("crate::event::MyEvent").unwrap();
        assert_eq!(found.name, "MyEvent");
        assert!(found.is_closed_set());
        assert!(table.get("crate::Missing").is_none());
    }

    #[test]
    fn test_redefinition_replaces_in_place() {
        let mut table = DeclarationTable::new();
        table.add(closed_enum("crate::A", vec![]));
        table.add(closed_enum("crate::B", vec![]));
        table.add(closed_enum(
            "crate::A",
            vec![member("Only", MemberFields::Unit)],
        ));

        let paths: Vec<_> = table.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["crate::A", "crate::B"]);
        assert_eq!(table.get("crate::A").unwrap().members.len(), 1);
    }
}
