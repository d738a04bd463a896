//! Schema type definitions.
//!
//! Definitions are stored in a [`Forest`] arena and addressed by [`DefId`].
//! Parent and child links are indices into the arena, so the tree has no
//! ownership cycles.

use std::fmt;

/// Handle of a definition inside a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(usize);

impl DefId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Signed 32-bit integer (`s32`, `int`).
    S32,
    /// Unsigned 32-bit integer (`u32`).
    U32,
    /// Signed 64-bit integer (`s64`).
    S64,
    /// Unsigned 64-bit integer (`u64`).
    U64,
    /// Text (`std::string`).
    String,
}

impl PrimitiveKind {
    /// Parses a primitive kind from its schema spelling.
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "int" | "s32" => Some(Self::S32),
            "u32" => Some(Self::U32),
            "s64" => Some(Self::S64),
            "u64" => Some(Self::U64),
            "std::string" | "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns the canonical schema name, used as the registry key.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::S32 => "s32",
            Self::U32 => "u32",
            Self::S64 => "s64",
            Self::U64 => "u64",
            Self::String => "std::string",
        }
    }

    /// Returns the Rust type name for this kind.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::S32 => "i32",
            Self::U32 => "u32",
            Self::S64 => "i64",
            Self::U64 => "u64",
            Self::String => "String",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

/// Element type of a vector field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Vector of primitives.
    Primitive(PrimitiveKind),
    /// Vector of records.
    Record(DefId),
}

/// Resolved type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Integer or string leaf.
    Scalar(PrimitiveKind),
    /// Sequence of same-named child nodes.
    Vector(ElementType),
    /// Nested record.
    Record(DefId),
}

impl FieldType {
    /// Returns true if the field is loaded from all same-named children.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }
}

/// A declared member of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, also the child node name in documents.
    pub name: String,
    /// Resolved type.
    pub ty: FieldType,
    /// Declaration line.
    pub line: usize,
}

/// A named record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Local name.
    pub name: String,
    /// Name prefixed by all enclosing definitions, joined with `::`.
    pub qualified_name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Directly nested definitions in declaration order.
    pub children: Vec<DefId>,
    /// Enclosing definition.
    pub parent: Option<DefId>,
    /// Line of the opening statement.
    pub line: usize,
}

impl Definition {
    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if this is a root-level definition.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena owning every definition of a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    defs: Vec<Definition>,
    roots: Vec<DefId>,
}

impl Forest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition under `parent` (or at root level) and returns its handle.
    pub fn add_definition(
        &mut self,
        parent: Option<DefId>,
        name: impl Into<String>,
        line: usize,
    ) -> DefId {
        let name = name.into();
        let qualified_name = match parent {
            Some(p) => format!("{}::{}", self.get(p).qualified_name, name),
            None => name.clone(),
        };
        let id = DefId(self.defs.len());
        self.defs.push(Definition {
            name,
            qualified_name,
            fields: Vec::new(),
            children: Vec::new(),
            parent,
            line,
        });
        match parent {
            Some(p) => self.defs[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Appends a field to a definition.
    pub fn add_field(&mut self, def: DefId, field: Field) {
        self.defs[def.0].fields.push(field);
    }

    /// Returns the definition for a handle.
    ///
    /// Handles are only created by this forest, so lookups cannot miss.
    #[must_use]
    pub fn get(&self, id: DefId) -> &Definition {
        &self.defs[id.0]
    }

    /// Returns the root-level definitions in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[DefId] {
        &self.roots
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns true if the forest holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterates over all definitions in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (DefId, &Definition)> {
        self.defs.iter().enumerate().map(|(i, d)| (DefId(i), d))
    }

    /// Finds a direct child of `scope` by local name; `None` searches the roots.
    #[must_use]
    pub fn find_child(&self, scope: Option<DefId>, name: &str) -> Option<DefId> {
        let candidates = match scope {
            Some(id) => &self.get(id).children,
            None => &self.roots,
        };
        candidates
            .iter()
            .copied()
            .find(|&c| self.get(c).name == name)
    }

    /// Finds a definition by qualified name.
    #[must_use]
    pub fn find_qualified(&self, qualified_name: &str) -> Option<DefId> {
        self.iter()
            .find(|(_, d)| d.qualified_name == qualified_name)
            .map(|(id, _)| id)
    }

    /// Describes a field type for diagnostics and dumps.
    #[must_use]
    pub fn describe(&self, ty: FieldType) -> String {
        match ty {
            FieldType::Scalar(kind) => kind.schema_name().to_string(),
            FieldType::Vector(ElementType::Primitive(kind)) => {
                format!("std::vector<{}>", kind.schema_name())
            }
            FieldType::Vector(ElementType::Record(id)) => {
                format!("std::vector<{}>", self.get(id).qualified_name)
            }
            FieldType::Record(id) => self.get(id).qualified_name.clone(),
        }
    }

    fn write_definition(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: DefId,
        indent: usize,
    ) -> fmt::Result {
        let def = self.get(id);
        let pad = " ".repeat(indent);
        writeln!(f, "{pad}DEFINITION: {}", def.qualified_name)?;
        writeln!(f, "{pad}fields:")?;
        for field in &def.fields {
            writeln!(f, "{pad}    {}: {}", field.name, self.describe(field.ty))?;
        }
        for &child in &def.children {
            self.write_definition(f, child, indent + 4)?;
        }
        Ok(())
    }
}

impl fmt::Display for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &root in &self.roots {
            self.write_definition(f, root, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_kind_names() {
        assert_eq!(PrimitiveKind::from_schema_name("int"), Some(PrimitiveKind::S32));
        assert_eq!(PrimitiveKind::from_schema_name("s32"), Some(PrimitiveKind::S32));
        assert_eq!(
            PrimitiveKind::from_schema_name("std::string"),
            Some(PrimitiveKind::String)
        );
        assert_eq!(PrimitiveKind::from_schema_name("u16"), None);
        assert_eq!(PrimitiveKind::U64.rust_type(), "u64");
    }

    #[test]
    fn test_qualified_names() {
        let mut forest = Forest::new();
        let outer = forest.add_definition(None, "category", 1);
        let inner = forest.add_definition(Some(outer), "device", 2);
        let leaf = forest.add_definition(Some(inner), "port", 3);

        assert_eq!(forest.get(outer).qualified_name, "category");
        assert_eq!(forest.get(inner).qualified_name, "category::device");
        assert_eq!(forest.get(leaf).qualified_name, "category::device::port");
        assert_eq!(forest.roots(), &[outer]);
        assert_eq!(forest.get(outer).children, vec![inner]);
        assert_eq!(forest.get(inner).parent, Some(outer));
        assert_eq!(forest.find_qualified("category::device"), Some(inner));
    }

    #[test]
    fn test_find_child_scopes() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let ax = forest.add_definition(Some(a), "X", 2);
        let x = forest.add_definition(None, "X", 3);

        assert_eq!(forest.find_child(Some(a), "X"), Some(ax));
        assert_eq!(forest.find_child(None, "X"), Some(x));
        assert_eq!(forest.find_child(Some(ax), "X"), None);
    }

    #[test]
    fn test_display_dump() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        forest.add_field(
            a,
            Field {
                name: "ids".to_string(),
                ty: FieldType::Vector(ElementType::Primitive(PrimitiveKind::U64)),
                line: 2,
            },
        );
        forest.add_definition(Some(a), "B", 3);

        let dump = forest.to_string();
        assert!(dump.contains("DEFINITION: A\n"));
        assert!(dump.contains("    ids: std::vector<u64>\n"));
        assert!(dump.contains("    DEFINITION: A::B\n"));
    }
}
