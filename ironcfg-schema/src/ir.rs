//! Intermediate representation for code generation.
//!
//! The [`TypeGraph`] is the deduplicated registry of every type a loader
//! has to be emitted for: primitives, vectors and records, keyed by
//! qualified name and kept in first-discovery order.

use crate::types::{DefId, ElementType, FieldType, Forest, PrimitiveKind};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Category of loader a type requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitKind {
    /// Integer leaf converted from text.
    PrimitiveScalar(PrimitiveKind),
    /// Text leaf.
    PrimitiveString,
    /// Sequence of same-named nodes.
    Vector(ElementType),
    /// Record with one child node per field.
    Record(DefId),
}

/// One registry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    /// Registry key.
    pub qualified_name: String,
    /// Loader category.
    pub kind: EmitKind,
}

/// Deduplicated, insertion-ordered registry of emit-able types.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    entries: IndexMap<String, TypeEntry>,
}

impl TypeGraph {
    /// Builds the registry by a pre-order walk of `forest`.
    ///
    /// For each definition its record entry is registered first, then the
    /// types of its fields in declaration order (a vector's element before
    /// the vector itself), then its nested definitions.
    #[must_use]
    pub fn from_forest(forest: &Forest) -> Self {
        let mut graph = Self::default();
        for &root in forest.roots() {
            graph.visit(forest, root);
        }
        tracing::debug!(entries = graph.len(), "type graph built");
        graph
    }

    fn visit(&mut self, forest: &Forest, id: DefId) {
        let def = forest.get(id);
        self.register_record(forest, id);

        for field in &def.fields {
            match field.ty {
                FieldType::Scalar(kind) => self.register_primitive(kind),
                FieldType::Vector(element) => {
                    self.register_element(forest, element);
                    let key = format!("std::vector<{}>", element_key(forest, element));
                    self.register(key, EmitKind::Vector(element));
                }
                FieldType::Record(target) => self.register_record(forest, target),
            }
        }

        for &child in &def.children {
            self.visit(forest, child);
        }
    }

    fn register_element(&mut self, forest: &Forest, element: ElementType) {
        match element {
            ElementType::Primitive(kind) => self.register_primitive(kind),
            ElementType::Record(id) => self.register_record(forest, id),
        }
    }

    fn register_primitive(&mut self, kind: PrimitiveKind) {
        let emit = match kind {
            PrimitiveKind::String => EmitKind::PrimitiveString,
            numeric => EmitKind::PrimitiveScalar(numeric),
        };
        self.register(kind.schema_name().to_string(), emit);
    }

    fn register_record(&mut self, forest: &Forest, id: DefId) {
        self.register(forest.get(id).qualified_name.clone(), EmitKind::Record(id));
    }

    /// Registers an entry. Returns false if the key was already present, in
    /// which case the first registration is kept.
    pub fn register(&mut self, qualified_name: String, kind: EmitKind) -> bool {
        match self.entries.entry(qualified_name) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let qualified_name = slot.key().clone();
                slot.insert(TypeEntry {
                    qualified_name,
                    kind,
                });
                true
            }
        }
    }

    /// Looks up an entry by qualified name.
    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&TypeEntry> {
        self.entries.get(qualified_name)
    }

    /// Returns true if the key is registered.
    #[must_use]
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.entries.contains_key(qualified_name)
    }

    /// Iterates over the entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry key of a vector element.
#[must_use]
pub fn element_key(forest: &Forest, element: ElementType) -> String {
    match element {
        ElementType::Primitive(kind) => kind.schema_name().to_string(),
        ElementType::Record(id) => forest.get(id).qualified_name.clone(),
    }
}
