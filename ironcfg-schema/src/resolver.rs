//! Type-name resolution.
//!
//! A type expression resolves, first match wins, to:
//! 1. a primitive kind (`int`, `s32`, `u32`, `s64`, `u64`, `std::string`)
//! 2. a vector of a primitive or record (`std::vector<T>`, `vector<T>`)
//! 3. a definition found by walking up the scope chain from the lookup
//!    origin: the origin's children, then its parent's children, and so on,
//!    then the root-level definitions.
//!
//! Inner scopes shadow outer ones. Only definitions already added to the
//! forest are visible, so references are resolved against what has been
//! declared so far.

use crate::error::ParseError;
use crate::syntax::TypeExpr;
use crate::types::{DefId, ElementType, FieldType, Forest, PrimitiveKind};

/// Resolves type expressions against a (possibly partial) forest.
pub struct Resolver<'a> {
    forest: &'a Forest,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `forest`.
    #[must_use]
    pub fn new(forest: &'a Forest) -> Self {
        Self { forest }
    }

    /// Resolves a type expression written inside `origin`.
    ///
    /// # Errors
    /// Returns `ParseError::UnresolvedType` naming the token that could not
    /// be resolved.
    pub fn resolve(
        &self,
        origin: DefId,
        expr: &TypeExpr,
        line: usize,
    ) -> Result<FieldType, ParseError> {
        match expr {
            TypeExpr::Named(name) => {
                if let Some(kind) = PrimitiveKind::from_schema_name(name) {
                    return Ok(FieldType::Scalar(kind));
                }
                self.lookup(origin, name)
                    .map(FieldType::Record)
                    .ok_or_else(|| ParseError::unresolved(line, name.as_str()))
            }
            TypeExpr::Generic { base, arg } if is_vector(base) => {
                match self.resolve(origin, arg, line)? {
                    FieldType::Scalar(kind) => Ok(FieldType::Vector(ElementType::Primitive(kind))),
                    FieldType::Record(id) => Ok(FieldType::Vector(ElementType::Record(id))),
                    FieldType::Vector(_) => Err(ParseError::unresolved(line, expr.to_string())),
                }
            }
            TypeExpr::Generic { .. } => Err(ParseError::unresolved(line, expr.to_string())),
        }
    }

    /// Looks up a possibly qualified definition name from `origin`.
    ///
    /// The first path segment is searched along the scope chain; the
    /// remaining segments descend through children.
    #[must_use]
    pub fn lookup(&self, origin: DefId, path: &str) -> Option<DefId> {
        let mut segments = path.split("::");
        let first = segments.next()?;
        let mut found = self.lookup_in_scopes(origin, first)?;
        for segment in segments {
            found = self.forest.find_child(Some(found), segment)?;
        }
        Some(found)
    }

    fn lookup_in_scopes(&self, origin: DefId, name: &str) -> Option<DefId> {
        let mut scope = Some(origin);
        while let Some(current) = scope {
            if let Some(found) = self.forest.find_child(Some(current), name) {
                return Some(found);
            }
            scope = self.forest.get(current).parent;
        }
        self.forest.find_child(None, name)
    }
}

fn is_vector(base: &str) -> bool {
    matches!(base, "std::vector" | "vector")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeExpr {
        TypeExpr::Named(name.to_string())
    }

    fn vector_of(arg: TypeExpr) -> TypeExpr {
        TypeExpr::Generic {
            base: "std::vector".to_string(),
            arg: Box::new(arg),
        }
    }

    #[test]
    fn test_primitives() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let resolver = Resolver::new(&forest);

        assert_eq!(
            resolver.resolve(a, &named("int"), 2).unwrap(),
            FieldType::Scalar(PrimitiveKind::S32)
        );
        assert_eq!(
            resolver.resolve(a, &named("std::string"), 2).unwrap(),
            FieldType::Scalar(PrimitiveKind::String)
        );
        assert_eq!(
            resolver.resolve(a, &vector_of(named("u64")), 2).unwrap(),
            FieldType::Vector(ElementType::Primitive(PrimitiveKind::U64))
        );
    }

    #[test]
    fn test_inner_scope_shadows_root() {
        let mut forest = Forest::new();
        let root_x = forest.add_definition(None, "X", 1);
        let a = forest.add_definition(None, "A", 2);
        let a_x = forest.add_definition(Some(a), "X", 3);
        let resolver = Resolver::new(&forest);

        assert_eq!(resolver.lookup(a, "X"), Some(a_x));
        assert_ne!(resolver.lookup(a, "X"), Some(root_x));
    }

    #[test]
    fn test_enclosing_scope_sibling() {
        let mut forest = Forest::new();
        let log = forest.add_definition(None, "log_config", 1);
        let file = forest.add_definition(Some(log), "file_device", 2);
        let category = forest.add_definition(Some(log), "category", 3);
        let resolver = Resolver::new(&forest);

        assert_eq!(
            resolver.resolve(category, &vector_of(named("file_device")), 4).unwrap(),
            FieldType::Vector(ElementType::Record(file))
        );
    }

    #[test]
    fn test_siblings_of_origin_are_found_through_parent() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let b = forest.add_definition(None, "B", 2);
        let resolver = Resolver::new(&forest);

        assert_eq!(resolver.lookup(b, "A"), Some(a));
    }

    #[test]
    fn test_qualified_reference() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let a_x = forest.add_definition(Some(a), "X", 2);
        let b = forest.add_definition(None, "B", 3);
        let resolver = Resolver::new(&forest);

        assert_eq!(resolver.lookup(b, "X"), None);
        assert_eq!(resolver.lookup(b, "A::X"), Some(a_x));
        assert_eq!(resolver.lookup(b, "A::Y"), None);
    }

    #[test]
    fn test_unresolved_names_token() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let resolver = Resolver::new(&forest);

        match resolver.resolve(a, &vector_of(named("Missing")), 7).unwrap_err() {
            ParseError::UnresolvedType { line, type_name } => {
                assert_eq!(line, 7);
                assert_eq!(type_name, "Missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nested_vector_rejected() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let resolver = Resolver::new(&forest);
        let expr = vector_of(vector_of(named("u32")));

        match resolver.resolve(a, &expr, 1).unwrap_err() {
            ParseError::UnresolvedType { type_name, .. } => {
                assert_eq!(type_name, "std::vector<std::vector<u32>>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_generic_rejected() {
        let mut forest = Forest::new();
        let a = forest.add_definition(None, "A", 1);
        let resolver = Resolver::new(&forest);
        let expr = TypeExpr::Generic {
            base: "std::map".to_string(),
            arg: Box::new(named("u32")),
        };

        assert!(matches!(
            resolver.resolve(a, &expr, 1),
            Err(ParseError::UnresolvedType { .. })
        ));
    }
}
