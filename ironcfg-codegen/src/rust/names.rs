//! Rust identifiers for schema names.
//!
//! Qualified names map to `A__B`, loaders are named `load_<type>` and
//! `load_vec_<element>`. Schema identifiers that are Rust keywords become
//! raw identifiers.

use crate::error::CodegenError;
use ironcfg_schema::{DefId, ElementType, EmitKind, FieldType, Forest, PrimitiveKind};

/// Strict and reserved keywords of the 2024 edition.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Type-namespace names used by generated code, which a record must not
/// shadow.
const RESERVED_TYPES: &[&str] = &[
    "AsRef", "Iterator", "Option", "Result", "String", "Vec", "i32", "u32", "i64", "u64", "str",
    "std",
];

/// Returns `name` as a Rust identifier, using `r#` for keywords.
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` for names that cannot be
/// identifiers even in raw form.
pub fn ident(name: &str) -> Result<String, CodegenError> {
    if NON_RAW.contains(&name) {
        return Err(CodegenError::invalid_identifier(
            name,
            "reserved word that cannot be a raw identifier",
        ));
    }
    if KEYWORDS.contains(&name) {
        Ok(format!("r#{name}"))
    } else {
        Ok(name.to_string())
    }
}

/// Flattened form of a definition's qualified name (`a::b` → `a__b`).
#[must_use]
pub fn flat_name(forest: &Forest, id: DefId) -> String {
    forest.get(id).qualified_name.replace("::", "__")
}

/// Rust struct name of a record definition.
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` if the name cannot be used as a
/// struct name.
pub fn record_type(forest: &Forest, id: DefId) -> Result<String, CodegenError> {
    let flat = flat_name(forest, id);
    if RESERVED_TYPES.contains(&flat.as_str()) {
        return Err(CodegenError::invalid_identifier(
            flat,
            "shadows a standard type used by generated code",
        ));
    }
    ident(&flat)
}

/// Rust type of a vector element.
///
/// # Errors
/// Propagates [`record_type`] errors.
pub fn element_type(forest: &Forest, element: ElementType) -> Result<String, CodegenError> {
    match element {
        ElementType::Primitive(kind) => Ok(kind.rust_type().to_string()),
        ElementType::Record(id) => record_type(forest, id),
    }
}

/// Rust type of a field.
///
/// # Errors
/// Propagates [`record_type`] errors.
pub fn field_type(forest: &Forest, ty: FieldType) -> Result<String, CodegenError> {
    match ty {
        FieldType::Scalar(kind) => Ok(kind.rust_type().to_string()),
        FieldType::Vector(element) => Ok(format!("Vec<{}>", element_type(forest, element)?)),
        FieldType::Record(id) => record_type(forest, id),
    }
}

fn primitive_suffix(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "string",
        numeric => numeric.schema_name(),
    }
}

fn element_suffix(forest: &Forest, element: ElementType) -> String {
    match element {
        ElementType::Primitive(kind) => primitive_suffix(kind).to_string(),
        ElementType::Record(id) => flat_name(forest, id),
    }
}

/// Name of the loader function for a registry entry.
#[must_use]
pub fn loader(forest: &Forest, kind: EmitKind) -> String {
    match kind {
        EmitKind::PrimitiveScalar(k) => format!("load_{}", primitive_suffix(k)),
        EmitKind::PrimitiveString => format!("load_{}", primitive_suffix(PrimitiveKind::String)),
        EmitKind::Vector(element) => format!("load_vec_{}", element_suffix(forest, element)),
        EmitKind::Record(id) => format!("load_{}", flat_name(forest, id)),
    }
}

/// Name of the loader function for a field's type.
#[must_use]
pub fn field_loader(forest: &Forest, ty: FieldType) -> String {
    let kind = match ty {
        FieldType::Scalar(PrimitiveKind::String) => EmitKind::PrimitiveString,
        FieldType::Scalar(k) => EmitKind::PrimitiveScalar(k),
        FieldType::Vector(element) => EmitKind::Vector(element),
        FieldType::Record(id) => EmitKind::Record(id),
    };
    loader(forest, kind)
}

/// Names of the file and string entry points of a root definition.
#[must_use]
pub fn entry_points(forest: &Forest, id: DefId) -> (String, String) {
    let flat = flat_name(forest, id);
    (
        format!("load_{flat}_from_xml_file"),
        format!("load_{flat}_from_xml_str"),
    )
}
