//! Loader function generation.
//!
//! One loader is emitted per registry entry, from one of four templates:
//! integer scalar, string, vector and record. Every loader takes the input
//! node (or same-named nodes, for vectors) plus the node name used in
//! diagnostics, and returns the typed value.

use crate::error::CodegenError;
use crate::rust::names;
use ironcfg_schema::{DefId, ElementType, EmitKind, Forest, PrimitiveKind, TypeEntry, TypeGraph};

/// Generator for loader functions.
pub struct LoaderGenerator<'a> {
    forest: &'a Forest,
    graph: &'a TypeGraph,
    runtime: &'a str,
}

impl<'a> LoaderGenerator<'a> {
    /// Creates a new loader generator. `runtime` is the path of the runtime
    /// crate in the generated code (e.g. `ironcfg_core`).
    #[must_use]
    pub fn new(forest: &'a Forest, graph: &'a TypeGraph, runtime: &'a str) -> Self {
        Self {
            forest,
            graph,
            runtime,
        }
    }

    /// Generates all loaders, in registry order.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` for names that cannot be
    /// Rust identifiers.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for entry in self.graph.entries() {
            output.push_str(&self.generate_loader(entry)?);
        }

        Ok(output)
    }

    /// Generates the loader for a single entry.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` for names that cannot be
    /// Rust identifiers.
    pub fn generate_loader(&self, entry: &TypeEntry) -> Result<String, CodegenError> {
        match entry.kind {
            EmitKind::PrimitiveScalar(kind) => Ok(self.generate_scalar(kind)),
            EmitKind::PrimitiveString => Ok(self.generate_string()),
            EmitKind::Vector(element) => self.generate_vector(element),
            EmitKind::Record(id) => self.generate_record(id),
        }
    }

    fn node_guard(&self) -> String {
        format!(
            "    let node = node.ok_or_else(|| {}::LoadError::node_not_found(node_name))?;\n",
            self.runtime
        )
    }

    fn node_signature(&self, name: &str, value_type: &str) -> String {
        let rt = self.runtime;
        format!(
            "pub fn {name}(\n    node: Option<&{rt}::XmlNode>,\n    node_name: &str,\n) -> \
             Result<{value_type}, {rt}::LoadError> {{\n"
        )
    }

    fn generate_scalar(&self, kind: PrimitiveKind) -> String {
        let rt = self.runtime;
        let name = names::loader(self.forest, EmitKind::PrimitiveScalar(kind));
        let mut output = String::new();

        output.push_str(&format!(
            "/// Loads a `{}` from the text of `node`.\n",
            kind.schema_name()
        ));
        output.push_str(&self.node_signature(&name, kind.rust_type()));
        output.push_str(&self.node_guard());
        output.push_str(&format!(
            "    {rt}::convert::string_to_{}(node.text())\n",
            kind.schema_name()
        ));
        output.push_str(&format!(
            "        .map_err(|e| {rt}::LoadError::conversion(node_name, e))\n"
        ));
        output.push_str("}\n\n");

        output
    }

    fn generate_string(&self) -> String {
        let name = names::loader(self.forest, EmitKind::PrimitiveString);
        let mut output = String::new();

        output.push_str("/// Loads the text of `node` verbatim.\n");
        output.push_str(&self.node_signature(&name, "String"));
        output.push_str(&self.node_guard());
        output.push_str("    Ok(node.text().to_string())\n");
        output.push_str("}\n\n");

        output
    }

    fn generate_vector(&self, element: ElementType) -> Result<String, CodegenError> {
        let rt = self.runtime;
        let name = names::loader(self.forest, EmitKind::Vector(element));
        let element_loader = match element {
            ElementType::Primitive(PrimitiveKind::String) => {
                names::loader(self.forest, EmitKind::PrimitiveString)
            }
            ElementType::Primitive(kind) => {
                names::loader(self.forest, EmitKind::PrimitiveScalar(kind))
            }
            ElementType::Record(id) => names::loader(self.forest, EmitKind::Record(id)),
        };
        let element_type = names::element_type(self.forest, element)?;
        let mut output = String::new();

        output.push_str(
            "/// Loads every node of `nodes` in document order; at least one is required.\n",
        );
        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&format!(
            "pub fn {name}<'a>(\n    nodes: impl Iterator<Item = &'a {rt}::XmlNode>,\n    \
             node_name: &str,\n) -> Result<Vec<{element_type}>, {rt}::LoadError> {{\n"
        ));
        output.push_str("    let mut value = Vec::new();\n");
        output.push_str("    for node in nodes {\n");
        output.push_str(&format!(
            "        value.push({element_loader}(Some(node), node_name)?);\n"
        ));
        output.push_str("    }\n");
        output.push_str("    if value.is_empty() {\n");
        output.push_str(&format!(
            "        return Err({rt}::LoadError::node_not_found(node_name));\n"
        ));
        output.push_str("    }\n");
        output.push_str("    Ok(value)\n");
        output.push_str("}\n\n");

        Ok(output)
    }

    fn generate_record(&self, id: DefId) -> Result<String, CodegenError> {
        let rt = self.runtime;
        let def = self.forest.get(id);
        let name = names::loader(self.forest, EmitKind::Record(id));
        let type_name = names::record_type(self.forest, id)?;
        let mut output = String::new();

        output.push_str(&format!(
            "/// Loads a `{}` record from `node`, checking fields in declaration order.\n",
            def.qualified_name
        ));
        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&self.node_signature(&name, &type_name));

        if def.fields.is_empty() {
            output.push_str(&format!(
                "    node.ok_or_else(|| {rt}::LoadError::node_not_found(node_name))?;\n"
            ));
            output.push_str(&format!("    Ok({type_name} {{}})\n"));
            output.push_str("}\n\n");
            return Ok(output);
        }

        output.push_str(&self.node_guard());
        output.push_str(&format!("    Ok({type_name} {{\n"));
        for field in &def.fields {
            let lookup = if field.ty.is_vector() {
                "children"
            } else {
                "child"
            };
            output.push_str(&format!(
                "        {}: {}(node.{lookup}(\"{}\"), \"{}\")?,\n",
                names::ident(&field.name)?,
                names::field_loader(self.forest, field.ty),
                field.name,
                field.name
            ));
        }
        output.push_str("    })\n");
        output.push_str("}\n\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcfg_schema::parse_schema;

    fn generate(schema: &str) -> String {
        let forest = parse_schema(schema).expect("Failed to parse schema");
        let graph = TypeGraph::from_forest(&forest);
        LoaderGenerator::new(&forest, &graph, "ironcfg_core")
            .generate()
            .expect("Failed to generate")
    }

    #[test]
    fn test_scalar_loader() {
        let code = generate("DEF_CONFIG a { u32 port; };");

        assert!(code.contains("pub fn load_u32(\n"));
        assert!(code.contains(") -> Result<u32, ironcfg_core::LoadError> {\n"));
        assert!(code.contains("ironcfg_core::convert::string_to_u32(node.text())"));
        assert!(code.contains("ironcfg_core::LoadError::conversion(node_name, e)"));
    }

    #[test]
    fn test_string_loader() {
        let code = generate("DEF_CONFIG a { std::string name; };");

        assert!(code.contains("pub fn load_string(\n"));
        assert!(code.contains("    Ok(node.text().to_string())\n"));
    }

    #[test]
    fn test_vector_loader_requires_one_node() {
        let code = generate("DEF_CONFIG a { std::vector<s64> ids; };");

        assert!(code.contains("pub fn load_vec_s64<'a>(\n"));
        assert!(code.contains(") -> Result<Vec<i64>, ironcfg_core::LoadError> {\n"));
        assert!(code.contains("        value.push(load_s64(Some(node), node_name)?);"));
        assert!(code.contains("    if value.is_empty() {\n"));
    }

    #[test]
    fn test_record_loader_lookups() {
        let code = generate(
            "DEF_CONFIG Inner { s32 value; };\n\
             DEF_CONFIG Outer { std::string name; std::vector<Inner> items; };",
        );

        assert!(code.contains("        name: load_string(node.child(\"name\"), \"name\")?,\n"));
        assert!(code.contains(
            "        items: load_vec_Inner(node.children(\"items\"), \"items\")?,\n"
        ));
        assert!(code.contains("        value: load_s32(node.child(\"value\"), \"value\")?,\n"));
    }

    #[test]
    fn test_keyword_field_uses_raw_identifier() {
        let code = generate("DEF_CONFIG device { std::string type; };");
        assert!(code.contains("        r#type: load_string(node.child(\"type\"), \"type\")?,"));
    }

    #[test]
    fn test_empty_record_loader() {
        let code = generate("DEF_CONFIG empty { };");
        assert!(code.contains("    Ok(empty {})\n"));
        assert!(!code.contains("let node ="));
    }

    #[test]
    fn test_custom_runtime_path() {
        let forest = parse_schema("DEF_CONFIG a { u64 n; };").expect("Failed to parse schema");
        let graph = TypeGraph::from_forest(&forest);
        let code = LoaderGenerator::new(&forest, &graph, "crate::rt")
            .generate()
            .expect("Failed to generate");

        assert!(code.contains("crate::rt::convert::string_to_u64"));
        assert!(!code.contains("ironcfg_core"));
    }
}
