//! Record struct generation.

use crate::error::CodegenError;
use crate::rust::names;
use ironcfg_schema::{DefId, EmitKind, Forest, TypeGraph};

/// Generator for record struct declarations.
pub struct TypeGenerator<'a> {
    forest: &'a Forest,
    graph: &'a TypeGraph,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(forest: &'a Forest, graph: &'a TypeGraph) -> Self {
        Self { forest, graph }
    }

    /// Generates one struct per record entry, in registry order.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` for names that cannot be
    /// Rust identifiers.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for entry in self.graph.entries() {
            if let EmitKind::Record(id) = entry.kind {
                output.push_str(&self.generate_struct(id)?);
            }
        }

        Ok(output)
    }

    fn generate_struct(&self, id: DefId) -> Result<String, CodegenError> {
        let def = self.forest.get(id);
        let mut output = String::new();

        output.push_str(&format!("/// `{}` configuration record.\n", def.qualified_name));
        output.push_str("#[allow(non_camel_case_types)]\n");
        output.push_str("#[derive(Debug, Clone, Default, PartialEq, Eq)]\n");
        output.push_str(&format!(
            "pub struct {} {{\n",
            names::record_type(self.forest, id)?
        ));
        for field in &def.fields {
            output.push_str(&format!(
                "    pub {}: {},\n",
                names::ident(&field.name)?,
                names::field_type(self.forest, field.ty)?
            ));
        }
        output.push_str("}\n\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcfg_schema::parse_schema;

    #[test]
    fn test_struct_fields_in_declaration_order() {
        let forest = parse_schema(
            "DEF_CONFIG device { std::string type; int buffer_size; std::vector<u64> guid_list; };",
        )
        .expect("Failed to parse schema");
        let graph = TypeGraph::from_forest(&forest);
        let code = TypeGenerator::new(&forest, &graph)
            .generate()
            .expect("Failed to generate");

        assert!(code.contains("pub struct device {\n"));
        let type_pos = code.find("pub r#type: String,").expect("type field");
        let size_pos = code.find("pub buffer_size: i32,").expect("size field");
        let guid_pos = code.find("pub guid_list: Vec<u64>,").expect("guid field");
        assert!(type_pos < size_pos && size_pos < guid_pos);
    }

    #[test]
    fn test_nested_struct_name() {
        let forest = parse_schema("DEF_CONFIG a { DEF_CONFIG b { u32 x; }; b inner; };")
            .expect("Failed to parse schema");
        let graph = TypeGraph::from_forest(&forest);
        let code = TypeGenerator::new(&forest, &graph)
            .generate()
            .expect("Failed to generate");

        assert!(code.contains("pub struct a__b {\n"));
        assert!(code.contains("    pub inner: a__b,\n"));
        assert!(code.find("pub struct a {").unwrap() < code.find("pub struct a__b {").unwrap());
    }

    #[test]
    fn test_empty_record() {
        let forest = parse_schema("DEF_CONFIG empty { };").expect("Failed to parse schema");
        let graph = TypeGraph::from_forest(&forest);
        let code = TypeGenerator::new(&forest, &graph)
            .generate()
            .expect("Failed to generate");

        assert!(code.contains("pub struct empty {\n}\n"));
    }
}
