//! File-level entry points for root definitions.

use crate::error::CodegenError;
use crate::rust::names;
use ironcfg_schema::{DefId, EmitKind, Forest};

/// Generator for the `load_<root>_from_xml_file` / `_from_xml_str` pairs.
pub struct EntryGenerator<'a> {
    forest: &'a Forest,
    runtime: &'a str,
}

impl<'a> EntryGenerator<'a> {
    /// Creates a new entry point generator.
    #[must_use]
    pub fn new(forest: &'a Forest, runtime: &'a str) -> Self {
        Self { forest, runtime }
    }

    /// Generates the entry points of every root definition, in declaration
    /// order.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` for names that cannot be
    /// Rust identifiers.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        for &root in self.forest.roots() {
            output.push_str(&self.generate_root(root)?);
        }

        Ok(output)
    }

    fn generate_root(&self, id: DefId) -> Result<String, CodegenError> {
        let rt = self.runtime;
        let def = self.forest.get(id);
        let type_name = names::record_type(self.forest, id)?;
        let loader = names::loader(self.forest, EmitKind::Record(id));
        let (file_fn, str_fn) = names::entry_points(self.forest, id);
        let mut output = String::new();

        // The document element itself carries the root's name.
        output.push_str(&format!(
            "/// Loads a `{}` from the XML file at `path`.\n",
            def.name
        ));
        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&format!(
            "pub fn {file_fn}(\n    path: impl AsRef<std::path::Path>,\n) -> \
             Result<{type_name}, {rt}::LoadError> {{\n"
        ));
        output.push_str(&format!(
            "    let doc = {rt}::XmlDocument::load_file(path)?;\n"
        ));
        output.push_str(&format!(
            "    {loader}(doc.child(\"{}\"), \"{}\")\n",
            def.name, def.name
        ));
        output.push_str("}\n\n");

        output.push_str(&format!(
            "/// Loads a `{}` from an in-memory XML document.\n",
            def.name
        ));
        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&format!(
            "pub fn {str_fn}(xml: &str) -> Result<{type_name}, {rt}::LoadError> {{\n"
        ));
        output.push_str(&format!(
            "    let doc = {rt}::XmlDocument::parse_str(xml)?;\n"
        ));
        output.push_str(&format!(
            "    {loader}(doc.child(\"{}\"), \"{}\")\n",
            def.name, def.name
        ));
        output.push_str("}\n\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcfg_schema::parse_schema;

    #[test]
    fn test_entry_points_per_root() {
        let forest = parse_schema(
            "DEF_CONFIG first { u32 a; };\nDEF_CONFIG second { DEF_CONFIG inner { u32 b; }; };",
        )
        .expect("Failed to parse schema");
        let code = EntryGenerator::new(&forest, "ironcfg_core")
            .generate()
            .expect("Failed to generate");

        assert!(code.contains("pub fn load_first_from_xml_file(\n"));
        assert!(code.contains(
            "pub fn load_first_from_xml_str(xml: &str) -> \
             Result<first, ironcfg_core::LoadError> {\n"
        ));
        assert!(code.contains("pub fn load_second_from_xml_file(\n"));
        assert!(code.contains("    load_second(doc.child(\"second\"), \"second\")\n"));
        assert!(!code.contains("inner_from_xml"));
    }

    #[test]
    fn test_entry_points_read_document() {
        let forest = parse_schema("DEF_CONFIG cfg { };").expect("Failed to parse schema");
        let code = EntryGenerator::new(&forest, "rt")
            .generate()
            .expect("Failed to generate");

        assert!(code.contains("    let doc = rt::XmlDocument::load_file(path)?;\n"));
        assert!(code.contains("    let doc = rt::XmlDocument::parse_str(xml)?;\n"));
    }
}
