//! Main code generator.

use crate::error::CodegenError;
use crate::rust::{EntryGenerator, LoaderGenerator, TypeGenerator, names};
use ironcfg_schema::{EmitKind, Forest, TypeGraph};
use std::collections::HashMap;

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "ironcfg_core";

/// Options controlling the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Path under which generated code reaches the runtime crate.
    pub runtime_path: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Sets the runtime crate path.
    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }
}

/// Main code generator for configuration loaders.
pub struct Generator<'a> {
    forest: &'a Forest,
    graph: &'a TypeGraph,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with default options.
    #[must_use]
    pub fn new(forest: &'a Forest, graph: &'a TypeGraph) -> Self {
        Self::with_options(forest, graph, GeneratorOptions::default())
    }

    /// Creates a new generator with explicit options.
    #[must_use]
    pub fn with_options(
        forest: &'a Forest,
        graph: &'a TypeGraph,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            forest,
            graph,
            options,
        }
    }

    /// Returns the generator options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates the complete Rust source.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if two entries map to the same
    /// Rust name, or `CodegenError::InvalidIdentifier` for names that cannot
    /// be Rust identifiers.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.check_names()?;

        let runtime = self.options.runtime_path.as_str();
        let mut output = String::new();

        output.push_str("// Generated by ironcfg-codegen, DO NOT EDIT.\n");
        output.push_str(&format!(
            "// Runtime support is reached through `{runtime}`.\n\n"
        ));

        output.push_str("// Record types\n\n");
        output.push_str(&TypeGenerator::new(self.forest, self.graph).generate()?);

        output.push_str("// Loaders\n\n");
        output.push_str(&LoaderGenerator::new(self.forest, self.graph, runtime).generate()?);

        output.push_str("// Entry points\n\n");
        output.push_str(&EntryGenerator::new(self.forest, runtime).generate()?);

        tracing::info!(
            entries = self.graph.len(),
            roots = self.forest.roots().len(),
            bytes = output.len(),
            "generated loaders"
        );

        Ok(output)
    }

    /// Checks that no two distinct entries share a generated name.
    ///
    /// Struct names and function names are checked separately since they
    /// live in different namespaces.
    fn check_names(&self) -> Result<(), CodegenError> {
        let mut types: HashMap<String, String> = HashMap::new();
        let mut functions: HashMap<String, String> = HashMap::new();

        for entry in self.graph.entries() {
            if let EmitKind::Record(id) = entry.kind {
                claim(
                    &mut types,
                    names::record_type(self.forest, id)?,
                    &entry.qualified_name,
                )?;
            }
            claim(
                &mut functions,
                names::loader(self.forest, entry.kind),
                &entry.qualified_name,
            )?;
        }

        for &root in self.forest.roots() {
            let owner = &self.forest.get(root).qualified_name;
            let (file_fn, str_fn) = names::entry_points(self.forest, root);
            claim(&mut functions, file_fn, owner)?;
            claim(&mut functions, str_fn, owner)?;
        }

        Ok(())
    }
}

fn claim(
    taken: &mut HashMap<String, String>,
    ident: String,
    owner: &str,
) -> Result<(), CodegenError> {
    if let Some(first) = taken.get(&ident) {
        tracing::debug!(ident = %ident, first = %first, second = owner, "name collision");
        return Err(CodegenError::NameCollision {
            ident,
            first: first.clone(),
            second: owner.to_string(),
        });
    }
    taken.insert(ident, owner.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironcfg_schema::parse_schema;

    fn generate(schema: &str) -> Result<String, CodegenError> {
        let forest = parse_schema(schema)?;
        let graph = TypeGraph::from_forest(&forest);
        Generator::new(&forest, &graph).generate()
    }

    #[test]
    fn test_generate_layout() {
        let code = generate(
            "DEF_CONFIG Inner { s32 value; };\n\
             DEF_CONFIG Outer { std::string name; std::vector<Inner> items; };",
        )
        .expect("Failed to generate");

        assert!(code.starts_with("// Generated by ironcfg-codegen, DO NOT EDIT.\n"));

        let structs = code.find("// Record types").expect("structs");
        let loaders = code.find("// Loaders").expect("loaders");
        let entries = code.find("// Entry points").expect("entries");
        assert!(structs < loaders && loaders < entries);

        // Loaders follow registry order.
        let order = [
            "pub fn load_Inner(",
            "pub fn load_s32(",
            "pub fn load_Outer(",
            "pub fn load_string(",
            "pub fn load_vec_Inner<'a>(",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|f| code.find(f).expect("loader present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_one_loader_per_distinct_type() {
        let code =
            generate("DEF_CONFIG a { int x; s32 y; u32 z; u32 w; };").expect("Failed to generate");
        assert_eq!(code.matches("pub fn load_s32(").count(), 1);
        assert_eq!(code.matches("pub fn load_u32(").count(), 1);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let schema = "DEF_CONFIG c { DEF_CONFIG d { u64 id; }; std::vector<d> ds; d main; };";
        assert_eq!(
            generate(schema).expect("first"),
            generate(schema).expect("second")
        );
    }

    #[test]
    fn test_runtime_path_option() {
        let forest = parse_schema("DEF_CONFIG a { u32 x; };").expect("Failed to parse schema");
        let graph = TypeGraph::from_forest(&forest);
        let options = GeneratorOptions::default().with_runtime_path("::my_runtime");
        let generator = Generator::with_options(&forest, &graph, options);

        assert_eq!(generator.options().runtime_path, "::my_runtime");
        let code = generator.generate().expect("Failed to generate");
        assert!(code.contains("::my_runtime::LoadError"));
        assert!(!code.contains("ironcfg_core"));
    }

    #[test]
    fn test_flattened_name_collision() {
        let result =
            generate("DEF_CONFIG a { DEF_CONFIG b { u32 x; }; };\nDEF_CONFIG a__b { u32 y; };");
        match result {
            Err(CodegenError::NameCollision { ident, first, second }) => {
                assert_eq!(ident, "a__b");
                assert_eq!(first, "a::b");
                assert_eq!(second, "a__b");
            }
            other => panic!("expected NameCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_loader_name_collision_with_primitive() {
        let result = generate("DEF_CONFIG vec_u32 { u32 x; std::vector<u32> y; };");
        assert!(matches!(result, Err(CodegenError::NameCollision { .. })));
    }

    #[test]
    fn test_invalid_identifier() {
        let result = generate("DEF_CONFIG a { u32 self; };");
        assert!(matches!(
            result,
            Err(CodegenError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_signature_type_record_names_rejected() {
        for name in ["str", "AsRef", "Iterator"] {
            match generate(&format!("DEF_CONFIG {name} {{ u32 x; }};")) {
                Err(CodegenError::InvalidIdentifier { name: flat, .. }) => assert_eq!(flat, name),
                other => panic!("expected InvalidIdentifier for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_error_propagates() {
        let result = generate("DEF_CONFIG a { missing x; };");
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }
}
