//! # IronCfg
//!
//! Schema-driven XML configuration loaders for Rust.
//!
//! A schema of nested `DEF_CONFIG` blocks is compiled into plain Rust
//! structs plus one loader per distinct type, which read those structs from
//! an XML document.
//!
//! ## Quick Start
//!
//! ```
//! use ironcfg::prelude::*;
//!
//! let code = generate_from_str(
//!     "DEF_CONFIG server { std::string host; u32 port; };",
//! )?;
//! assert!(code.contains("pub fn load_server_from_xml_file("));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Runtime used by generated loaders: XML tree, conversions, errors
//! - [`schema`] - Schema normalization, parsing, resolution and the type graph
//! - [`codegen`] - Rust code generation from schemas

pub mod prelude;

/// Runtime support for generated loaders.
pub mod core {
    pub use ironcfg_core::*;
}

/// Schema parsing and resolution.
pub mod schema {
    pub use ironcfg_schema::*;
}

/// Code generation from schemas.
pub mod codegen {
    pub use ironcfg_codegen::*;
}
