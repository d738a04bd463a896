//! Rust code generation modules.

pub mod entry;
pub mod loaders;
pub mod names;
pub mod types;

pub use entry::EntryGenerator;
pub use loaders::LoaderGenerator;
pub use types::TypeGenerator;
