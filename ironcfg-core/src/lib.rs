//! # IronCfg Core
//!
//! Runtime support for loaders generated by `ironcfg-codegen`.
//!
//! This crate provides:
//! - An XML document tree ([`XmlDocument`], [`XmlNode`]) with child and
//!   same-named children lookup
//! - Decimal text to integer conversion for leaf values
//! - The [`LoadError`] type returned by every generated loader

pub mod convert;
pub mod document;
pub mod error;

pub use document::{XmlDocument, XmlNode};
pub use error::{ConvertError, DocumentError, LoadError};
