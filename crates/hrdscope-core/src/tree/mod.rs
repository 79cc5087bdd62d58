//! Attribute tree used as the textual interchange form of descriptors.
//!
//! An `Element` is a named node carrying string-valued attributes, the same
//! shape as an XML empty element. Typed get/set primitives convert between
//! attribute text and Rust values; descriptors only ever go through those
//! primitives.

pub mod element;
pub mod error;
pub mod value;

pub use element::Element;
pub use error::TreeError;
