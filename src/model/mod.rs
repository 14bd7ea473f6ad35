//! # Operation Context Model
//!
//! The immutable description of one operation that a route template is built
//! from: routing prefix, controller/action names, entity set keys and
//! navigation properties, the bound/unbound operation with its parameters,
//! and the handler parameter descriptions with their binding sources.
//!
//! Contexts are normally produced by an API description pipeline. For tooling
//! and tests they can also be loaded from YAML, TOML or JSON documents with
//! [`load_contexts`].

mod load;
mod semantic;
mod types;

pub use load::*;
pub use semantic::*;
pub use types::*;
