//! # odata-route-template
//!
//! Builds the canonical route template of one OData operation, the string
//! that API documentation shows and client generators parse, e.g.
//!
//! ```text
//! api/Products({key})/Contoso.Rate(rating={rating})?culture={culture}
//! ```
//!
//! ## Overview
//!
//! Input is an immutable [`OperationContext`](model::OperationContext)
//! describing one operation: route prefix, controller and action names, the
//! action type (entity set listing, bound or unbound operation), the entity
//! set keys and navigation properties, the operation's parameters and the
//! handler parameter descriptions. Output is a single string.
//!
//! ## Architecture
//!
//! - **[`model`]** - Operation Context types, semantic types, document loading
//! - **[`route`]** - Template synthesis (path, keys, parameters, fix-ups, query)
//! - **[`linter`]** - Diagnostics for metadata that degrades templates
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `odata-route-gen` command surface
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Builder as RouteTemplateBuilder
//!     participant Path as PathSegmentComposer
//!     participant Keys as expand_entity_keys
//!     participant Fixup as fix_up_array_parameters
//!     participant Query as query_string
//!
//!     Caller->>Builder: build(&context)
//!     Builder->>Path: build()
//!     alt attribute routed
//!         Path->>Fixup: client function template
//!         Fixup-->>Path: bracketed collection tokens
//!     else convention routed
//!         Path->>Keys: entity keys
//!         Keys-->>Path: ({key}) or /{a}/{b}
//!     end
//!     Path-->>Builder: path
//!     Builder->>Query: query-bound parameters
//!     Query-->>Builder: ?a={a}&b={b}
//!     Builder-->>Caller: template
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use odata_route_template::model::{
//!     ActionType, GenerationKind, Operation, OperationContext, OperationParameter,
//!     PrimitiveKind, SemanticType,
//! };
//! use odata_route_template::build_route_template;
//!
//! let mut context = OperationContext::new("Default", "Rename", ActionType::UnboundOperation);
//! context.generation_kind = GenerationKind::Client;
//! context.operation = Some(Operation {
//!     name: "Rename".into(),
//!     qualified_name: None,
//!     is_function: true,
//!     parameters: vec![OperationParameter::new(
//!         "newName",
//!         SemanticType::Primitive(PrimitiveKind::String),
//!     )],
//! });
//!
//! assert_eq!(build_route_template(&context), "Rename(newName='{newName}')");
//! ```

pub mod cli;
pub mod linter;
pub mod logging;
pub mod model;
pub mod route;

pub use model::{
    load_contexts, ActionType, BindingSource, GenerationKind, OperationContext, SemanticType,
    UrlKeyDelimiter,
};
pub use route::{build_route_template, RouteTemplateBuilder};
