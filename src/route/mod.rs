//! # Route Template Module
//!
//! Turns an [`OperationContext`](crate::model::OperationContext) into the
//! canonical route template used by API documentation and client generators.
//!
//! ## Overview
//!
//! A template is a path followed by an optional query suffix:
//!
//! ```text
//! api/Products({key})/Contoso.Rate(rating={rating})?culture={culture}
//! └┬┘ └──────┬─────┘ └──────────────┬────────────┘ └───────┬───────┘
//! prefix   entity set + key     bound function           query string
//! ```
//!
//! - **Attribute-routed** actions reuse their declared template; for client
//!   generation, collection parameters of functions are bracketed in place.
//! - **Convention-routed** actions synthesize segments from the entity set,
//!   its keys and navigation properties, or from the operation and its
//!   parameters.
//!
//! ## Generation Kinds
//!
//! | Type                   | Server      | Client                  |
//! |------------------------|-------------|-------------------------|
//! | `Edm.Int32`            | `{id}`      | `{id}`                  |
//! | `Edm.String`           | `{name}`    | `'{name}'`              |
//! | `Edm.Duration`         | `{span}`    | `duration'{span}'`      |
//! | `Edm.Binary`           | `{data}`    | `binary'{data}'`        |
//! | `Edm.Geography*`       | `{loc}`     | `geography'{loc}'`      |
//! | `Edm.Geometry*`        | `{shape}`   | `geometry'{shape}'`     |
//! | `Enum(Contoso.Color)`  | `{color}`   | `Contoso.Color'{color}'`|
//! | `Collection(...)`      | `{ids}`     | `[{ids}]`               |
//!
//! Malformed or partial metadata never fails a build; the affected piece of
//! the template is left out.

mod builder;
mod fixup;
mod keys;
mod params;
mod path;
mod query;
mod quoting;
mod token;


pub use builder::{build_route_template, RouteTemplateBuilder};
pub use fixup::fix_up_array_parameters;
pub use keys::{expand_entity_keys, navigation_suffix};
pub use params::function_parameter_list;
pub use path::{normalize_prefix, remove_route_constraints, PathSegmentComposer};
pub use query::{query_parameters, query_string};
pub use quoting::{quoting_prefix, QuotingRule, QUOTING_RULES};
pub use token::{expand_token, find_token, TemplateToken, TokenScanner, TokenStyle};
