//! # CLI Module
//!
//! Command-line access to the route template builder, mostly for inspecting
//! what templates a set of operation contexts produces.
//!
//! ## Commands
//!
//! ### `render`
//!
//! ```bash
//! odata-route-gen render --input operations.yaml --generation client
//! ```
//!
//! Options:
//! - `--input <FILE>` - Operation document (YAML, TOML or JSON)
//! - `--generation <server|client>` - Override every operation's generation kind
//! - `--delimiter <parentheses|slash>` - Override every operation's key delimiter
//! - `--format <text|json>` - Output format (default: text)
//!
//! ### `lint`
//!
//! ```bash
//! odata-route-gen lint --input operations.yaml --fail-on-error
//! ```
//!
//! Logging is configured through `ODATA_ROUTE_LOG_*` variables, see
//! [`crate::logging`].

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{
    execute, render_contexts, run_cli, write_issues, write_routes, Cli, Commands, DelimiterArg,
    GenerationArg, OutputFormat, RenderedRoute,
};
