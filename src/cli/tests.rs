#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Unit tests for CLI commands

use crate::cli::{
    render_contexts, write_issues, write_routes, Cli, Commands, DelimiterArg, GenerationArg,
    OutputFormat, RenderedRoute,
};
use crate::linter::{LintIssue, LintSeverity};
use crate::model::{
    ActionType, BindingSource, EntitySet, EntityType, GenerationKind, KeyProperty,
    OperationContext, ParameterDescription, PrimitiveKind, SemanticType, UrlKeyDelimiter,
};
use clap::Parser;

#[test]
fn test_render_command_with_flags() {
    let cli = Cli::try_parse_from([
        "odata-route-gen",
        "render",
        "--input",
        "ops.yaml",
        "--generation",
        "client",
        "--delimiter",
        "slash",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Render {
            input,
            generation,
            delimiter,
            format,
        } => {
            assert_eq!(input.to_string_lossy(), "ops.yaml");
            assert_eq!(generation, Some(GenerationArg::Client));
            assert_eq!(delimiter, Some(DelimiterArg::Slash));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "odata-route-gen",
        "lint",
        "-i",
        "ops.json",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            input,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(input.to_string_lossy(), "ops.json");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_render_requires_input() {
    assert!(Cli::try_parse_from(["odata-route-gen", "render"]).is_err());
}

fn string_keyed_products() -> OperationContext {
    let string = SemanticType::Primitive(PrimitiveKind::String);
    let mut context = OperationContext::new("Products", "Get", ActionType::EntitySetListing);
    context.entity_set = Some(EntitySet {
        name: "Products".to_string(),
        entity_type: EntityType {
            keys: vec![KeyProperty::new("sku", string.clone())],
            navigation_properties: vec![],
        },
    });
    context.parameter_descriptions =
        vec![ParameterDescription::new("key", Some(string), BindingSource::Path)];
    context
}

#[test]
fn test_render_contexts_applies_overrides() {
    let mut contexts = vec![string_keyed_products()];

    let routes = render_contexts(&mut contexts, None, None);
    assert_eq!(routes[0].template, "Products({key})");

    let routes = render_contexts(
        &mut contexts,
        Some(GenerationKind::Client),
        Some(UrlKeyDelimiter::Slash),
    );
    assert_eq!(routes[0].action, "Products.Get");
    assert_eq!(routes[0].template, "Products/'{key}'");
}

#[test]
fn test_write_routes_text_and_json() {
    let routes = vec![
        RenderedRoute {
            action: "Products.Get".to_string(),
            template: "Products({key})".to_string(),
        },
        RenderedRoute {
            action: "Default.Top".to_string(),
            template: "Top()".to_string(),
        },
    ];

    let mut text = Vec::new();
    write_routes(&mut text, &routes, OutputFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "Products.Get  Products({key})\nDefault.Top   Top()\n"
    );

    let mut json = Vec::new();
    write_routes(&mut json, &routes, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(parsed[1]["template"], "Top()");
}

#[test]
fn test_write_issues_orders_by_severity() {
    let issues = vec![
        LintIssue::new("A.Get", LintSeverity::Info, "ambiguous_navigation", "info"),
        LintIssue::new("B.Get", LintSeverity::Error, "missing_operation", "error")
            .with_suggestion("fix it"),
    ];

    let mut out = Vec::new();
    write_issues(&mut out, &issues).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "[error] B.Get (missing_operation): error");
    assert_eq!(lines[1], "    suggestion: fix it");
    assert_eq!(lines[2], "[info] A.Get (ambiguous_navigation): info");
}
