//! # Operation Context Linter
//!
//! Route templates degrade silently when metadata is incomplete: a key
//! segment is dropped, a navigation suffix is missing, an operation segment
//! is left out. The linter reports those situations so they can be fixed at
//! the source instead of discovered in generated clients.
//!
//! ## Checks Performed
//!
//! 1. **key_count_mismatch** - entity key count differs from key parameter count
//! 2. **ambiguous_navigation** - more than one navigation property matches the action name
//! 3. **missing_route_template** - attribute-routed action without a template
//! 4. **missing_operation** - operation action type without operation metadata
//! 5. **collection_token_missing** - client fix-up cannot find a collection parameter token
//! 6. **duplicate_parameter** - two parameter descriptions share a name (case-insensitive)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use odata_route_template::linter::{lint_contexts, LintSeverity};
//!
//! for issue in lint_contexts(&contexts) {
//!     eprintln!("[{}] {}: {}", issue.severity, issue.location, issue.message);
//! }
//! ```

use crate::model::{ends_with_ignore_ascii_case, ActionType, GenerationKind, OperationContext};
use crate::route::find_token;
use std::collections::HashSet;
use std::fmt;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintSeverity {
    /// Info - the template is built, but from an arbitrary choice
    Info,
    /// Warning - part of the template will be omitted
    Warning,
    /// Error - the template cannot describe the operation
    Error,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Info => write!(f, "info"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Error => write!(f, "error"),
        }
    }
}

/// A lint issue found in an operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// `Controller.Action` the issue belongs to
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "key_count_mismatch")
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint every context in order.
#[must_use]
pub fn lint_contexts(contexts: &[OperationContext]) -> Vec<LintIssue> {
    contexts.iter().flat_map(lint_context).collect()
}

/// Lint a single operation context.
#[must_use]
pub fn lint_context(context: &OperationContext) -> Vec<LintIssue> {
    let location = context.display_name();
    let mut issues = Vec::new();

    lint_duplicate_parameters(context, &location, &mut issues);

    if context.is_attribute_routed {
        lint_attribute_template(context, &location, &mut issues);
    } else {
        lint_convention(context, &location, &mut issues);
    }

    issues
}

fn lint_duplicate_parameters(
    context: &OperationContext,
    location: &str,
    issues: &mut Vec<LintIssue>,
) {
    let mut seen = HashSet::new();
    for parameter in &context.parameter_descriptions {
        if !seen.insert(parameter.name.to_ascii_lowercase()) {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Warning,
                "duplicate_parameter",
                format!(
                    "parameter '{}' is described more than once; only the first description is used",
                    parameter.name
                ),
            ));
        }
    }
}

fn lint_attribute_template(
    context: &OperationContext,
    location: &str,
    issues: &mut Vec<LintIssue>,
) {
    let Some(template) = context.route_template.as_deref().filter(|t| !t.is_empty()) else {
        issues.push(
            LintIssue::new(
                location,
                LintSeverity::Warning,
                "missing_route_template",
                "attribute-routed action has no route template; only the prefix is rendered",
            )
            .with_suggestion("Declare the route template on the action"),
        );
        return;
    };

    let Some(operation) = context.operation.as_ref() else {
        return;
    };

    if !operation.is_function || context.generation_kind != GenerationKind::Client {
        return;
    }

    for parameter in operation
        .explicit_parameters()
        .filter(|p| p.semantic_type.is_collection())
    {
        let route_name = context.route_parameter_name(&parameter.name);
        if find_token(template, route_name).is_none() {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Warning,
                "collection_token_missing",
                format!(
                    "collection parameter '{}' has no '{{{}}}' token in template '{}'",
                    parameter.name, route_name, template
                ),
            ));
        }
    }
}

fn lint_convention(context: &OperationContext, location: &str, issues: &mut Vec<LintIssue>) {
    if context.action_type != ActionType::UnboundOperation {
        let entity_keys = context.entity_keys().len();
        let key_parameters = context.key_parameters().count();
        if entity_keys != key_parameters && key_parameters > 0 {
            issues.push(
                LintIssue::new(
                    location,
                    LintSeverity::Warning,
                    "key_count_mismatch",
                    format!(
                        "entity has {} key(s) but {} key parameter(s) are described; the key segment is omitted",
                        entity_keys, key_parameters
                    ),
                )
                .with_suggestion("Describe one 'key*' parameter per entity key"),
            );
        }
    }

    match context.action_type {
        ActionType::EntitySetListing => lint_navigation(context, location, issues),
        ActionType::BoundOperation | ActionType::UnboundOperation => {
            if context.operation.is_none() {
                issues.push(LintIssue::new(
                    location,
                    LintSeverity::Error,
                    "missing_operation",
                    format!(
                        "{} action has no operation metadata; the operation segment is omitted",
                        context.action_type
                    ),
                ));
            }
        }
    }
}

fn lint_navigation(context: &OperationContext, location: &str, issues: &mut Vec<LintIssue>) {
    let Some(entity_set) = context.entity_set.as_ref() else {
        return;
    };

    let matches: Vec<&str> = entity_set
        .entity_type
        .navigation_properties
        .iter()
        .filter(|p| !p.is_empty() && ends_with_ignore_ascii_case(&context.action_name, p))
        .map(String::as_str)
        .collect();

    if matches.len() > 1 {
        issues.push(
            LintIssue::new(
                location,
                LintSeverity::Info,
                "ambiguous_navigation",
                format!(
                    "action name matches navigation properties [{}]; '{}' is used",
                    matches.join(", "),
                    matches[0]
                ),
            )
            .with_suggestion("Rename the action or declare the intended property first"),
        );
    }
}
