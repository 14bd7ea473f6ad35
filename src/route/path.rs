//! Path composition: route prefix, then the declared template or the
//! convention-built resource segments.

use super::fixup::fix_up_array_parameters;
use super::keys::{expand_entity_keys, navigation_suffix};
use super::params::function_parameter_list;
use super::token::TokenStyle;
use crate::model::{ActionType, OperationContext, UrlKeyDelimiter};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Matches an inline route constraint, e.g. `{version:apiVersion}`.
static ROUTE_CONSTRAINT_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{([^{}:]+):[^{}]*\}").expect("route constraint regex should be valid")
});

/// Strip inline constraints: `{x:constraint}` becomes `{x}`.
#[must_use]
pub fn remove_route_constraints(template: &str) -> String {
    ROUTE_CONSTRAINT_REGEX
        .replace_all(template, "{$1}")
        .into_owned()
}

/// Trim surrounding slashes and strip constraints; `None` when nothing is left.
#[must_use]
pub fn normalize_prefix(prefix: Option<&str>) -> Option<String> {
    let trimmed = prefix?.trim_matches('/');

    if trimmed.is_empty() {
        return None;
    }

    Some(remove_route_constraints(trimmed))
}

/// Builds the path portion of a route template.
pub struct PathSegmentComposer<'a> {
    context: &'a OperationContext,
    style: TokenStyle,
}

impl<'a> PathSegmentComposer<'a> {
    #[must_use]
    pub fn new(context: &'a OperationContext, style: TokenStyle) -> Self {
        PathSegmentComposer { context, style }
    }

    /// Compose the full path, segments joined with `/`.
    #[must_use]
    pub fn build(&self) -> String {
        let context = self.context;
        let prefix = normalize_prefix(context.route_prefix.as_deref());

        let segments = if context.is_attribute_routed {
            self.attribute_segments(prefix)
        } else {
            let mut segments: Vec<String> = prefix.into_iter().collect();
            segments.extend(self.convention_segments());
            segments
        };

        segments.join("/")
    }

    fn attribute_segments(&self, route_prefix: Option<String>) -> Vec<String> {
        let context = self.context;
        let raw = context.route_template.as_deref().unwrap_or_default();
        let template = fix_up_array_parameters(raw, context);

        match normalize_prefix(context.controller_route_prefix.as_deref()) {
            Some(controller_prefix) => route_prefix
                .into_iter()
                .chain(self.join_template(Some(controller_prefix), template))
                .collect(),
            None => self.join_template(route_prefix, template),
        }
    }

    /// Join a prefix with a declared template. A template that opens with `(`
    /// continues the prefix's resource segment under parentheses delimiting.
    fn join_template(&self, prefix: Option<String>, template: String) -> Vec<String> {
        match prefix {
            None => vec![template],
            Some(prefix) if template.is_empty() => vec![prefix],
            Some(prefix)
                if template.starts_with('(')
                    && self.context.url_key_delimiter == UrlKeyDelimiter::Parentheses =>
            {
                vec![prefix + &template]
            }
            Some(prefix) => vec![prefix, template],
        }
    }

    fn convention_segments(&self) -> Vec<String> {
        let context = self.context;
        let style = self.style;
        let mut segments = Vec::with_capacity(2);

        match context.action_type {
            ActionType::EntitySetListing => {
                segments.push(format!(
                    "{}{}{}",
                    context.controller_name,
                    expand_entity_keys(context, style),
                    navigation_suffix(context)
                ));
            }
            ActionType::BoundOperation => {
                segments.push(format!(
                    "{}{}",
                    context.controller_name,
                    expand_entity_keys(context, style)
                ));
                match context.operation.as_ref() {
                    Some(operation) => segments.push(format!(
                        "{}{}",
                        operation.segment_name(context.options.use_qualified_operation_names),
                        function_parameter_list(context, operation, style)
                    )),
                    None => debug!(
                        action = %context.display_name(),
                        "bound operation has no operation metadata"
                    ),
                }
            }
            ActionType::UnboundOperation => match context.operation.as_ref() {
                Some(operation) => segments.push(format!(
                    "{}{}",
                    operation.name,
                    function_parameter_list(context, operation, style)
                )),
                None => debug!(
                    action = %context.display_name(),
                    "unbound operation has no operation metadata"
                ),
            },
        }

        segments.retain(|segment| !segment.is_empty());
        segments
    }
}
