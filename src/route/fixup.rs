//! Bracketing of collection parameters in attribute-declared templates.

use super::token::find_token;
use crate::model::{GenerationKind, OperationContext};
use tracing::debug;

/// Wrap the tokens of collection-typed function parameters in `[` `]`.
///
/// Only client templates of functions are touched. For each collection
/// parameter (in metadata order, receiver excluded) the first token carrying
/// its route-level name is bracketed; parameters with no token in the
/// template are skipped.
#[must_use]
pub fn fix_up_array_parameters(template: &str, context: &OperationContext) -> String {
    let Some(operation) = context.operation.as_ref() else {
        return template.to_string();
    };

    if !operation.is_function || context.generation_kind != GenerationKind::Client {
        return template.to_string();
    }

    let mut fixed = template.to_string();

    for parameter in operation
        .explicit_parameters()
        .filter(|p| p.semantic_type.is_collection())
    {
        let route_name = context.route_parameter_name(&parameter.name);

        match find_token(&fixed, route_name).map(|token| token.span) {
            Some(span) => {
                fixed.insert(span.end, ']');
                fixed.insert(span.start, '[');
            }
            None => debug!(
                action = %context.display_name(),
                parameter = route_name,
                "collection parameter token not found in route template"
            ),
        }
    }

    fixed
}
