//! Parenthesized parameter lists of convention-routed functions.

use super::token::{expand_token, TokenStyle};
use crate::model::{Operation, OperationContext};

/// `(a={a},b='{b}')` for a function; empty for actions and parameterless functions.
///
/// Parameters follow metadata order. Tokens use the route-level name of the
/// matching parameter description so renamed handler arguments line up with
/// the runtime's route values.
#[must_use]
pub fn function_parameter_list(
    context: &OperationContext,
    operation: &Operation,
    style: TokenStyle,
) -> String {
    if !operation.is_function {
        return String::new();
    }

    let parameters: Vec<String> = operation
        .explicit_parameters()
        .map(|parameter| {
            let route_name = context.route_parameter_name(&parameter.name);
            format!(
                "{}={}",
                parameter.name,
                expand_token(&parameter.semantic_type, route_name, false, style)
            )
        })
        .collect();

    if parameters.is_empty() {
        return String::new();
    }

    format!("({})", parameters.join(","))
}
