//! Query-string suffix built from query-bound handler parameters.

use crate::model::{
    starts_with_ignore_ascii_case, BindingSource, OperationContext, ParameterDescription,
    KEY_TOKEN,
};

/// Parameter descriptions rendered in the query string, in original order.
///
/// Excludes anything not bound from the query, untyped descriptions, the
/// runtime's query-options and action-payload markers, entity keys, and the
/// function's own parameters (already rendered in the path).
pub fn query_parameters(
    context: &OperationContext,
) -> impl Iterator<Item = &ParameterDescription> {
    let keys = context.entity_keys();
    let operation = context.operation.as_ref();

    context.parameter_descriptions.iter().filter(move |parameter| {
        if parameter.source != BindingSource::Query {
            return false;
        }

        match &parameter.semantic_type {
            Some(ty) if !ty.is_built_in_marker() => {}
            _ => return false,
        }

        let is_key = keys
            .iter()
            .any(|key| key.name.eq_ignore_ascii_case(&parameter.name))
            || starts_with_ignore_ascii_case(&parameter.name, KEY_TOKEN);

        let is_function_parameter =
            operation.is_some_and(|op| op.has_function_parameter(&parameter.name));

        !is_key && !is_function_parameter
    })
}

/// `?a={a}&b={b}`, or an empty string when nothing qualifies.
#[must_use]
pub fn query_string(context: &OperationContext) -> String {
    let pairs: Vec<String> = query_parameters(context)
        .map(|parameter| format!("{0}={{{0}}}", parameter.name))
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
