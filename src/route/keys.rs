//! Entity key segments and navigation property suffixes.

use super::token::{expand_token, TokenStyle};
use crate::model::{ends_with_ignore_ascii_case, OperationContext, UrlKeyDelimiter, KEY_TOKEN};
use tracing::debug;

/// Key segment for the context's entity set, e.g. `({key})` or `/{a}/{b}`.
///
/// Returns an empty string when the number of entity keys differs from the
/// number of key parameter descriptions, or when the entity has no keys.
#[must_use]
pub fn expand_entity_keys(context: &OperationContext, style: TokenStyle) -> String {
    let entity_keys = context.entity_keys();
    let parameter_keys: Vec<_> = context.key_parameters().collect();

    if entity_keys.len() != parameter_keys.len() {
        debug!(
            action = %context.display_name(),
            entity_keys = entity_keys.len(),
            key_parameters = parameter_keys.len(),
            "key count mismatch, omitting key segment"
        );
        return String::new();
    }

    if entity_keys.is_empty() {
        return String::new();
    }

    let slash = context.url_key_delimiter == UrlKeyDelimiter::Slash;
    let single = entity_keys.len() == 1;

    let tokens: Vec<String> = entity_keys
        .iter()
        .zip(&parameter_keys)
        .enumerate()
        .map(|(index, (key, parameter))| {
            let name = if single { KEY_TOKEN } else { parameter.name.as_str() };
            expand_token(&key.semantic_type, name, slash && index > 0, style)
        })
        .collect();

    if slash {
        format!("/{}", tokens.join("/"))
    } else {
        format!("({})", tokens.join(","))
    }
}

/// `/Property` for the first navigation property the action name ends with.
#[must_use]
pub fn navigation_suffix(context: &OperationContext) -> String {
    let Some(entity_set) = context.entity_set.as_ref() else {
        return String::new();
    };

    entity_set
        .entity_type
        .navigation_properties
        .iter()
        .find(|property| {
            !property.is_empty() && ends_with_ignore_ascii_case(&context.action_name, property)
        })
        .map(|property| format!("/{property}"))
        .unwrap_or_default()
}
