use super::types::{
    ActionType, EntitySet, GenerationKind, Operation, OperationContext, ParameterDescription,
    RouteOptions, UrlKeyDelimiter,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Document-wide values applied to every operation that does not set its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDefaults {
    #[serde(default)]
    pub route_prefix: Option<String>,
    #[serde(default)]
    pub url_key_delimiter: Option<UrlKeyDelimiter>,
    #[serde(default)]
    pub generation_kind: Option<GenerationKind>,
    #[serde(default)]
    pub options: Option<RouteOptions>,
}

/// One operation as written in a document; unset fields fall back to [`ContextDefaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEntry {
    #[serde(default)]
    pub route_prefix: Option<String>,
    #[serde(default)]
    pub controller_route_prefix: Option<String>,
    #[serde(default)]
    pub is_attribute_routed: bool,
    #[serde(default)]
    pub route_template: Option<String>,
    pub controller_name: String,
    pub action_name: String,
    pub action_type: ActionType,
    #[serde(default)]
    pub url_key_delimiter: Option<UrlKeyDelimiter>,
    #[serde(default)]
    pub generation_kind: Option<GenerationKind>,
    #[serde(default)]
    pub entity_set: Option<EntitySet>,
    #[serde(default)]
    pub operation: Option<Operation>,
    #[serde(default)]
    pub parameter_descriptions: Vec<ParameterDescription>,
    #[serde(default)]
    pub options: Option<RouteOptions>,
}

impl OperationEntry {
    /// Merge this entry with the document defaults into a complete context.
    #[must_use]
    pub fn resolve(self, defaults: &ContextDefaults) -> OperationContext {
        OperationContext {
            route_prefix: self.route_prefix.or_else(|| defaults.route_prefix.clone()),
            controller_route_prefix: self.controller_route_prefix,
            is_attribute_routed: self.is_attribute_routed,
            route_template: self.route_template,
            controller_name: self.controller_name,
            action_name: self.action_name,
            action_type: self.action_type,
            url_key_delimiter: self
                .url_key_delimiter
                .or(defaults.url_key_delimiter)
                .unwrap_or_default(),
            generation_kind: self
                .generation_kind
                .or(defaults.generation_kind)
                .unwrap_or_default(),
            entity_set: self.entity_set,
            operation: self.operation,
            parameter_descriptions: self.parameter_descriptions,
            options: self.options.or(defaults.options).unwrap_or_default(),
        }
    }
}

/// A file of operation contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(default)]
    pub defaults: ContextDefaults,
    #[serde(default)]
    pub operations: Vec<OperationEntry>,
}

impl RouteDocument {
    /// Resolve every entry against the document defaults.
    #[must_use]
    pub fn into_contexts(self) -> Vec<OperationContext> {
        let defaults = self.defaults;
        self.operations
            .into_iter()
            .map(|entry| entry.resolve(&defaults))
            .collect()
    }
}

/// Input format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse a document from text in the given format.
pub fn parse_document(content: &str, format: DocumentFormat) -> anyhow::Result<RouteDocument> {
    let document = match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(content).context("failed to parse YAML route document")?
        }
        DocumentFormat::Toml => {
            toml::from_str(content).context("failed to parse TOML route document")?
        }
        DocumentFormat::Json => {
            serde_json::from_str(content).context("failed to parse JSON route document")?
        }
    };
    Ok(document)
}

/// Load a route document from disk.
pub fn load_document(path: &Path) -> anyhow::Result<RouteDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route document {}", path.display()))?;
    let document = parse_document(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("invalid route document {}", path.display()))?;
    debug!(
        path = %path.display(),
        operations = document.operations.len(),
        "loaded route document"
    );
    Ok(document)
}

/// Load a route document and resolve it into operation contexts.
pub fn load_contexts(path: &Path) -> anyhow::Result<Vec<OperationContext>> {
    Ok(load_document(path)?.into_contexts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SemanticType;

    const YAML_DOCUMENT: &str = r#"
defaults:
  route_prefix: api
  url_key_delimiter: slash
  generation_kind: client
operations:
  - controller_name: Products
    action_name: Get
    action_type: entity_set_listing
    entity_set:
      name: Products
      entity_type:
        keys:
          - { name: id, type: Edm.Int32 }
    parameter_descriptions:
      - { name: key, type: Edm.Int32, source: path }
  - controller_name: Products
    action_name: Rate
    action_type: bound_operation
    generation_kind: server
    url_key_delimiter: parentheses
    operation:
      name: Rate
      qualified_name: Contoso.Rate
      is_function: false
"#;

    #[test]
    fn test_defaults_apply_to_unset_fields() {
        let document = parse_document(YAML_DOCUMENT, DocumentFormat::Yaml).unwrap();
        let contexts = document.into_contexts();
        assert_eq!(contexts.len(), 2);

        let first = &contexts[0];
        assert_eq!(first.route_prefix.as_deref(), Some("api"));
        assert_eq!(first.url_key_delimiter, UrlKeyDelimiter::Slash);
        assert_eq!(first.generation_kind, GenerationKind::Client);
        assert_eq!(
            first.entity_keys()[0].semantic_type,
            SemanticType::Primitive(crate::model::PrimitiveKind::Int32)
        );

        let second = &contexts[1];
        assert_eq!(second.url_key_delimiter, UrlKeyDelimiter::Parentheses);
        assert_eq!(second.generation_kind, GenerationKind::Server);
        assert_eq!(second.route_prefix.as_deref(), Some("api"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("routes.yml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("routes.toml")),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("routes.json")),
            DocumentFormat::Json
        );
    }

    #[test]
    fn test_invalid_semantic_type_is_rejected() {
        let json = r#"{"operations":[{"controller_name":"P","action_name":"Get",
            "action_type":"entity_set_listing",
            "parameter_descriptions":[{"name":"key","type":"Edm.Nope","source":"path"}]}]}"#;
        assert!(parse_document(json, DocumentFormat::Json).is_err());
    }
}
