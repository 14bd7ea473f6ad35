use super::semantic::SemanticType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved name of the entity key token (`{key}`) and prefix of composite key
/// parameter names (`keyCategoryId`, `keyProductId`, ...).
pub const KEY_TOKEN: &str = "key";

/// Name of the implicit receiver parameter of a bound operation.
pub const BINDING_PARAMETER: &str = "bindingParameter";

/// What kind of action a route template is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// List or access an entity collection.
    EntitySetListing,
    /// Invoke an operation bound to an entity or entity set.
    BoundOperation,
    /// Invoke an operation imported into the service root.
    UnboundOperation,
}

/// How entity keys are rendered in a resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlKeyDelimiter {
    /// `Products(1)` / `Orders(orderId=1,lineId=2)`
    #[default]
    Parentheses,
    /// `Products/1` / `Orders/1/2`
    Slash,
}

/// Audience of the produced template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// Opaque placeholders consumed by the serving runtime.
    #[default]
    Server,
    /// Self-describing, type-decorated placeholders for client generators.
    Client,
}

/// Where a handler parameter is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSource {
    Path,
    Query,
    Body,
    Other,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::EntitySetListing => write!(f, "EntitySetListing"),
            ActionType::BoundOperation => write!(f, "BoundOperation"),
            ActionType::UnboundOperation => write!(f, "UnboundOperation"),
        }
    }
}

impl fmt::Display for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingSource::Path => write!(f, "Path"),
            BindingSource::Query => write!(f, "Query"),
            BindingSource::Body => write!(f, "Body"),
            BindingSource::Other => write!(f, "Other"),
        }
    }
}

/// A key property of an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
}

impl KeyProperty {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        KeyProperty {
            name: name.into(),
            semantic_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityType {
    /// Key properties in declared order.
    #[serde(default)]
    pub keys: Vec<KeyProperty>,
    /// Navigation property names in declared order.
    #[serde(default)]
    pub navigation_properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub name: String,
    #[serde(default)]
    pub entity_type: EntityType,
}

/// A parameter declared on an operation in the metadata model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
}

impl OperationParameter {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        OperationParameter {
            name: name.into(),
            semantic_type,
        }
    }

    /// The implicit receiver of a bound operation.
    #[must_use]
    pub fn is_binding_parameter(&self) -> bool {
        self.name == BINDING_PARAMETER
    }
}

/// A function or action from the metadata model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    /// Namespace-qualified name, e.g. `Contoso.Rate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    /// Functions carry their arguments in the URL; actions in the payload.
    pub is_function: bool,
    /// Parameters in metadata order, including the binding parameter of bound operations.
    #[serde(default)]
    pub parameters: Vec<OperationParameter>,
}

impl Operation {
    /// Name rendered in a convention-built path segment.
    #[must_use]
    pub fn segment_name(&self, qualified: bool) -> &str {
        match (&self.qualified_name, qualified) {
            (Some(name), true) if !name.is_empty() => name,
            _ => &self.name,
        }
    }

    /// Declared parameters except the implicit receiver.
    pub fn explicit_parameters(&self) -> impl Iterator<Item = &OperationParameter> {
        self.parameters.iter().filter(|p| !p.is_binding_parameter())
    }

    /// True when `name` is a declared parameter of this operation and the operation is a function.
    #[must_use]
    pub fn has_function_parameter(&self, name: &str) -> bool {
        self.is_function
            && self
                .parameters
                .iter()
                .any(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// A handler parameter as seen by the API description pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescription {
    /// Model-binding name; used for key and query-string matching.
    pub name: String,
    /// Handler-level name, when the caller renamed the bound parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<SemanticType>,
    pub source: BindingSource,
}

impl ParameterDescription {
    pub fn new(
        name: impl Into<String>,
        semantic_type: Option<SemanticType>,
        source: BindingSource,
    ) -> Self {
        ParameterDescription {
            name: name.into(),
            parameter_name: None,
            semantic_type,
            source,
        }
    }

    #[must_use]
    pub fn with_parameter_name(mut self, parameter_name: impl Into<String>) -> Self {
        self.parameter_name = Some(parameter_name.into());
        self
    }

    /// Name a route token for this parameter is written with.
    #[must_use]
    pub fn route_parameter_name(&self) -> &str {
        self.parameter_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Render bound operations as `Namespace.Name` instead of `Name`.
    #[serde(default)]
    pub use_qualified_operation_names: bool,
    /// Omit the enum type name before quoted enum tokens.
    #[serde(default)]
    pub allow_unqualified_enum_literal: bool,
}

/// Everything known about one operation when its route template is built.
///
/// Produced by the description pipeline, consumed by exactly one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    /// Prefix declared on an attribute-routed controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_route_prefix: Option<String>,
    #[serde(default)]
    pub is_attribute_routed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_template: Option<String>,
    pub controller_name: String,
    pub action_name: String,
    pub action_type: ActionType,
    #[serde(default)]
    pub url_key_delimiter: UrlKeyDelimiter,
    #[serde(default)]
    pub generation_kind: GenerationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_set: Option<EntitySet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    #[serde(default)]
    pub parameter_descriptions: Vec<ParameterDescription>,
    #[serde(default)]
    pub options: RouteOptions,
}

impl OperationContext {
    /// Context for a convention-routed action with default options.
    pub fn new(
        controller_name: impl Into<String>,
        action_name: impl Into<String>,
        action_type: ActionType,
    ) -> Self {
        OperationContext {
            route_prefix: None,
            controller_route_prefix: None,
            is_attribute_routed: false,
            route_template: None,
            controller_name: controller_name.into(),
            action_name: action_name.into(),
            action_type,
            url_key_delimiter: UrlKeyDelimiter::default(),
            generation_kind: GenerationKind::default(),
            entity_set: None,
            operation: None,
            parameter_descriptions: Vec::new(),
            options: RouteOptions::default(),
        }
    }

    /// Entity key properties, empty when no entity set is known.
    #[must_use]
    pub fn entity_keys(&self) -> &[KeyProperty] {
        self.entity_set
            .as_ref()
            .map(|set| set.entity_type.keys.as_slice())
            .unwrap_or_default()
    }

    /// Parameter descriptions whose name starts with the reserved key token.
    pub fn key_parameters(&self) -> impl Iterator<Item = &ParameterDescription> {
        self.parameter_descriptions
            .iter()
            .filter(|p| starts_with_ignore_ascii_case(&p.name, KEY_TOKEN))
    }

    #[must_use]
    pub fn is_function(&self) -> bool {
        self.operation.as_ref().is_some_and(|op| op.is_function)
    }

    /// Route-level name of a metadata parameter.
    ///
    /// Looks up the description with the same name (case-insensitive) and uses
    /// its handler-level name; falls back to the metadata name.
    #[must_use]
    pub fn route_parameter_name<'a>(&'a self, metadata_name: &'a str) -> &'a str {
        self.parameter_descriptions
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(metadata_name))
            .map(ParameterDescription::route_parameter_name)
            .unwrap_or(metadata_name)
    }

    /// `Controller.Action`, used to label output and diagnostics.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}.{}", self.controller_name, self.action_name)
    }
}

pub(crate) fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value.len() >= prefix.len()
        && value.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

pub(crate) fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value.as_bytes()[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}
