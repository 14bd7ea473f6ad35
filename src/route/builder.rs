use super::path::PathSegmentComposer;
use super::query::query_string;
use super::token::TokenStyle;
use crate::model::OperationContext;
use tracing::trace;

/// Builds the route template for one operation context.
///
/// The builder holds no state beyond the borrowed context, so building twice
/// from equal contexts always yields the same string.
///
/// # Example
///
/// ```rust
/// use odata_route_template::model::{
///     ActionType, BindingSource, EntitySet, EntityType, KeyProperty, OperationContext,
///     ParameterDescription, PrimitiveKind, SemanticType,
/// };
/// use odata_route_template::route::RouteTemplateBuilder;
///
/// let int32 = SemanticType::Primitive(PrimitiveKind::Int32);
/// let mut context = OperationContext::new("Products", "Get", ActionType::EntitySetListing);
/// context.entity_set = Some(EntitySet {
///     name: "Products".into(),
///     entity_type: EntityType {
///         keys: vec![KeyProperty::new("id", int32.clone())],
///         navigation_properties: vec![],
///     },
/// });
/// context.parameter_descriptions = vec![
///     ParameterDescription::new("key", Some(int32), BindingSource::Path),
/// ];
///
/// assert_eq!(RouteTemplateBuilder::new(&context).build(), "Products({key})");
/// ```
pub struct RouteTemplateBuilder<'a> {
    context: &'a OperationContext,
}

impl<'a> RouteTemplateBuilder<'a> {
    #[must_use]
    pub fn new(context: &'a OperationContext) -> Self {
        RouteTemplateBuilder { context }
    }

    /// Path first, then the query suffix.
    #[must_use]
    pub fn build(&self) -> String {
        let style = TokenStyle {
            generation_kind: self.context.generation_kind,
            options: self.context.options,
        };

        let mut template = PathSegmentComposer::new(self.context, style).build();
        template.push_str(&query_string(self.context));

        trace!(
            action = %self.context.display_name(),
            template = %template,
            "built route template"
        );

        template
    }
}

/// Shorthand for `RouteTemplateBuilder::new(context).build()`.
#[must_use]
pub fn build_route_template(context: &OperationContext) -> String {
    RouteTemplateBuilder::new(context).build()
}
