use criterion::{criterion_group, criterion_main, Criterion};
use odata_route_template::model::{
    ActionType, BindingSource, EntitySet, EntityType, GenerationKind, KeyProperty, Operation,
    OperationContext, OperationParameter, ParameterDescription, PrimitiveKind, SemanticType,
};
use odata_route_template::build_route_template;
use std::hint::black_box;

fn bound_function_context(kind: GenerationKind) -> OperationContext {
    let int32 = SemanticType::Primitive(PrimitiveKind::Int32);
    let string = SemanticType::Primitive(PrimitiveKind::String);

    let mut context = OperationContext::new("Products", "Rate", ActionType::BoundOperation);
    context.route_prefix = Some("api/v{version:apiVersion}".to_string());
    context.generation_kind = kind;
    context.entity_set = Some(EntitySet {
        name: "Products".to_string(),
        entity_type: EntityType {
            keys: vec![KeyProperty::new("id", int32.clone())],
            navigation_properties: vec!["Supplier".to_string()],
        },
    });
    context.operation = Some(Operation {
        name: "Rate".to_string(),
        qualified_name: Some("Contoso.Rate".to_string()),
        is_function: true,
        parameters: vec![
            OperationParameter::new("rating", int32.clone()),
            OperationParameter::new("comment", string.clone()),
            OperationParameter::new("tags", SemanticType::collection_of(string.clone())),
        ],
    });
    context.parameter_descriptions = vec![
        ParameterDescription::new("key", Some(int32.clone()), BindingSource::Path),
        ParameterDescription::new("rating", Some(int32), BindingSource::Path),
        ParameterDescription::new("culture", Some(string), BindingSource::Query),
    ];
    context
}

fn bench_build(c: &mut Criterion) {
    let server = bound_function_context(GenerationKind::Server);
    let client = bound_function_context(GenerationKind::Client);

    c.bench_function("build_bound_function_server", |b| {
        b.iter(|| build_route_template(black_box(&server)))
    });
    c.bench_function("build_bound_function_client", |b| {
        b.iter(|| build_route_template(black_box(&client)))
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
