use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lcform::lcform_validation::*;
use serde_json::json;

fn quiet_engine() -> ValidationEngine<serde_json::Value> {
    ValidationEngine::with_config(EngineConfigBuilder::new().enable_logging(false).build())
}

fn bench_built_in_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("built_in_rules");

    let valid_emails = vec![
        json!("user@example.com"),
        json!("test.user+tag@domain.co.uk"),
        json!("admin@subdomain.example.com"),
    ];

    group.bench_function("email", |b| {
        let rule = Email::new();
        b.iter(|| {
            for email in &valid_emails {
                rule.check(black_box(email)).unwrap();
            }
        })
    });

    group.bench_function("required", |b| {
        let rule = Required::new();
        let value = json!("john");
        b.iter(|| rule.check(black_box(&value)))
    });

    group.bench_function("min_length", |b| {
        let rule = MinLength::new(5);
        let value = json!("Hello World 123");
        b.iter(|| rule.check(black_box(&value)))
    });

    group.finish();
}

fn bench_field_trigger(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("field_trigger");

    let mut engine = quiet_engine();
    engine
        .add_field_rule("email", Required::new(), None)
        .add_field_rule("email", Email::new(), None)
        .add_field_rule("email", MaxLength::new(64), None);
    let vm = std::sync::Arc::new(json!({"email": "user@example.com"}));

    group.bench_function("three_rules", |b| {
        b.to_async(&rt).iter(|| {
            engine.trigger_field_validation(vm.clone(), "email", json!("user@example.com"), None)
        })
    });

    group.bench_function("no_matching_rule", |b| {
        b.to_async(&rt)
            .iter(|| engine.trigger_field_validation(vm.clone(), "unknown", json!(""), None))
    });

    group.finish();
}

fn bench_full_form(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("full_form");

    for fields in [5usize, 20] {
        let mut engine = quiet_engine();
        let mut vm = serde_json::Map::new();
        for i in 0..fields {
            let key = format!("field_{}", i);
            engine
                .add_field_rule(key.as_str(), Required::new(), None)
                .add_field_rule(key.as_str(), MaxLength::new(32), None);
            vm.insert(key, json!("value"));
        }
        let vm = std::sync::Arc::new(serde_json::Value::Object(vm));

        group.bench_function(format!("{}_fields", fields), |b| {
            b.to_async(&rt).iter(|| engine.validate_full_form(vm.clone()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_built_in_rules,
    bench_field_trigger,
    bench_full_form
);
criterion_main!(benches);
