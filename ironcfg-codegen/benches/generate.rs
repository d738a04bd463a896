//! Schema compilation benchmarks.
//!
//! Run with: cargo bench -p ironcfg-codegen --bench generate

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ironcfg_schema::{TypeGraph, parse_schema};
use std::hint::black_box;

/// Builds a schema with `roots` root definitions, each holding a nested
/// definition and a mix of scalar, vector and record fields.
fn synthetic_schema(roots: usize) -> String {
    let mut schema = String::new();
    for i in 0..roots {
        schema.push_str(&format!("DEF_CONFIG config_{i} {{\n"));
        schema.push_str("    DEF_CONFIG entry {\n");
        schema.push_str("        std::string name;   // display name\n");
        schema.push_str("        u64 id;\n");
        schema.push_str("        std::vector<s32> weights;\n");
        schema.push_str("    };\n");
        schema.push_str("    u32 version;\n");
        schema.push_str("    entry primary;\n");
        schema.push_str("    std::vector<entry> entries;\n");
        if i > 0 {
            schema.push_str(&format!("    config_{} previous;\n", i - 1));
        }
        schema.push_str("};\n\n");
    }
    schema
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_schema");

    for roots in [1, 16, 128] {
        let schema = synthetic_schema(roots);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(roots), &schema, |b, schema| {
            b.iter(|| parse_schema(black_box(schema)))
        });
    }

    group.finish();
}

fn benchmark_type_graph(c: &mut Criterion) {
    let forest = parse_schema(&synthetic_schema(128)).expect("Failed to parse schema");

    c.bench_function("type_graph_128_roots", |b| {
        b.iter(|| TypeGraph::from_forest(black_box(&forest)))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for roots in [1, 16, 128] {
        let schema = synthetic_schema(roots);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(roots), &schema, |b, schema| {
            b.iter(|| ironcfg_codegen::generate_from_str(black_box(schema)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_type_graph,
    benchmark_generate
);
criterion_main!(benches);
