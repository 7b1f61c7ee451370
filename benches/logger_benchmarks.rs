//! Criterion benchmarks for rust_logr_bridge

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logr_bridge::prelude::*;
use rust_logr_bridge::info;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const ITERATIONS_PER_OP: u64 = 100;

const EXPECTED_OUTPUT: &str =
    r#"{"logger":"","level":0,"msg":"ping","i":1,"j":2,"string":"hello world","int":1,"float":1}"#;

struct ContextKey1;
impl ContextKey for ContextKey1 {
    type Value = i64;
}

struct ContextKey2;
impl ContextKey for ContextKey2 {
    type Value = i64;
}

fn counting_sink(verbosity: Verbosity, calls: Arc<AtomicU64>) -> FuncSink {
    FuncSink::builder()
        .verbosity(verbosity)
        .build(move |line| {
            black_box(line);
            calls.fetch_add(1, Ordering::Relaxed);
        })
}

fn setup(verbosity: Verbosity, calls: Arc<AtomicU64>) -> Context {
    let sink = FuncSink::builder()
        .verbosity(verbosity)
        .context_field::<ContextKey1>("i")
        .context_field::<ContextKey2>("j")
        .build(move |line| {
            assert_eq!(line, EXPECTED_OUTPUT);
            calls.fetch_add(1, Ordering::Relaxed);
        });
    Context::background().with_logger(Logger::new(Arc::new(sink)))
}

fn new_context(ctx: &Context, j: u64, modulus: u64, v: Verbosity) {
    let ctx = ctx.with_value::<ContextKey1>(1).with_value::<ContextKey2>(2);
    use_context(&ctx, j, modulus, v);
}

fn use_context(ctx: &Context, j: u64, modulus: u64, v: Verbosity) {
    if j % modulus == 0 {
        let logger = Logger::from_context_or_discard(ctx);
        info!(logger.v(v), "ping", "string" => "hello world", "int" => 1, "float" => 1.0);
    }
}

// ============================================================================
// Context Value Benchmarks
// ============================================================================

fn bench_context_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("context_values");
    group.throughput(Throughput::Elements(ITERATIONS_PER_OP));

    // (name, modulus, verbosity, sink calls per iteration)
    for (name, modulus, v, calls_per_iter) in [
        ("new_context_1_percent", 100, 0, ITERATIONS_PER_OP / 100),
        ("new_context_100_percent", 1, 0, ITERATIONS_PER_OP),
        ("new_context_100_percent_disabled", 1, 2, 0),
    ] {
        let calls = Arc::new(AtomicU64::new(0));
        let ctx = setup(1, Arc::clone(&calls));
        let mut iterations = 0u64;

        group.bench_function(name, |b| {
            b.iter(|| {
                iterations += 1;
                for j in 0..ITERATIONS_PER_OP {
                    new_context(&ctx, j, modulus, v);
                }
            });
        });

        assert_eq!(calls.load(Ordering::Relaxed), iterations * calls_per_iter);
    }

    group.finish();
}

// ============================================================================
// Bridge Benchmarks
// ============================================================================

fn bench_sink_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sink_handler");
    group.throughput(Throughput::Elements(1));

    let calls = Arc::new(AtomicU64::new(0));
    let logger = Logger::new(Arc::new(counting_sink(1, calls)));
    let attrs = AttrLogger::new(Arc::new(logger.to_handler()));
    let grouped = attrs.with_group("req").with(&[Field::new("id", "r-1")]);

    group.bench_function("info", |b| {
        b.iter(|| {
            attrs.info(black_box("ping"), &[Field::new("int", 1)]);
        });
    });

    group.bench_function("info_grouped", |b| {
        b.iter(|| {
            grouped.info(black_box("ping"), &[Field::new("int", 1)]);
        });
    });

    group.bench_function("debug_disabled", |b| {
        b.iter(|| {
            attrs.debug(black_box("ping"), &[]);
        });
    });

    group.bench_function("with_group", |b| {
        b.iter(|| black_box(attrs.with_group("g")));
    });

    group.finish();
}

fn bench_handler_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("handler_sink");
    group.throughput(Throughput::Elements(1));

    let calls = Arc::new(AtomicU64::new(0));
    let backend = Logger::new(Arc::new(counting_sink(1, calls)));
    let logger = Logger::from_handler(Arc::new(backend.to_handler())).with_name("bench");

    group.bench_function("info", |b| {
        b.iter(|| {
            info!(logger, black_box("ping"), "int" => 1);
        });
    });

    group.bench_function("info_disabled", |b| {
        b.iter(|| {
            info!(logger.v(5), black_box("ping"), "int" => 1);
        });
    });

    group.bench_function("with_values", |b| {
        b.iter(|| black_box(logger.with_values(&[Field::new("k", "v")])));
    });

    group.finish();
}

fn bench_discard(c: &mut Criterion) {
    let mut group = c.benchmark_group("discard");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::discard();

    group.bench_function("info", |b| {
        b.iter(|| {
            info!(logger, black_box("ping"), "int" => 1);
        });
    });

    group.bench_function("from_context_or_discard", |b| {
        let ctx = Context::background();
        b.iter(|| black_box(Logger::from_context_or_discard(&ctx)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_context_values,
    bench_sink_handler,
    bench_handler_sink,
    bench_discard
);
criterion_main!(benches);
