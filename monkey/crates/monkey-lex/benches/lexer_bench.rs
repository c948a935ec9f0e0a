//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package monkey-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkey_lex::{tokenize, Lexer};

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let add = fn(x, y) { x + y; }; let result = add(5, 10);";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_literal", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        let fibonacci = fn(x) {
            if (x < 2) {
                return x;
            } else {
                return fibonacci(x - 1) + fibonacci(x - 2);
            }
        };

        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))));
                }
            };
            iter(arr, []);
        };

        let unless = fn(cond, a, b) { if (!cond) { a } else { b } };
        fibonacci(15) != 610;
    "#
    .repeat(32);

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("iterate", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.bench_function("tokenize_vec", |b| {
        b.iter(|| tokenize(black_box(&source)).len())
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("let very_long_variable_name = 42;")))
    });

    group.bench_function("keywords", |b| {
        b.iter(|| lexer_token_count(black_box("fn let true false if else return")))
    });

    group.finish();
}

fn bench_lexer_illegal(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_illegal");

    let source = "@#$%^&[]".repeat(256);
    group.bench_function("illegal_bytes", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_program,
    bench_lexer_identifiers,
    bench_lexer_illegal
);
criterion_main!(benches);
