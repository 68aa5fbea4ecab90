//! Criterion benchmarks for parsing and macro expansion

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lisparser::{Engine, Parser};

fn parse_benchmark(c: &mut Criterion) {
    let source = "(this is a good (:or chance opportunity) to ,get (:+ 1 -.5))";

    c.bench_function("parse_form", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(source));
            parser.next_form().unwrap()
        })
    });
}

fn expand_benchmark(c: &mut Criterion) {
    let program = "(defmacro :plus (a b) (+ ,a ,b))\
                   (defmacro :sum4 (a b c d) (:plus (:plus ,a ,b) (:plus ,c ,d)))\
                   (:sum4 (:plus 12 13) 11.5 11.6 (f x))";

    c.bench_function("expand_source", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            engine.expand_source(black_box(program)).unwrap()
        })
    });
}

criterion_group!(benches, parse_benchmark, expand_benchmark);
criterion_main!(benches);
