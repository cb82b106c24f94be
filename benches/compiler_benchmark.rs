use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monkey::compiler::frontend;
use monkey::compiler::Compiler;

const PROGRAM: &str = r#"
    let a = 17;
    let b = 29;
    let sum = a * b + a / b - -a;
    let max = if (a < b) { b } else { a };
    let parity = if (max - max / 2 * 2 == 0) { 0 } else { 1 };
    let verdict = if (sum > 400) { sum - max } else { sum + max };
    verdict * parity + max;
"#;

fn compiler_benchmark(c: &mut Criterion) {
    let program = frontend::parse(PROGRAM).unwrap();

    c.bench_function("Frontend#parse", |b| {
        b.iter(|| black_box(frontend::parse(PROGRAM).unwrap()))
    });

    c.bench_function("Compiler#compile", |b| {
        b.iter(|| {
            let mut compiler = Compiler::new();
            compiler.compile(black_box(&program)).unwrap();
            black_box(compiler.byte_code())
        })
    });
}

criterion_group!(benches, compiler_benchmark);
criterion_main!(benches);
