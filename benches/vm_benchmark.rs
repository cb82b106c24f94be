use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monkey::compiler::frontend;
use monkey::compiler::Compiler;
use monkey::vm::VM;

const PROGRAM: &str = r#"
    let a = 17;
    let b = 29;
    let sum = a * b + a / b - -a;
    let max = if (a < b) { b } else { a };
    let parity = if (max - max / 2 * 2 == 0) { 0 } else { 1 };
    let verdict = if (sum > 400) { sum - max } else { sum + max };
    verdict * parity + max;
"#;

fn vm_benchmark(c: &mut Criterion) {
    let program = frontend::parse(PROGRAM).unwrap();
    let mut compiler = Compiler::new();
    compiler.compile(&program).unwrap();
    let byte_code = compiler.byte_code();

    c.bench_function("VM#run", |b| {
        b.iter(|| {
            let mut vm = VM::new(black_box(byte_code.clone()));
            vm.run().unwrap();
            black_box(vm.last_popped())
        })
    });
}

criterion_group!(benches, vm_benchmark);
criterion_main!(benches);
