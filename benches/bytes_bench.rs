use binskel::ir::IrGraph;
use binskel::utilities::{byte_array_8_to_32, byte_array_8_to_64};
use binskel::Ea;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn widening_benchmark(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..4096u32).map(|i| i as u8).collect();

    c.bench_function("widen 4KiB to u32", |b| {
        b.iter(|| byte_array_8_to_32(black_box(&bytes), false).unwrap())
    });

    c.bench_function("widen 4KiB to u64 swapped", |b| {
        b.iter(|| byte_array_8_to_64(black_box(&bytes), true).unwrap())
    });
}

fn attach_benchmark(c: &mut Criterion) {
    c.bench_function("attach 1000 regions", |b| {
        b.iter(|| {
            let mut graph = IrGraph::new();
            let ir = graph.add_ir();
            let module = graph.add_module("bench");
            graph.attach(module, ir).unwrap();
            for i in 0..1000u64 {
                let region = graph.add_region();
                graph.attach(region, module).unwrap();
                graph.add_ea(region, Ea::new(0x1000 + i)).unwrap();
            }
            graph
        })
    });
}

criterion_group!(benches, widening_benchmark, attach_benchmark);
criterion_main!(benches);
