use criterion::{black_box, criterion_group, criterion_main, Criterion};
use refbench::workload::{fib, HttpSim};
use refbench::Request;

fn router_lookup(c: &mut Criterion) {
    let sim = HttpSim::new(0);
    let router = sim.router();

    c.bench_function("router_hit", |b| {
        b.iter(|| router.dispatch(black_box(&Request::new("GET", "/users"))))
    });

    c.bench_function("router_miss", |b| {
        b.iter(|| router.dispatch(black_box(&Request::new("GET", "/missing"))))
    });

    c.bench_function("http_sim_round", |b| b.iter(|| sim.round()));
}

fn recursion(c: &mut Criterion) {
    c.bench_function("fib_20", |b| b.iter(|| fib(black_box(20))));
}

criterion_group!(benches, router_lookup, recursion);
criterion_main!(benches);
