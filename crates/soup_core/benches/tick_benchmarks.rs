use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soup_core::config::AppConfig;
use soup_core::{Scheduler, Simulation};

fn saturated_soup() -> (Simulation, Scheduler) {
    let mut config = AppConfig::default();
    config.simulation.max_cells = 2000;
    config.simulation.reproduction_probability = 1.0;
    let scheduler = Scheduler::from_config(&config.simulation);
    let mut sim = Simulation::with_seed(config, 7).expect("default config is valid");
    for _ in 0..11 {
        sim.on_reproduction_tick();
    }
    (sim, scheduler)
}

fn bench_move_tick(c: &mut Criterion) {
    let (mut sim, _) = saturated_soup();
    c.bench_function("move_tick_2000_cells", |b| {
        b.iter(|| {
            sim.on_move_tick();
            black_box(sim.population())
        })
    });
}

fn bench_virtual_second(c: &mut Criterion) {
    let (mut sim, mut scheduler) = saturated_soup();
    c.bench_function("virtual_second_2000_cells", |b| {
        b.iter(|| black_box(scheduler.advance(1000, &mut sim)))
    });
}

criterion_group!(benches, bench_move_tick, bench_virtual_second);
criterion_main!(benches);
