use criterion::{criterion_group, criterion_main, Criterion};
use elevation::{geo::Coord, Profile, Synth};

fn profile_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Profile Synthesis");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();

    let start = Coord {
        x: -71.30830716441369,
        y: 44.28309806603165,
    };

    let end = Coord {
        x: -71.2972073283768,
        y: 44.25628098424278,
    };

    group.bench_with_input("51 samples", &(start, end), |b, (start, end)| {
        b.iter(|| {
            let mut synth = Synth::seeded(42);
            rt.block_on(Profile::new(*start, *end, &mut synth)).unwrap()
        })
    });
}

criterion_group!(benches, profile_synthesis);
criterion_main!(benches);
