use criterion::{black_box, criterion_group, criterion_main, Criterion};

use planar_transform::{combine, learn_affine, rotating, scaling, transform_points, translating};

fn bench_transform_points(c: &mut Criterion) {
    let m = combine(&[rotating(20.0), translating(7.0, 7.0), scaling(0.5, 0.5)]).unwrap();
    let points = (0..10_000)
        .map(|i| [i as f64 * 0.1, i as f64 * 0.2])
        .collect::<Vec<_>>();

    c.bench_function("transform_points_10k", |b| {
        b.iter(|| transform_points(black_box(&m), black_box(&points)))
    });
}

fn bench_learn_affine(c: &mut Criterion) {
    let src = [[12.0, 7.0], [230.0, 41.0], [105.0, 399.0]];
    let m = combine(&[scaling(2.0, -1.5), translating(88.0, -7.0), rotating(125.0)]).unwrap();
    let dst_vec = transform_points(&m, &src);
    let dst = [dst_vec[0], dst_vec[1], dst_vec[2]];

    c.bench_function("learn_affine", |b| {
        b.iter(|| learn_affine(black_box(&src), black_box(&dst)))
    });
}

criterion_group!(benches, bench_transform_points, bench_learn_affine);
criterion_main!(benches);
