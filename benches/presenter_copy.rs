use criterion::{Criterion, criterion_group, criterion_main};
use fractal_viewer::copy_rgb_to_rgba;
use std::hint::black_box;

fn bench_presenter_copy(c: &mut Criterion) {
    let display_size = 600usize;
    let src = vec![0x7f_u8; display_size * display_size * 3];
    let mut dst = vec![0_u8; display_size * display_size * 4];

    c.bench_function("copy_rgb_to_rgba_600x600", |b| {
        b.iter(|| {
            copy_rgb_to_rgba(black_box(&src), black_box(&mut dst));
        });
    });
}

criterion_group!(benches, bench_presenter_copy);
criterion_main!(benches);
