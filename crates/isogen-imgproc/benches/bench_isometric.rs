use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use isogen_image::Image;
use isogen_imgproc::isometric::process;

fn bench_isometric_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("IsometricProcess");
    group.sample_size(10);

    for (width, height) in [(128, 128), (256, 256)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 4>::from_size_val(image_size, 255u8).unwrap();

        group.bench_with_input(
            BenchmarkId::new("all_variants", &parameter_string),
            &image,
            |b, i| b.iter(|| process(black_box(i))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_isometric_process);
criterion_main!(benches);
