use std::time::Duration;

use criterion::{BatchSize, Criterion};
use geo::{CoverageNum, DenseCoverage, GeoReference, NodataValues, Point, RasterSize};
use geo_types::Geometry;
use num::NumCast;

const RASTER_ROWS: usize = 768;
const RASTER_COLS: usize = 1024;
const POINT_COUNT: usize = 100_000;

fn bench_name<T: CoverageNum>(name: &str) -> String {
    format!("{}_{}", name, std::any::type_name::<T>())
}

fn create_coverage<T: CoverageNum>() -> DenseCoverage<T> {
    let georef = GeoReference::without_spatial_reference(
        RasterSize::with_rows_cols(RASTER_ROWS, RASTER_COLS),
        [0.0, 1.0, 0.0, RASTER_ROWS as f64, 0.0, -1.0],
    );

    let data = (0..RASTER_ROWS * RASTER_COLS)
        .map(|i| NumCast::from(i % 100).unwrap())
        .collect();

    DenseCoverage::single_band(georef, data, NodataValues::single(0.0)).unwrap()
}

fn create_points() -> Vec<Option<Geometry<f64>>> {
    // Include points outside of the extent and null points
    (0..POINT_COUNT)
        .map(|i| match i % 50 {
            0 => None,
            _ => Some(Geometry::Point(Point::new(
                ((i * 7) % (RASTER_COLS + 20)) as f64 - 10.0,
                ((i * 13) % (RASTER_ROWS + 20)) as f64 - 10.0,
            ))),
        })
        .collect()
}

pub fn bench_sampling<T: CoverageNum>(c: &mut Criterion) {
    let coverage = create_coverage::<T>();
    let points = create_points();

    let mut group = c.benchmark_group(bench_name::<T>("sampling"));
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function(bench_name::<T>("values"), |b| {
        b.iter(|| geo::values(&coverage, &points, 1).unwrap());
    });

    group.bench_function(bench_name::<T>("value"), |b| {
        b.iter_batched_ref(
            || points.clone(),
            |points| {
                points
                    .iter()
                    .map(|p| geo::value(&coverage, p.as_ref(), 1).unwrap())
                    .collect::<Vec<_>>()
            },
            BatchSize::LargeInput,
        );
    });

    #[cfg(feature = "rayon")]
    group.bench_function(bench_name::<T>("values_par"), |b| {
        let config = geo::RuntimeConfiguration::default();
        b.iter(|| geo::values_par(&coverage, &points, 1, &config).unwrap());
    });

    group.finish();
}

criterion::criterion_group!(benches_u8, bench_sampling<u8>);
criterion::criterion_group!(benches_i32, bench_sampling<i32>);
criterion::criterion_group!(benches_f32, bench_sampling<f32>);
criterion::criterion_main!(benches_u8, benches_i32, benches_f32);
