use std::num::NonZeroUsize;

use anyhow::Result;
use bars_core::{ComparisonChart, RenderOptions, ScoreTable};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let chart = ComparisonChart::new(ScoreTable::model_comparison().expect("valid table"));
    for &(dpi, n) in &[(72.0f32, 50usize), (150.0, 50), (150.0, 500)] {
        group.bench_function(format!("dpi{dpi}_n{n}"), |b| {
            let mut opts = RenderOptions::with_dpi(dpi);
            opts.draw_labels = false;
            opts.segments = NonZeroUsize::new(n).expect("non-zero");
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts, None)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
