use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use vterm_buffer::screen::Screen;

fn configure() -> Criterion {
    Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(300))
        .measurement_time(Duration::from_secs(1))
        .with_plots()
}

fn bench_print_throughput(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog\n".repeat(200);

    let mut group = c.benchmark_group("screen_print");
    group.throughput(Throughput::Elements(text.chars().count() as u64));

    group.bench_function(BenchmarkId::new("print_chars", text.len()), |b| {
        b.iter(|| {
            let mut screen = Screen::new(100, 40, 1000);
            for ch in text.chars() {
                if ch == '\n' {
                    screen.carriage_return();
                    screen.line_feed();
                } else {
                    screen.print(ch, 1);
                }
            }
        });
    });

    group.finish();
}

fn bench_line_feed_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_line_feed_scroll");

    group.bench_function("scroll_5000_lines", |b| {
        b.iter(|| {
            let mut screen = Screen::new(80, 24, 5000);
            for _ in 0..5000 {
                screen.carriage_return();
                screen.line_feed();
            }
        });
    });

    group.finish();
}

fn bench_insert_chars(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_insert_chars");

    group.bench_function("insert_chars_in_full_row", |b| {
        b.iter(|| {
            let mut screen = Screen::new(200, 24, 100);
            for ch in "a".repeat(200).chars() {
                screen.print(ch, 1);
            }
            screen.cursor_horizontal_absolute(1);
            for _ in 0..100 {
                screen.insert_chars(1);
            }
        });
    });

    group.finish();
}

fn bench_resize_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_resize");

    group.bench_with_input(BenchmarkId::new("shrink_rows", 10), &10usize, |b, &target| {
        b.iter(|| {
            let mut screen = Screen::new(80, 100, 2000);
            for _ in 0..100 {
                screen.carriage_return();
                screen.line_feed();
            }
            screen.resize(80, target);
        });
    });

    group.bench_with_input(BenchmarkId::new("grow_rows", 200), &200usize, |b, &target| {
        b.iter(|| {
            let mut screen = Screen::new(80, 24, 2000);
            for _ in 0..200 {
                screen.carriage_return();
                screen.line_feed();
            }
            screen.resize(80, target);
        });
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = configure();
    targets = bench_print_throughput, bench_line_feed_scroll, bench_insert_chars, bench_resize_reflow,
);

criterion_main!(benches);
