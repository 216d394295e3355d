//! Benchmarks for scratchio.
//!
//! Run with:
//!     cargo bench

use std::io::{Cursor, Read, Write};
use std::sync::Arc;
use std::thread;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use scratchio::{Scratch, least_power_of_two};

fn bench_sizer(c: &mut Criterion) {
    c.bench_function("least_power_of_two", |b| {
        let mut n = 1u64;
        b.iter(|| {
            n = n.wrapping_mul(6364136223846793005).wrapping_add(1) >> 2;
            black_box(least_power_of_two(black_box(n)))
        });
    });
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in [64, 1024, 64 * 1024] {
        let text = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));

        let scratch = Scratch::default();
        group.bench_function(format!("scratch_{}b", size), |b| {
            b.iter(|| {
                let mut source = Cursor::new(black_box(text.as_bytes()));
                black_box(scratch.read(&mut source, size).unwrap())
            });
        });

        // What callers write without this crate
        group.bench_function(format!("alloc_{}b", size), |b| {
            b.iter(|| {
                let mut source = Cursor::new(black_box(text.as_bytes()));
                let mut buf = vec![0u8; size];
                let n = source.read(&mut buf).unwrap();
                buf.truncate(n);
                black_box(String::from_utf8_lossy(&buf).into_owned())
            });
        });
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for size in [64, 1024, 64 * 1024] {
        let text = "y".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));

        let scratch = Scratch::default();
        group.bench_function(format!("scratch_{}b", size), |b| {
            let mut sink: Vec<u8> = Vec::with_capacity(size);
            b.iter(|| {
                sink.clear();
                black_box(scratch.write(&mut sink, black_box(&text)).unwrap())
            });
        });

        group.bench_function(format!("direct_{}b", size), |b| {
            let mut sink: Vec<u8> = Vec::with_capacity(size);
            b.iter(|| {
                sink.clear();
                black_box(sink.write(black_box(text.as_bytes())).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");
    let text = "z".repeat(4096);

    for threads in [2, 8] {
        group.bench_function(format!("read_{}_threads", threads), |b| {
            let scratch = Arc::new(Scratch::default());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let scratch = Arc::clone(&scratch);
                        let text = text.clone();
                        thread::spawn(move || {
                            for _ in 0..100 {
                                let mut source = Cursor::new(text.as_bytes());
                                black_box(scratch.read(&mut source, text.len()).unwrap());
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sizer, bench_read, bench_write, bench_contended);
criterion_main!(benches);
