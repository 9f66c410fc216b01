use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxipuny::punycode::{decode, encode};

/// Deterministic pseudo-random code points across the BMP and astral planes.
fn gen_code_points(count: usize, seed: u64) -> Vec<u32> {
    let mut s = seed;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        let v = (s >> 33) as u32;
        out.push(match v % 4 {
            0 => v % 0x80,                      // ASCII
            1 => 0x80 + v % 0x780,              // Latin/Greek/Cyrillic band
            2 => 0x4E00 + v % 0x5000,           // CJK band
            _ => 0x1_0000 + v % 0x1_0000,       // astral
        });
    }
    out
}

const KOREAN: &str = "989aomsvi5e83db1d2a355cv1e0vak1dwrv93d5xbh15a0dt30a5jpsd879ccm6fea98c";

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &count in &[16usize, 256, 4096] {
        let cps = gen_code_points(count, 42);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &cps, |b, cps| {
            b.iter(|| encode(black_box(cps), None, usize::MAX).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("rfc_korean", |b| {
        b.iter(|| decode::<u32>(black_box(KOREAN.as_bytes()), usize::MAX).unwrap());
    });

    for &count in &[16usize, 256, 4096] {
        let encoded = encode(&gen_code_points(count, 42), None, usize::MAX).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &encoded, |b, enc| {
            b.iter(|| decode::<u32>(black_box(enc), usize::MAX).unwrap());
        });
    }
    group.finish();
}

fn bench_widths(c: &mut Criterion) {
    // Same input at different scalar widths; the codec is monomorphized per
    // width, so this shows what the abstraction costs.
    let cps32 = gen_code_points(1024, 7);
    let cps64: Vec<u64> = cps32.iter().map(|&v| u64::from(v)).collect();

    let mut group = c.benchmark_group("encode_width");
    group.bench_function("u32", |b| {
        b.iter(|| encode(black_box(&cps32), None, usize::MAX).unwrap());
    });
    group.bench_function("u64", |b| {
        b.iter(|| encode(black_box(&cps64), None, usize::MAX).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_widths);
criterion_main!(benches);
