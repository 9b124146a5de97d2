use core::convert::TryFrom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mlx90615::calculations::{emissivity_to_raw, raw_to_celsius, raw_to_emissivity};
use mlx90615::{EmissivityRegister, TemperatureRegister};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Register Decoding");

    group.bench_with_input("Temperature f32", &[0xE8u8, 0x8B], |b, bytes| {
        b.iter(|| {
            let register = TemperatureRegister::try_from(&black_box(bytes)[..]).unwrap();
            register.celsius::<f32>()
        })
    });
    group.bench_with_input("Temperature f64", &0x0BE8u16, |b, word| {
        b.iter(|| raw_to_celsius::<f64>(black_box(*word)))
    });
    group.bench_with_input("Emissivity", &[0xCDu8, 0x3C], |b, bytes| {
        b.iter(|| {
            let register = EmissivityRegister::try_from(&black_box(bytes)[..]).unwrap();
            register.emissivity::<f32>()
        })
    });
    group.finish();

    let mut group = c.benchmark_group("Register Encoding");
    group.bench_with_input("Emissivity", &0.95f32, |b, emissivity| {
        b.iter(|| {
            let raw = emissivity_to_raw(black_box(*emissivity)).unwrap();
            raw_to_emissivity::<f32>(raw)
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
