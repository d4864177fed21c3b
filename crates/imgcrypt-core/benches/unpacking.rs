use criterion::{criterion_group, criterion_main, Criterion};
use imgcrypt_core::{pack_bytes, unpack_image, CodecOptions};

pub fn unpacking(c: &mut Criterion) {
    c.bench_function("Unpacking", |b| {
        let payload = std::fs::read("src/lib.rs").expect("Input file is not readable.");
        let packed = pack_bytes(&payload, &CodecOptions::default()).expect("Cannot pack payload");

        b.iter(|| unpack_image(packed.artifact.image()).expect("Cannot unpack payload"))
    });
}

criterion_group!(benches, unpacking);
criterion_main!(benches);
