//! Benchmarks for layout and vertex packing.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glyphmesh_render::TextureHandle;
use glyphmesh_text::{BitmapFont, FontRef, Glyph, TextAlign, TextBlock};

fn ascii_font() -> FontRef {
    let mut font = BitmapFont::new(TextureHandle::new(1, 512, 512), 18, 2);
    for (index, code) in (0x20u32..0x7f).enumerate() {
        let column = (index % 16) as i32;
        let row = (index / 16) as i32;
        font.insert_glyph(
            char::from_u32(code).unwrap(),
            Glyph {
                width: 9,
                advance: 10,
                u0: column * 10,
                v0: row * 18,
                u1: column * 10 + 9,
                v1: row * 18 + 18,
            },
        );
    }
    Arc::new(font)
}

fn sample_text(lines: usize, chars_per_line: usize) -> String {
    let line: String = ('a'..='z').cycle().take(chars_per_line).collect();
    vec![line; lines].join("\n")
}

fn bench_set_text(c: &mut Criterion) {
    let font = ascii_font();
    let mut group = c.benchmark_group("set_text");

    for (lines, chars) in [(1, 16), (4, 32), (32, 64), (128, 80)] {
        let text = sample_text(lines, chars);
        let glyphs = lines * chars;
        group.throughput(Throughput::Elements(glyphs as u64));

        let mut block = TextBlock::builder(font.clone())
            .capacity(glyphs)
            .build("")
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", lines, chars)),
            &text,
            |b, text| {
                b.iter(|| {
                    block.set_text(black_box(text)).unwrap();
                    black_box(block.draw_vertex_count())
                });
            },
        );
    }

    group.finish();
}

fn bench_alignment(c: &mut Criterion) {
    let font = ascii_font();
    let text = sample_text(16, 48);
    let mut group = c.benchmark_group("alignment");

    for (name, align) in [
        ("left", TextAlign::Left),
        ("center", TextAlign::Center),
        ("right", TextAlign::Right),
    ] {
        let mut block = TextBlock::builder(font.clone())
            .align(align)
            .capacity(16 * 48)
            .build("")
            .unwrap();

        group.bench_function(name, |b| {
            b.iter(|| {
                block.set_text(black_box(&text)).unwrap();
                black_box(block.draw_vertex_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set_text, bench_alignment);
criterion_main!(benches);
