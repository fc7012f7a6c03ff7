//! Benchmark suite for animation playback
//!
//! Measures the per-tick cost of `update` for every direction, the catch-up
//! path where one update crosses many frames, section switching, and sheet
//! parsing.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pixanim_benches::{full_sections, generate_sheet, sizes, uniform_frames, varied_frames};
use pixanim_types::{anim::Animation, sheet::AnimationSheet};
use std::hint::black_box;

/// Benchmark a 60 Hz tick for each direction
fn bench_tick(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_tick");

	for name in ["forward", "reverse", "ping_pong", "reverse_ping_pong"] {
		let mut anim = match Animation::new(uniform_frames(sizes::MEDIUM, 50), full_sections(sizes::MEDIUM)) {
			Ok(anim) => anim,
			Err(err) => {
				eprintln!("Warning: Could not build animation: {err}");
				continue;
			}
		};
		anim.set_looping(true);
		if anim.play_section(name).is_err() {
			continue;
		}

		group.bench_function(BenchmarkId::new("update_16ms", name), |b| {
			b.iter(|| black_box(anim.update(black_box(16.0))));
		});
	}

	group.finish();
}

/// Benchmark a single update that crosses many frame boundaries
fn bench_catch_up(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_catch_up");

	for size in [sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
		let frames = varied_frames(size);
		let cycle_ms: f64 = frames.iter().map(|frame| f64::from(frame.duration_ms())).sum();
		let Ok(mut anim) = Animation::from_frames(frames) else {
			continue;
		};
		anim.set_looping(true);
		anim.play();

		group.throughput(Throughput::Elements(size as u64));
		group.bench_with_input(BenchmarkId::new("one_cycle", size), &cycle_ms, |b, &cycle_ms| {
			b.iter(|| black_box(anim.update(black_box(cycle_ms))));
		});
	}

	group.finish();
}

/// Benchmark switching between named sections
fn bench_section_switch(c: &mut Criterion) {
	let sheet = generate_sheet(sizes::LARGE, 8);
	let names: Vec<String> = sheet.sections.iter().map(|section| section.name().to_string()).collect();
	let Ok(mut anim) = sheet.into_animation() else {
		return;
	};

	c.bench_function("anim_play_section", |b| {
		let mut next = 0;
		b.iter(|| {
			let result = anim.play_section(black_box(&names[next]));
			next = (next + 1) % names.len();
			black_box(result)
		});
	});
}

/// Benchmark parsing a sheet from JSON
fn bench_sheet_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_parse");

	for size in [sizes::MEDIUM, sizes::LARGE] {
		let json = match serde_json::to_string(&generate_sheet(size, 8)) {
			Ok(json) => json,
			Err(err) => {
				eprintln!("Warning: Could not serialize sheet: {err}");
				continue;
			}
		};

		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::new("json", size), &json, |b, json| {
			b.iter(|| black_box(AnimationSheet::from_json_str(black_box(json))));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_tick, bench_catch_up, bench_section_switch, bench_sheet_parse);

criterion_main!(benches);
