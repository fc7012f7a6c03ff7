//! Sprite sheet playback utility.
//!
//! Loads an animation sheet (`.json`, `.yaml` or `.yml`) and drives it with a
//! fixed-step clock, printing the frame timeline and every playback event.
//! Provides two subcommands:
//! - `info`: list the frames and sections of a sheet.
//! - `play`: simulate playback of one section and print the timeline.
//!
//! Playback settings come from an optional TOML file, overridden by
//! `PIXANIM_*` environment variables, overridden by command-line flags:
//!
//! ```toml
//! looping = true
//! speed = 1.5
//! frame_changed_on_finish = false
//! ```

use std::{
	cell::RefCell,
	path::{Path, PathBuf},
	rc::Rc,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use pixanim::prelude::*;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Info(opts) => run_info(opts),
		Command::Play(opts) => run_play(opts),
	}
}

#[derive(Parser)]
#[command(name = "sprite_player")]
#[command(author = "pixanim project")]
#[command(version)]
#[command(about = "Inspect and simulate sprite sheet animations", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// List the frames and sections of a sheet
	Info(InfoArgs),
	/// Simulate playback of a section with a fixed-step clock
	Play(PlayArgs),
}

#[derive(Args)]
struct InfoArgs {
	/// Path to the animation sheet
	#[arg(value_name = "SHEET")]
	sheet: PathBuf,
}

#[derive(Args)]
struct PlayArgs {
	/// Path to the animation sheet
	#[arg(value_name = "SHEET")]
	sheet: PathBuf,

	/// Section to play
	#[arg(short, long, default_value = DEFAULT_SECTION)]
	section: String,

	/// Optional TOML file with playback settings
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Force looping on, whatever the settings say
	#[arg(short, long, default_value_t = false)]
	looping: bool,

	/// Override the speed multiplier
	#[arg(long, value_name = "FACTOR")]
	speed: Option<f64>,

	/// Clock step in milliseconds
	#[arg(long, value_name = "MS", default_value_t = 16.0)]
	tick_ms: f64,

	/// Number of clock steps to simulate
	#[arg(short, long, value_name = "COUNT", default_value_t = 120)]
	ticks: usize,

	/// Atlas offset of the sheet as `X,Y`
	#[arg(long, value_name = "X,Y", value_parser = parse_point)]
	offset: Option<Point>,
}

fn parse_point(value: &str) -> Result<Point, String> {
	let (x, y) = value.split_once(',').ok_or_else(|| format!("expected X,Y, got {value}"))?;
	let x = x.trim().parse().map_err(|err| format!("invalid x: {err}"))?;
	let y = y.trim().parse().map_err(|err| format!("invalid y: {err}"))?;
	Ok(Point::new(x, y))
}

fn run_info(args: InfoArgs) -> Result<()> {
	let sheet = open_sheet(&args.sheet)?;

	println!("Sheet: {}", args.sheet.display());
	println!("Frames: {} ({} ms total)", sheet.frames.len(), sheet.total_duration_ms());
	for (index, frame) in sheet.frames.iter().enumerate() {
		println!("  [{index:>3}] {frame}");
	}

	let animation = sheet.into_animation().context("Sheet tables are invalid")?;
	println!("Sections: {}", animation.sections().len());
	for section in animation.sections() {
		println!("  {section}");
	}

	Ok(())
}

fn run_play(args: PlayArgs) -> Result<()> {
	if !args.tick_ms.is_finite() || args.tick_ms <= 0.0 {
		bail!("Clock step must be a positive number of milliseconds, got {}", args.tick_ms);
	}

	let mut config = load_config(args.config.as_deref())?;
	if args.looping {
		config.looping = true;
	}
	if let Some(speed) = args.speed {
		config.speed = speed;
	}
	debug!("Playback settings: {config:?}");

	let sheet = open_sheet(&args.sheet)?;
	let animation = sheet
		.into_animation_with_config(&config)
		.context("Failed to build animation from sheet")?;

	let mut sprite = AnimatedSprite::with_offset(
		args.sheet.display().to_string(),
		animation,
		args.offset.unwrap_or(Point::ZERO),
	);

	let finished = Rc::new(RefCell::new(0usize));
	let counter = Rc::clone(&finished);
	sprite.subscribe(move |event: &PlaybackEvent| {
		if event.is_finished() {
			*counter.borrow_mut() += 1;
		}
	});

	sprite
		.play_section(&args.section)
		.with_context(|| format!("Cannot play section {}", args.section))?;
	info!(
		"Playing {} ({}), looping={}, speed={}",
		sprite.active_section(),
		sprite.texture(),
		sprite.looping(),
		sprite.speed()
	);
	print_tick(0, 0.0, &sprite, &[]);

	for tick in 1..=args.ticks {
		let events = sprite.update(args.tick_ms)?;
		if !events.is_empty() {
			print_tick(tick, tick as f64 * args.tick_ms, &sprite, &events);
		}
		if sprite.needs_restart() {
			info!("Section finished after {tick} ticks");
			break;
		}
	}

	println!("Finished events: {}", finished.borrow());
	Ok(())
}

fn open_sheet(path: &Path) -> Result<AnimationSheet> {
	if !path.exists() {
		bail!("Sheet {} does not exist", path.display());
	}
	AnimationSheet::open(path).with_context(|| format!("Failed to load sheet {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<PlaybackConfig> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
	}

	let settings = builder
		.add_source(config::Environment::with_prefix("PIXANIM"))
		.build()
		.context("Failed to read playback settings")?;
	let config: PlaybackConfig =
		settings.try_deserialize().context("Invalid playback settings")?;
	config.validate()?;

	Ok(config)
}

fn print_tick(tick: usize, elapsed_ms: f64, sprite: &AnimatedSprite<String>, events: &[PlaybackEvent]) {
	let events = events.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
	println!(
		"{tick:>5} {elapsed_ms:>9.1}ms frame {:>3} {:?} src {:?} {events}",
		sprite.frame_index(),
		sprite.step_direction(),
		sprite.source_rectangle(),
	);
}
