use std::process;

use clap::Parser;
use mculine_cli::MculineCli;
use mculine_core::LineConfig;
use mculine_core::MculineResult;
use mculine_core::UpdateResult;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MCULINE_LOG=debug`.
const LOG_ENV: &str = "MCULINE_LOG";

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MculineCli::parse();

	// Respect the NO_COLOR env var.
	let use_color = std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(use_color);

	if let Err(e) = run(&args) {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

fn init_tracing(use_color: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn run(args: &MculineCli) -> MculineResult<()> {
	let config = LineConfig::new(&args.mcu_line, &args.core_path)?;
	let updates = mculine_core::run(&config)?;

	print_missing_targets(&updates);
	println!(
		"Updated {} dispatch file(s) for {}.",
		updates.patched_files.len(),
		colored!(config.variant, bold)
	);

	Ok(())
}

fn print_missing_targets(updates: &UpdateResult) {
	for missing in &updates.missing_targets {
		println!(
			"{} {} is not found in the target path.",
			colored!("warning:", yellow),
			missing.target
		);
	}
}
