//! Static export driver for the hello-world page.
//!
//! Composes the page content into the document shell, renders the full
//! document, and writes it to `<out-dir>/index.html`. Serving the result is
//! left to whatever hosts the file.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use dockerhoster_hello::app::{HomePage, METADATA, RootLayout};
use dockerhoster_hello::component::Component;
use dockerhoster_hello::export::export_document;
use dockerhoster_hello::ssr::{SsrOptions, SsrRenderer};

#[derive(Parser)]
#[command(name = "dockerhoster-hello")]
#[command(about = "Renders the DockerHoster hello-world page to static HTML", long_about = None)]
#[command(version)]
struct Cli {
	/// Directory to write index.html into
	#[arg(short, long, value_name = "DIR", default_value = "out")]
	out_dir: PathBuf,

	/// Print the document to stdout instead of writing a file
	#[arg(long)]
	stdout: bool,

	/// Collapse whitespace in the rendered document
	#[arg(long)]
	minify: bool,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	if let Err(err) = run(&cli) {
		eprintln!("error: {err:#}");
		process::exit(1);
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let mut options = SsrOptions::new();
	if cli.minify {
		options = options.minify();
	}
	let renderer = SsrRenderer::with_options(options);

	let document = RootLayout::new(HomePage.render()).render();
	let html = renderer.render_document(&document, &METADATA);

	if cli.stdout {
		println!("{html}");
		return Ok(());
	}

	let path = export_document(&cli.out_dir, &html)
		.with_context(|| format!("exporting to {}", cli.out_dir.display()))?;
	println!("Wrote {}", path.display());
	Ok(())
}

fn init_tracing(verbosity: u8) {
	let default = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.init();
}
