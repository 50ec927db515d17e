//! Vitrine command line client.
//!
//! Runs predictive and regular storefront searches against a configured
//! store, or drives an interactive predictive session from stdin.

mod config;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use vitrine_search::{DisplayState, SearchSession, present};
use vitrine_storefront::pagination::{Direction, Pagination};
use vitrine_storefront::{PredictiveRequest, SearchProvider, StorefrontClient};

use crate::config::{AppConfig, TOKEN_ENV};

#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Storefront predictive search client")]
struct Args {
	/// Config file (defaults to the user config directory)
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// One predictive search
	Predictive {
		term: String,
		/// Results per entity group
		#[arg(short, long)]
		limit: Option<u32>,
	},
	/// One page of full search results
	Search {
		term: String,
		/// Page cursor printed by a previous search
		#[arg(long)]
		cursor: Option<String>,
		/// Page backwards from the cursor
		#[arg(long)]
		previous: bool,
	},
	/// Type lines as keystroke batches; `:submit`, `:clear` and `:quit` are commands
	Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	setup_tracing(args.verbose);

	let config = AppConfig::resolve(args.config.as_deref())?.with_token_override(std::env::var(TOKEN_ENV).ok());
	config.validate()?;
	let client = StorefrontClient::new(&config.storefront).context("building storefront client")?;
	info!(endpoint = %client.endpoint(), "vitrine starting");

	match args.command {
		Command::Predictive { term, limit } => {
			let request = PredictiveRequest::new(term.clone(), limit.unwrap_or(config.search.limit));
			let result = client.predictive_search(&request).await?;
			print!("{}", render::predictive(&present(&DisplayState::Resolved { term, result })));
		}
		Command::Search { term, cursor, previous } => {
			let pagination = Pagination {
				cursor,
				direction: if previous { Direction::Previous } else { Direction::Next },
			};
			let search = client.search(&term, &pagination).await?;
			print!("{}", render::regular(&search));
		}
		Command::Interactive => interactive(client, &config).await?,
	}
	Ok(())
}

async fn interactive(client: StorefrontClient, config: &AppConfig) -> anyhow::Result<()> {
	let session = SearchSession::spawn(client, config.search);
	let snapshot = session.snapshot();
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut input = String::new();

	loop {
		tokio::select! {
			line = lines.next_line() => {
				let Some(line) = line.context("reading stdin")? else {
					break;
				};
				match line.trim() {
					":quit" => break,
					":submit" => session.submit(input.clone())?,
					":clear" => {
						input.clear();
						session.clear()?;
					}
					_ => {
						input = line;
						session.input(input.clone())?;
					}
				}
			}
			() = snapshot.changed() => {
				let state = snapshot.current();
				debug!(term = state.term().unwrap_or_default(), "interactive.render");
				print!("{}", render::predictive(&present(&state)));
			}
		}
	}

	session.shutdown().await;
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let default_filter = if verbose { "vitrine=debug,warn" } else { "vitrine=info,warn" };

	if let Some(log_dir) = std::env::var("VITRINE_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("vitrine.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry().with(filter).with(file_layer).init();
			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
