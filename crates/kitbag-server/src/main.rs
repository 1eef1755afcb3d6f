// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kitbag catalog server binary.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use kitbag_server::{build_translator, create_app_state, create_router, version};
use kitbag_server_config::ServerConfig;
use kitbag_server_db::AdminSessionRepository;
use kitbag_server_translate::Translator;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Filter used until the configured `logging.level` is known.
const STARTUP_FILTER: &str = "info";

/// Kitbag server - vintage football shirt catalog.
#[derive(Parser, Debug)]
#[command(name = "kitbag-server", about = "Vintage football shirt catalog server", version)]
struct Args {
	/// TOML configuration file (default: /etc/kitbag/server.toml)
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run the HTTP server (the default)
	Serve,
	/// Show version and build information
	Version,
	/// Print an argon2 hash for the admin password
	HashPassword {
		/// Read from stdin when omitted
		password: Option<String>,
	},
	/// Translate English text to Italian with the configured OpenRouter settings
	Translate {
		#[arg(required = true)]
		text: Vec<String>,
	},
}

fn load_config(path: Option<PathBuf>) -> Result<ServerConfig, kitbag_server_config::ConfigError> {
	match path {
		Some(path) => kitbag_server_config::load_config_with_file(path),
		None => kitbag_server_config::load_config(),
	}
}

/// `RUST_LOG` wins over the configured level.
fn filter_directives(rust_log: Option<String>, configured: &str) -> String {
	rust_log
		.filter(|v| !v.trim().is_empty())
		.unwrap_or_else(|| configured.to_string())
}

fn env_filter(directives: &str) -> EnvFilter {
	EnvFilter::try_new(directives).unwrap_or_else(|e| {
		eprintln!("invalid log filter '{directives}': {e}; using '{STARTUP_FILTER}'");
		EnvFilter::new(STARTUP_FILTER)
	})
}

/// Install the subscriber before configuration loads so its messages are
/// kept. The returned handle swaps in the configured filter afterwards.
fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
	let directives = filter_directives(std::env::var("RUST_LOG").ok(), STARTUP_FILTER);
	let (filter, handle) = reload::Layer::new(env_filter(&directives));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer())
		.init();
	handle
}

fn apply_log_level(handle: &reload::Handle<EnvFilter, Registry>, level: &str) {
	let directives = filter_directives(std::env::var("RUST_LOG").ok(), level);
	if let Err(e) = handle.reload(env_filter(&directives)) {
		tracing::warn!(error = %e, "failed to apply configured log level");
	}
}

fn hash_password(password: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
	let password = match password {
		Some(p) => p,
		None => {
			eprint!("Admin password: ");
			std::io::stderr().flush()?;
			let mut line = String::new();
			std::io::stdin().lock().read_line(&mut line)?;
			line.trim_end_matches(['\r', '\n']).to_string()
		}
	};
	if password.is_empty() {
		return Err("password must not be empty".into());
	}

	let hash = kitbag_server_auth::hash_password(&password)?;
	println!("{hash}");
	println!();
	println!("Add this to your environment:");
	println!("KITBAG_SERVER_ADMIN_PASSWORD_HASH='{hash}'");
	Ok(())
}

async fn translate(config: &ServerConfig, text: &str) -> Result<(), Box<dyn std::error::Error>> {
	let client = build_translator(&config.translation)?;
	let italian = client.translate_to_italian(text).await?;
	println!("{italian}");
	Ok(())
}

fn spawn_session_sweeper(sessions: AdminSessionRepository) {
	tokio::spawn(async move {
		let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
		loop {
			interval.tick().await;
			if let Err(e) = sessions.delete_expired(chrono::Utc::now()).await {
				tracing::warn!(error = %e, "failed to remove expired admin sessions");
			}
		}
	});
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		uploads = %config.uploads.dir.display(),
		admin_prefix = %config.auth.admin_prefix,
		"starting kitbag-server"
	);

	// SQLite creates the file but not its directory.
	if let Some(parent) = config.database.file_path().as_deref().and_then(std::path::Path::parent) {
		if !parent.as_os_str().is_empty() {
			tokio::fs::create_dir_all(parent).await?;
		}
	}

	let pool = kitbag_server_db::create_pool(&config.database.url).await?;
	kitbag_server_db::run_migrations(&pool).await?;

	let state = create_app_state(pool.clone(), &config);
	state.uploads.ensure_root().await?;
	if state.auth.admin_password_hash.is_none() {
		tracing::warn!("no admin password hash configured; back-office login is disabled");
	}

	spawn_session_sweeper(AdminSessionRepository::new(pool));

	let app = create_router(state, config.uploads.max_request_bytes).layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);
	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let command = match args.command.unwrap_or(Command::Serve) {
		Command::Version => {
			println!("{}", version::format_version_info());
			return Ok(());
		}
		Command::HashPassword { password } => return hash_password(password),
		other => other,
	};

	dotenvy::dotenv().ok();
	let log_handle = init_tracing();
	let config = load_config(args.config)?;
	apply_log_level(&log_handle, &config.logging.level);

	match command {
		Command::Translate { text } => translate(&config, &text.join(" ")).await,
		_ => serve(config).await,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rust_log_overrides_configured_level() {
		assert_eq!(filter_directives(Some("debug".to_string()), "warn"), "debug");
		assert_eq!(filter_directives(None, "warn"), "warn");
		assert_eq!(filter_directives(Some("  ".to_string()), "warn"), "warn");
	}

	#[test]
	fn invalid_directives_fall_back_to_startup_filter() {
		assert_eq!(env_filter("kitbag_server=loud").to_string(), STARTUP_FILTER);
		assert_eq!(env_filter("warn").to_string(), "warn");
	}
}
