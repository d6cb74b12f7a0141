// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cavina CLI - inventory client
//!
//! Browses location catalogs and products, records stock adjustments and
//! manages the UI language used for all output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cavina_api::{ApiClient, StockAdjustment};
use cavina_cli_config::{
	load_config,
	runtime::{LogFormat, LogLevel, LoggingConfig},
	CavinaConfig, CliOverrides,
};
use cavina_common_secret::SecretString;
use cavina_common_storage::FileKeyValueStore;

mod auth;
mod commands;
mod locale;

/// Cavina - inventory client
#[derive(Parser, Debug)]
#[command(name = "cavina", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Inventory server URL (overrides config)
	#[arg(long)]
	server_url: Option<String>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<LogLevel>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show or change the UI language
	Locale {
		#[command(subcommand)]
		command: LocaleCommand,
	},
	/// Show the catalog of a location
	Catalog {
		/// Location ID
		location: i64,
	},
	/// List all products
	Products,
	/// Stock operations
	Stock {
		#[command(subcommand)]
		command: StockCommand,
	},
	/// Log in and store an access token
	Login {
		#[arg(short, long)]
		username: String,
		/// Password; prompted for on stdin when absent
		#[arg(long, env = "CAVINA_PASSWORD", hide_env_values = true)]
		password: Option<String>,
	},
	/// Forget the stored access token
	Logout,
}

#[derive(Subcommand, Debug)]
enum LocaleCommand {
	/// Print the active language
	Show,
	/// List available languages
	List,
	/// Switch to another language
	Set {
		/// Language code, e.g. "es"
		code: String,
	},
}

#[derive(Subcommand, Debug)]
enum StockCommand {
	/// Add or remove stock of a product at a location
	Adjust {
		#[arg(long)]
		location: i64,
		#[arg(long)]
		product: i64,
		/// Signed quantity; negative values remove stock
		#[arg(long, allow_hyphen_values = true)]
		quantity: f64,
		#[arg(long)]
		unit: String,
	},
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		CliOverrides {
			config_file: args.config.clone(),
			server_url: args.server_url.clone(),
			log_level: args.log_level,
			log_format: args.json_logs.then_some(LogFormat::Json),
		}
	}
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(logging.level.as_filter()));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn create_api_client(config: &CavinaConfig, token: Option<SecretString>) -> Result<ApiClient> {
	let mut client = ApiClient::with_timeout(config.server.url.clone(), config.timeout())
		.context("failed to create API client")?
		.with_locale(locale::get_locale());
	if let Some(token) = token {
		client = client.with_token(token);
	}
	Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config(CliOverrides::from(&args)).context("failed to load configuration")?;
	init_tracing(&config.logging);

	locale::init_locale_store(&config)?;
	debug!(
		server_url = %config.server.url,
		lang = %locale::get_locale(),
		"starting cavina"
	);

	let credentials = FileKeyValueStore::new(config.storage.credentials_file.clone());

	match args.command {
		Command::Locale { command } => match command {
			LocaleCommand::Show => {
				locale::show();
				Ok(())
			}
			LocaleCommand::List => {
				locale::list();
				Ok(())
			}
			LocaleCommand::Set { code } => locale::set(&code),
		},
		Command::Catalog { location } => {
			let client = create_api_client(&config, auth::load_token(&credentials))?;
			commands::catalog(&client, location).await
		}
		Command::Products => {
			let client = create_api_client(&config, auth::load_token(&credentials))?;
			commands::products(&client).await
		}
		Command::Stock {
			command:
				StockCommand::Adjust {
					location,
					product,
					quantity,
					unit,
				},
		} => {
			let client = create_api_client(&config, auth::load_token(&credentials))?;
			let adjustment = StockAdjustment {
				location_id: location,
				product_id: product,
				quantity,
				unit,
			};
			debug!(?adjustment, "adjusting stock");
			commands::adjust_stock(&client, adjustment).await
		}
		Command::Login { username, password } => {
			let client = create_api_client(&config, None)?;
			auth::login(&client, &credentials, &username, password).await
		}
		Command::Logout => {
			let mut client = create_api_client(&config, auth::load_token(&credentials))?;
			auth::logout(&mut client, &credentials).await
		}
	}
}
