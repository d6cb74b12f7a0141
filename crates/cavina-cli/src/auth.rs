// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use cavina_api::{ApiClient, Credentials};
use cavina_common_secret::SecretString;
use cavina_common_storage::KeyValueStore;
use tracing::{debug, instrument, warn};

use crate::locale::{tr, tr_fmt};

/// Credentials-file key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Saved access token, if any. Unreadable credentials count as logged out.
pub fn load_token(store: &dyn KeyValueStore) -> Option<SecretString> {
	match store.get(TOKEN_KEY) {
		Ok(token) => token.filter(|t| !t.is_empty()).map(SecretString::new),
		Err(e) => {
			warn!(error = %e, "failed to read stored credentials");
			None
		}
	}
}

pub fn save_token(store: &dyn KeyValueStore, token: &SecretString) -> Result<()> {
	store
		.set(TOKEN_KEY, token.expose())
		.context("failed to save access token")
}

pub fn clear_token(store: &dyn KeyValueStore) -> Result<()> {
	store
		.remove(TOKEN_KEY)
		.context("failed to remove access token")
}

/// Read one line from `input` as the password, without the line terminator.
pub fn read_password(input: &mut impl BufRead) -> Result<SecretString> {
	let mut line = String::new();
	input.read_line(&mut line).context("failed to read password")?;
	let password = line.trim_end_matches(['\r', '\n']);
	if password.is_empty() {
		return Err(anyhow!("password must not be empty"));
	}
	Ok(SecretString::new(password))
}

fn prompt_password() -> Result<SecretString> {
	eprint!("{}", tr("auth.password_prompt"));
	io::stderr().flush().ok();
	read_password(&mut io::stdin().lock())
}

#[instrument(skip_all, fields(username = %username))]
pub async fn login(
	client: &ApiClient,
	store: &dyn KeyValueStore,
	username: &str,
	password: Option<String>,
) -> Result<()> {
	let password = match password {
		Some(p) => SecretString::new(p),
		None => prompt_password()?,
	};

	let token = client
		.login(&Credentials::new(username, password))
		.await
		.context("login failed")?;
	if !token.is_bearer() {
		warn!(token_type = %token.token_type, "server issued a non-bearer token");
	}

	save_token(store, &token.access_token)?;
	debug!("access token saved");

	println!("{}", tr_fmt("auth.login_success", &[("username", username)]));
	Ok(())
}

pub async fn logout(client: &mut ApiClient, store: &dyn KeyValueStore) -> Result<()> {
	client.logout().await?;
	clear_token(store)?;
	println!("{}", tr("auth.logged_out"));
	Ok(())
}
