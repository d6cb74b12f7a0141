// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Cavina.
//!
//! Every outgoing request carries the same `User-Agent` so backend logs can
//! tell client builds apart.

mod client;

pub use client::{builder, builder_with_timeout, new_client, platform, user_agent};
