// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # betterrest-observability
//!
//! Logging setup shared by the BetterRest binaries, with per-crate debug flag
//! support.
//!
//! ## Features
//! - `file-logging`: JSON log files in timestamped run folders (desktop only)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Known BetterRest crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "betterrest",
    "betterrest-estimator",
    "betterrest-config",
    "betterrest-observability",
    "betterrest-cli",
];
