//! # howto-cli
//!
//! Command-line interface for the HowTo Ninja tutorial generator.
//!
//! ## Commands
//!
//! - `howto browse` — Interactive skill browser in the terminal
//! - `howto learn` — Generate one tutorial and print it
//! - `howto library` — List the built-in skill catalog
//! - `howto saved` — List saved skills
//! - `howto config` — Show current configuration
//! - `howto init` — Create a starter howto.toml

pub mod commands;

pub use commands::Cli;
