//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contact directory library** with a terminal client. The
//! library owns every rule about the directory and the form that drives it; the binary only
//! reads input lines and paints text.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads input lines, parses them, renders templates        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (shell.rs)                                           │
//! │  - Form fields, Action enum, required-field warnings        │
//! │  - Overwrite confirmation through the Confirm trait         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, trims inputs                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / delete / search / list, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DirectoryStore trait, InMemoryStore                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `shell.rs` inward, code never writes to stdout/stderr, never exits the process and
//! never assumes a terminal. The one question the core has to ask the user (may this number
//! be overwritten?) goes through [`shell::Confirm`], which the client implements.
//!
//! ## Ordering
//!
//! Listings and search results come back sorted by name, by plain string comparison.
//!
//! ## Module Overview
//!
//! - [`shell`]: Form state and action dispatch
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: `Entry`, `Listing`, `Collision`, seed data
//! - [`init`]: Session start-up
//! - [`config`]: Presentation settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod shell;
pub mod store;
