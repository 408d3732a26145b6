//! # Terminal Client
//!
//! One possible front end for the phone book. This is the only place that knows about stdin,
//! stdout, colors and exit codes. Everything it does goes through [`phonebook::shell::Shell`].
//!
//! - `setup`: clap definitions for process flags and for each session line
//! - `commands`: the session loop and the line-based confirmation prompt
//! - `render`: command results to text, via the templates
//! - `theme`, `styles`: the `style` template filter and the named styles it applies
//! - `logging`: tracing subscriber set up
//!
//! Tests here cover parsing and rendering. Directory behaviour is tested in the library.

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
