//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept in `templates/`, included here as string
//! constants. Keeping them as files makes them easy to edit and diff.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. Each template line produces one output line, and block tags
//!    sit at the start of the line they belong to. The final newline of a file is dropped by
//!    minijinja, so a template's own last line break is the one before the closing tag.
//! 2. Layout (column padding, counts, pluralisation) is computed in Rust and passed in as
//!    plain strings. Templates only arrange and style.
//! 3. Styles are picked with the `style("name")` filter, using names from `styles::names`.
pub const LISTING_TEMPLATE: &str = include_str!("templates/listing.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
