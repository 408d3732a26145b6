//! # Rendering Module
//!
//! Turns command results into the text of the output area using the templates in
//! `templates.rs` and the theme in `styles.rs`.
//!
//! Column layout stays in Rust because it needs display-width aware padding (Hangul and
//! other wide characters take two terminal cells). Templates receive finished strings plus
//! the padding to put after each name.

use super::setup::HelpGroup;
use super::styles::{names, PHONEBOOK_THEME};
use super::templates::{HELP_TEMPLATE, LISTING_TEMPLATE, MESSAGES_TEMPLATE};
use super::theme::{register_style_filter, Theme};
use minijinja::Environment;
use phonebook::api::{CmdMessage, CmdResult, MessageLevel};
use phonebook::config::PhonebookConfig;
use phonebook::model::{Collision, Listing, ListingKind};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const SEPARATOR: &str = "==================================";
pub const EMPTY_DIRECTORY: &str = "The directory has no entries.";

#[derive(Serialize)]
struct RowData {
    name: String,
    padding: String,
    number: String,
}

#[derive(Serialize)]
struct ListingData {
    header: String,
    separator: &'static str,
    rows: Vec<RowData>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpCommandData {
    usage: String,
    padding: String,
    about: String,
}

#[derive(Serialize)]
struct HelpGroupData {
    heading: &'static str,
    commands: Vec<HelpCommandData>,
}

#[derive(Serialize)]
struct HelpData {
    title: &'static str,
    groups: Vec<HelpGroupData>,
}

pub struct Renderer {
    theme: Theme,
    use_color: bool,
    name_width: usize,
    show_listing_after_change: bool,
}

impl Renderer {
    pub fn new(config: &PhonebookConfig, use_color: bool) -> Self {
        Self {
            theme: PHONEBOOK_THEME.clone(),
            use_color,
            name_width: config.name_width,
            show_listing_after_change: config.show_listing_after_change,
        }
    }

    /// The full output area for a command result: its messages, then its listing.
    /// After a change the listing is separated by a blank line and can be turned off.
    pub fn render_result(&self, result: &CmdResult) -> String {
        let mut output = self.render_messages(&result.messages);

        if let Some(listing) = &result.listing {
            if !result.is_mutation() {
                output.push_str(&self.render_listing(listing));
            } else if self.show_listing_after_change {
                output.push('\n');
                output.push_str(&self.render_listing(listing));
            }
        }

        output
    }

    pub fn render_listing(&self, listing: &Listing) -> String {
        let rows = listing
            .entries
            .iter()
            .map(|entry| RowData {
                name: entry.name.clone(),
                padding: padding_for(&entry.name, self.name_width),
                number: entry.number.clone(),
            })
            .collect();

        let count = count_label(listing.len());
        let (header, empty_message) = match &listing.kind {
            ListingKind::All => (format!("{}:", count), EMPTY_DIRECTORY.to_string()),
            ListingKind::Search { term } => (
                format!("{} matching '{}':", count, term),
                format!("No entries found.\n(search term: {})", term),
            ),
        };

        let data = ListingData {
            header,
            separator: SEPARATOR,
            rows,
            empty_message,
        };

        self.render_template(LISTING_TEMPLATE, &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: style_for(&msg.level),
                })
                .collect(),
        };

        self.render_template(MESSAGES_TEMPLATE, &data)
            .unwrap_or_else(|_| {
                messages
                    .iter()
                    .map(|m| format!("{}\n", m.content))
                    .collect()
            })
    }

    pub fn render_help(&self, groups: &[HelpGroup]) -> String {
        let usage_width = groups
            .iter()
            .flat_map(|g| g.commands.iter())
            .map(|c| c.usage.width())
            .max()
            .unwrap_or(0)
            + 2;

        let data = HelpData {
            title: "Phonebook commands",
            groups: groups
                .iter()
                .map(|group| HelpGroupData {
                    heading: group.heading,
                    commands: group
                        .commands
                        .iter()
                        .map(|command| HelpCommandData {
                            usage: command.usage.clone(),
                            padding: padding_for(&command.usage, usage_width),
                            about: if command.aliases.is_empty() {
                                command.about.clone()
                            } else {
                                format!("{} (aliases: {})", command.about, command.aliases.join(", "))
                            },
                        })
                        .collect(),
                })
                .collect(),
        };

        self.render_template(HELP_TEMPLATE, &data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// The question shown before overwriting a stored number. Has no trailing newline so
    /// the answer can be typed on the same line.
    pub fn render_confirm_prompt(&self, collision: &Collision) -> String {
        format!(
            "{}\n{} ",
            self.theme.apply(
                names::PROMPT,
                &format!(
                    "'{}' is already in the directory with {}.",
                    collision.name, collision.existing
                ),
                self.use_color,
            ),
            self.theme.apply(
                names::PROMPT,
                &format!("Replace it with {}? [y/N]", collision.proposed),
                self.use_color,
            ),
        )
    }

    fn render_template<T: Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<String, minijinja::Error> {
        let mut env = Environment::new();
        register_style_filter(&mut env, self.theme.clone(), self.use_color);
        env.add_template("_inline", template)?;
        env.get_template("_inline")?.render(data)
    }
}

fn style_for(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

/// Spaces that bring `text` up to `width` terminal cells. Longer text gets none.
fn padding_for(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}
