use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

/// Style names shared by templates and Rust code.
/// Templates spell them as string literals, so some are unused on the Rust side.
#[allow(dead_code)]
pub mod names {
    pub const HEADER: &str = "header";
    pub const SEPARATOR: &str = "separator";
    pub const NAME: &str = "name";
    pub const NUMBER: &str = "number";
    pub const NOTICE: &str = "notice";
    pub const COMMAND: &str = "command";
    pub const PROMPT: &str = "prompt";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static PHONEBOOK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::SEPARATOR, Style::new().dim())
        .add(names::NAME, Style::new().cyan())
        .add(names::NUMBER, Style::new())
        .add(names::NOTICE, Style::new().italic())
        .add(names::COMMAND, Style::new().bold())
        .add(names::PROMPT, Style::new().yellow().bold())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});
