//! Named `console` styles exposed to minijinja templates as a `style("name")` filter.
//!
//! Templates say *what* a piece of text is (`header`, `warning`, ...) and the theme decides
//! how it looks. With color off the filter passes text through untouched. A style name the
//! theme does not know is flagged inline with [`MISSING_STYLE_INDICATOR`] so template typos
//! show up in the output instead of silently rendering plain.

use console::Style;
use minijinja::{Environment, Value};
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style. Returns self for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies `name` to `text`. ANSI codes are emitted only when `use_color` is set,
    /// regardless of what `console` detects for the current stream.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Registers the `style` filter on a minijinja environment.
pub fn register_style_filter(env: &mut Environment<'_>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Data {
        message: String,
    }

    fn render(theme: Theme, use_color: bool, template: &str) -> String {
        let mut env = Environment::new();
        register_style_filter(&mut env, theme, use_color);
        env.add_template("t", template).unwrap();
        env.get_template("t")
            .unwrap()
            .render(Data {
                message: "hello".into(),
            })
            .unwrap()
    }

    #[test]
    fn test_plain_when_color_off() {
        let theme = Theme::new().add("ok", Style::new().green());
        let out = render(theme, false, r#"{{ message | style("ok") }}"#);
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_ansi_when_color_on() {
        let theme = Theme::new().add("ok", Style::new().green());
        let out = render(theme, true, r#"{{ message | style("ok") }}"#);
        assert!(out.contains("hello"));
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn test_unknown_style_is_flagged() {
        let out = render(Theme::new(), false, r#"{{ message | style("typo") }}"#);
        assert_eq!(out, "(!?) hello");
    }

    #[test]
    fn test_literals_can_be_styled() {
        let theme = Theme::new().add("dim", Style::new().dim());
        let out = render(theme, false, r#"{{ "x" | style("dim") }}-{{ message }}"#);
        assert_eq!(out, "x-hello");
    }
}
