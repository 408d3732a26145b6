//! # Session Loop
//!
//! The terminal front end for the phone book form. Each input line is parsed into a
//! [`Request`], the request fills the shell's form and fires one action, and the outcome is
//! rendered to the output stream.
//!
//! The loop is generic over its input and output so tests can drive it with in-memory
//! buffers. Only [`run`] touches the real stdin, stdout and terminal.

use super::logging;
use super::render::Renderer;
use super::setup::{help_groups, parse_line, Cli, Request};
use clap::Parser;
use console::Term;
use phonebook::api::CmdMessage;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::init::{initialize, AppContext, Seed};
use phonebook::model::Collision;
use phonebook::shell::{Confirm, Outcome};
use std::io::{self, BufRead, IsTerminal, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => PhonebookConfig::load(path)?,
        None => PhonebookConfig::default(),
    };
    let seed = if cli.empty { Seed::Empty } else { Seed::Builtin };

    let use_color =
        !cli.no_color && config.color && Term::stdout().features().colors_supported();
    let interactive = io::stdin().is_terminal();
    tracing::debug!(use_color, interactive, "starting session");

    let mut session = Session::new(initialize(config, seed), use_color, interactive);
    session.run(&mut io::stdin().lock(), &mut io::stdout())
}

struct Session {
    ctx: AppContext,
    renderer: Renderer,
    interactive: bool,
    /// Set when rendered output should replace the screen instead of scrolling
    screen: Option<Term>,
    shown: bool,
}

impl Session {
    fn new(ctx: AppContext, use_color: bool, interactive: bool) -> Self {
        let renderer = Renderer::new(&ctx.config, use_color);
        let screen = (interactive && ctx.config.clear_screen)
            .then(Term::stdout)
            .filter(Term::is_term);

        Self {
            ctx,
            renderer,
            interactive,
            screen,
            shown: false,
        }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let initial = self.ctx.shell.api().list_entries()?;
        let text = self.renderer.render_result(&initial);
        self.show(out, &text)?;

        let mut line = String::new();
        loop {
            if self.interactive {
                write!(out, "{}", self.ctx.config.prompt)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let request = match parse_line(&line) {
                Ok(Some(request)) => request,
                Ok(None) => continue,
                Err(e) => {
                    let rendered = e.render().to_string();
                    let reason = rendered.lines().next().unwrap_or_default();
                    let message = CmdMessage::warning(format!(
                        "{}\nType 'help' to see the commands.",
                        reason.trim_start_matches("error: ")
                    ));
                    self.warn(out, &message)?;
                    continue;
                }
            };

            match request {
                Request::Quit => break,
                Request::Help => {
                    let text = self.renderer.render_help(&help_groups());
                    self.show(out, &text)?;
                }
                Request::Trigger(action, form) => {
                    let mut confirm = LineConfirm {
                        input: &mut *input,
                        out: &mut *out,
                        renderer: &self.renderer,
                        interactive: self.interactive,
                    };
                    let outcome = self.ctx.shell.submit(action, form, &mut confirm)?;
                    match outcome {
                        Outcome::Warning(message) => self.warn(out, &message)?,
                        Outcome::Render(result) => {
                            let text = self.renderer.render_result(&result);
                            self.show(out, &text)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Replaces the output area with `text`.
    fn show<W: Write>(&mut self, out: &mut W, text: &str) -> Result<()> {
        if let Some(term) = &self.screen {
            term.clear_screen()?;
        } else if self.shown {
            writeln!(out)?;
        }
        self.shown = true;
        write!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }

    /// Prints a warning below whatever is on screen.
    fn warn<W: Write>(&mut self, out: &mut W, message: &CmdMessage) -> Result<()> {
        if self.screen.is_none() && self.shown {
            writeln!(out)?;
        }
        write!(
            out,
            "{}",
            self.renderer.render_messages(std::slice::from_ref(message))
        )?;
        out.flush()?;
        Ok(())
    }
}

/// Asks on the session's own streams. The answer is the next input line.
struct LineConfirm<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
    renderer: &'a Renderer,
    interactive: bool,
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<'_, R, W> {
    fn confirm_overwrite(&mut self, collision: &Collision) -> Result<bool> {
        write!(self.out, "{}", self.renderer.render_confirm_prompt(collision))?;
        self.out.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if !self.interactive {
            // The answer was not echoed, so end the prompt line ourselves.
            writeln!(self.out)?;
        }

        Ok(read > 0 && is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::store::DirectoryStore;
    use std::io::Cursor;

    fn session(seed: Seed) -> Session {
        Session::new(initialize(PhonebookConfig::default(), seed), false, false)
    }

    fn drive(session: &mut Session, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn number_of(session: &Session, name: &str) -> Option<String> {
        session
            .ctx
            .shell
            .api()
            .store()
            .get(name)
            .map(str::to_string)
    }

    #[test]
    fn test_initial_listing_is_shown() {
        let output = drive(&mut session(Seed::Builtin), "");
        assert!(output.starts_with("4 entries:\n"));
        assert!(output.contains("최민호     | 010-2222-3333\n"));
    }

    #[test]
    fn test_add_then_quit_stops_reading() {
        let mut s = session(Seed::Empty);
        let output = drive(&mut s, "add Ann 555-0001\nquit\nadd Bob 1\n");
        assert!(output.contains("'Ann' was added.\n(number: 555-0001)\n"));
        assert_eq!(number_of(&s, "Ann").as_deref(), Some("555-0001"));
        assert_eq!(number_of(&s, "Bob"), None);
    }

    #[test]
    fn test_overwrite_confirmed() {
        let mut s = session(Seed::Builtin);
        let output = drive(&mut s, "add 김동현 010-0000-0000\nyes\n");
        assert!(output.contains("Replace it with 010-0000-0000? [y/N] \n"));
        assert!(output.contains("'김동현' was updated."));
        assert_eq!(number_of(&s, "김동현").as_deref(), Some("010-0000-0000"));
    }

    #[test]
    fn test_overwrite_declined() {
        let mut s = session(Seed::Builtin);
        let output = drive(&mut s, "add 김동현 010-0000-0000\nn\n");
        assert!(output.contains("Operation cancelled.\n"));
        assert_eq!(number_of(&s, "김동현").as_deref(), Some("010-1234-5678"));
    }

    #[test]
    fn test_end_of_input_at_prompt_declines() {
        let mut s = session(Seed::Builtin);
        let output = drive(&mut s, "add 김동현 010-0000-0000\n");
        assert!(output.contains("Operation cancelled."));
        assert_eq!(number_of(&s, "김동현").as_deref(), Some("010-1234-5678"));
    }

    #[test]
    fn test_missing_fields_warn() {
        let output = drive(&mut session(Seed::Empty), "add Ann\ndelete\nsearch\n");
        assert!(output.contains("Enter both a name and a number to add an entry.\n"));
        assert!(output.contains("Enter a name to delete.\n"));
        assert!(output.contains("Enter a name to search for.\n"));
    }

    #[test]
    fn test_unknown_command_warns_and_continues() {
        let mut s = session(Seed::Empty);
        let output = drive(&mut s, "frobnicate\nadd Ann 1\n");
        assert!(output.contains("Type 'help' to see the commands.\n"));
        assert_eq!(number_of(&s, "Ann").as_deref(), Some("1"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let with_blanks = drive(&mut session(Seed::Empty), "\n   \n\n");
        let without = drive(&mut session(Seed::Empty), "");
        assert_eq!(with_blanks, without);
    }

    #[test]
    fn test_help_lists_commands() {
        let output = drive(&mut session(Seed::Empty), "help\n");
        assert!(output.contains("Directory:\n"));
        assert!(output.contains("search <text>"));
    }

    #[test]
    fn test_outputs_are_separated_by_blank_line() {
        let output = drive(&mut session(Seed::Empty), "list\n");
        assert_eq!(
            output,
            "The directory has no entries.\n\nThe directory has no entries.\n"
        );
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
        assert!(!is_yes("yep"));
    }
}
