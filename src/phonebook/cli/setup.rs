use clap::{CommandFactory, Parser, Subcommand};
use phonebook::shell::{Action, Form};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Process-level flags. Everything else happens inside the session.
#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version = get_version())]
#[command(about = "Interactive phone directory for the terminal", long_about = None)]
pub struct Cli {
    /// Read settings from this JSON file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Start with an empty directory instead of the built-in entries
    #[arg(long)]
    pub empty: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the session. The first word picks the command.
#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    multicall = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add an entry, or change the number of an existing one
    #[command(visible_alias = "a", disable_help_flag = true, display_order = 1)]
    Add {
        /// Name words followed by the number (the last word is the number)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Delete an entry by name
    #[command(visible_aliases = ["rm", "del"], disable_help_flag = true, display_order = 2)]
    Delete {
        /// Name words (joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show entries whose name contains the text
    #[command(visible_aliases = ["find", "s"], disable_help_flag = true, display_order = 3)]
    Search {
        /// Search words (joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show all entries
    #[command(visible_aliases = ["ls", "all"], disable_help_flag = true, display_order = 4)]
    List,

    /// Show this help
    #[command(visible_alias = "?", disable_help_flag = true, display_order = 10)]
    Help,

    /// End the session
    #[command(visible_aliases = ["exit", "q"], disable_help_flag = true, display_order = 11)]
    Quit,
}

/// What a parsed line asks the session to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    Trigger(Action, Form),
    Help,
    Quit,
}

impl ShellCommand {
    pub fn into_request(self) -> Request {
        match self {
            ShellCommand::Add { mut words } => {
                // A lone word can only be a name; the missing number is caught by the shell.
                let number = if words.len() > 1 {
                    words.pop().unwrap_or_default()
                } else {
                    String::new()
                };
                Request::Trigger(Action::Add, Form::new(words.join(" "), number))
            }
            ShellCommand::Delete { words } => {
                Request::Trigger(Action::Delete, Form::new(words.join(" "), ""))
            }
            ShellCommand::Search { words } => {
                Request::Trigger(Action::Search, Form::new(words.join(" "), ""))
            }
            ShellCommand::List => Request::Trigger(Action::ShowAll, Form::default()),
            ShellCommand::Help => Request::Help,
            ShellCommand::Quit => Request::Quit,
        }
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Request>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = ShellLine::try_parse_from(words)?;
    Ok(Some(parsed.command.into_request()))
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Directory,
    Session,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Directory => "Directory:",
            CommandGroup::Session => "Session:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "delete" | "search" | "list" => Some(CommandGroup::Directory),
            "help" | "quit" => Some(CommandGroup::Session),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Directory, CommandGroup::Session]
    }

    fn usage(name: &str) -> String {
        match name {
            "add" => "add <name> <number>".to_string(),
            "delete" => "delete <name>".to_string(),
            "search" => "search <text>".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand {
    pub usage: String,
    pub about: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpGroup {
    pub heading: &'static str,
    pub commands: Vec<HelpCommand>,
}

/// Session commands grouped for the help screen, in display order.
pub fn help_groups() -> Vec<HelpGroup> {
    let cmd = ShellLine::command();
    let mut subcommands: Vec<_> = cmd.get_subcommands().collect();
    subcommands.sort_by_key(|sc| sc.get_display_order());

    CommandGroup::all()
        .iter()
        .map(|group| HelpGroup {
            heading: group.heading(),
            commands: subcommands
                .iter()
                .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
                .map(|sc| HelpCommand {
                    usage: CommandGroup::usage(sc.get_name()),
                    about: sc.get_about().map(|s| s.to_string()).unwrap_or_default(),
                    aliases: sc.get_visible_aliases().map(str::to_string).collect(),
                })
                .collect(),
        })
        .collect()
}
