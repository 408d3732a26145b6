//! # Phonebook CLI
//!
//! The binary only starts the terminal client in `cli/` and turns a failed session into an
//! exit status. See the library docs for the layering below it.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
