use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "A lexer for a JavaScript-like language")]
pub struct Options {
    /// Source file to tokenize. Reads standard input when absent or `-`
    pub file: Option<PathBuf>,
    /// Tokenize the built-in demo program instead of reading input
    #[arg(long, conflicts_with = "file")]
    pub demo: bool,
    /// Print each token as soon as it is produced
    #[arg(short, long)]
    pub trace: bool,
    /// Increase log verbosity (may be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Silence all log output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the source code comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Demo,
    Stdin,
    File(&'a Path),
}

impl Options {
    pub fn input(&self) -> Input<'_> {
        match &self.file {
            _ if self.demo => Input::Demo,
            Some(path) if path.as_os_str() != "-" => Input::File(path),
            _ => Input::Stdin,
        }
    }

    /// The `stderrlog` verbosity. Warnings are shown by default.
    pub fn log_verbosity(&self) -> usize {
        1 + usize::from(self.verbose)
    }
}
