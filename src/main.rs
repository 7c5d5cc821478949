use std::{
    fs,
    io::{self, Read},
    iter,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use commandline::{Input, Options};
use jslex::{error::PositionalError, lexer, source_map};
use log::{error, info};

mod commandline;

const DEMO: &str = r#"
let x = -12.5e+3;
const y = 42; // comment
/* multi
   line */
if (x >= 0 && x !== y) {
    console.log("ok");
}
"#;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(options.log_verbosity())
        .init()?;

    let source = read_source(options.input())?;
    info!("Tokenizing {} bytes of source", source.len());

    let result = if options.trace {
        lexer::tokenize_with(&source, |token| println!("{token}"))
    } else {
        lexer::tokenize(&source)
    };

    match result {
        Ok(tokens) => {
            if !options.trace {
                for token in &tokens {
                    println!("{token}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            describe_error(&err, &source);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_source(input: Input) -> Result<String> {
    match input {
        Input::Demo => Ok(DEMO.to_string()),
        Input::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display())),
        Input::Stdin => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Unable to read source from standard input")?;
            Ok(source)
        }
    }
}

fn describe_error(err: &impl PositionalError, content: &str) {
    let position = err.position();
    let line = source_map::find_line(content, position.line);

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());

    eprintln!("{}| {}", gutter, line.for_display());
    eprintln!(
        "{}| {}^--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', position.column.saturating_sub(1)),
        err.describe()
    );

    error!("Lexer error at {} ({})", position, err.describe());
}
