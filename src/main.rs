use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use waju::{Options, config::DEFAULT_MAX_DEPTH, run_with_options};

/// Prompt printed before every line of the interactive shell.
const PROMPT: &str = "waju > ";

/// Source name used for lines typed into the shell or passed as an argument.
const STDIN_NAME: &str = "<stdin>";

/// waju evaluates arithmetic expressions and points at exactly what went wrong
/// when they fail.
///
/// Without an expression or file, waju starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the contents of this file instead of an expression.
    #[arg(short, long, conflicts_with = "contents")]
    file: Option<PathBuf>,

    /// Deepest nesting of parentheses, signs and exponents accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log filter, e.g. `debug` or `waju::parser=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// An expression to evaluate once.
    contents: Option<String>,
}

impl Args {
    fn options(&self) -> Options {
        Options { max_depth: self.max_depth,
                  ..Options::default() }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());
    let options = args.options();

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        return evaluate_once(&options, &path.display().to_string(), &script);
    }

    match &args.contents {
        Some(contents) => evaluate_once(&options, STDIN_NAME, contents),
        None => repl(&options),
    }
}

/// Installs a stderr subscriber filtered by `level`, else `RUST_LOG`, else
/// `warn`.
fn init_logging(level: Option<&str>) {
    let filter = match level {
                     Some(level) => EnvFilter::try_new(level).ok(),
                     None => EnvFilter::try_from_default_env().ok(),
                 }.unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}

/// Evaluates one piece of source text and prints the outcome.
fn evaluate_once(options: &Options, source_name: &str, text: &str) -> ExitCode {
    match run_with_options(options, source_name, text) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e.render());
            ExitCode::FAILURE
        },
    }
}

/// Reads lines from stdin and evaluates each one until `exit` or end of input.
fn repl(options: &Options) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let Some(Ok(line)) = lines.next() else {
            println!();
            return ExitCode::SUCCESS;
        };

        match line.trim() {
            "" => continue,
            "exit" => {
                println!("Exiting from Waju CLI");
                return ExitCode::SUCCESS;
            },
            _ => {},
        }

        match run_with_options(options, STDIN_NAME, &line) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("{}", e.render()),
        }
    }
}
