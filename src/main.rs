use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use listfunc::session::Session;
use rustyline::{DefaultEditor, error::ReadlineError};

/// listfunc evaluates a small point-free language of integers, reals and
/// lists, either interactively or by replaying a script.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to replay line by line. Without it, listfunc starts an
    /// interactive session.
    script: Option<PathBuf>,

    /// Do not print the welcome banner.
    #[arg(short, long)]
    quiet: bool,

    /// Log more details to stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn run_script(session: &Session, path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());
    session.run(BufReader::new(file), &mut out, &mut err, true)
}

fn run_interactive(session: &Session) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    let (mut out, mut err) = (io::stdout(), io::stderr());

    loop {
        match editor.readline("") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if !session.process(&line, &mut out, &mut err, false)? {
                    return Ok(());
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.quiet {
        println!("Welcome to the listfunc interpreter!");
        println!("------------------------------------");
    }

    let session = Session::new();
    if log::log_enabled!(log::Level::Debug) {
        let signatures: Vec<_> = session.globals()
                                        .signatures()
                                        .into_iter()
                                        .map(|(name, arity)| format!("{name}/{arity}"))
                                        .collect();
        log::debug!("functions available at startup: {}", signatures.join(" "));
    }

    match &args.script {
        Some(path) => {
            if let Err(e) = run_script(&session, path) {
                eprintln!("Failed to run the script '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => {
            if let Err(e) = run_interactive(&session) {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
