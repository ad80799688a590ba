// sild: typed scripting notation → Go transpiler

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;
use thiserror::Error;

use sild::{Generator, ParseError, TranspileOptions};

/// File extension forced onto the output file name
const OUTPUT_EXTENSION: &str = "go";

#[derive(ClapParser, Debug)]
#[command(name = "sild")]
#[command(version)]
#[command(about = "Translate typed scripts into Go source", long_about = None)]
struct Args {
    /// Source file to translate
    input: PathBuf,

    /// Output file (".go" is appended if missing); prints to stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log every pipeline step to stderr
    #[arg(long)]
    debug: bool,

    /// Fail on syntax errors and unrecognized characters instead of truncating
    #[arg(long)]
    strict: bool,

    /// Print the parsed AST to stderr before generating
    #[arg(long)]
    emit_ast: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    log::debug!("input file: {}", args.input.display());

    let source = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;

    let options = TranspileOptions {
        strict: args.strict,
    };
    let program = sild::parse(&source, options)?;
    log::debug!("parsed {} top-level statement(s)", program.statements.len());

    if args.emit_ast {
        eprintln!("{:#?}", program);
    }

    let output = Generator::new().generate(&program);

    match &args.out {
        Some(out) => write_output(&output_path(out), &output),
        None => {
            print!("{}", output);
            Ok(())
        }
    }
}

/// Append the `.go` extension unless the name already ends with it.
fn output_path(out: &Path) -> PathBuf {
    if out.extension().is_some_and(|ext| ext == OUTPUT_EXTENSION) {
        return out.to_path_buf();
    }

    let mut name = OsString::from(out.as_os_str());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

fn write_output(path: &Path, output: &str) -> Result<(), CliError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(CliError::MissingDirectory(dir.to_path_buf()));
    }

    log::debug!("writing {} bytes to {}", output.len(), path.display());
    fs::write(path, output).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
