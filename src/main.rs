//! # Rooster
//!
//! Inspect Rooster assembly and run bytecode listings.
//!

use ansi_term::Style;
use clap::{Parser, Subcommand};
use rooster::lang::Lexer;
use rooster::mach::{Program, Runtime};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rooster")]
#[command(about = "Rooster assembly lexer and stack machine")]
struct Cli {
    /// Log every executed instruction
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tokens of an assembly source file
    Lex { file: PathBuf },
    /// Execute a bytecode listing of integers and mnemonics
    Run { file: PathBuf },
    /// Print the disassembly of a bytecode listing
    Dis { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.trace {
        EnvFilter::new("rooster=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rooster=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(message) = dispatch(cli.command) {
        eprintln!("{}", Style::new().bold().paint(message));
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<(), String> {
    match command {
        Command::Lex { file } => {
            let source = read(&file)?;
            for token in Lexer::new(&source) {
                let index = match token.index {
                    Some(index) => index.to_string(),
                    None => "-".to_string(),
                };
                println!("{}:{} {} {:?}", token.line, index, token.kind, token.literal);
            }
            Ok(())
        }
        Command::Run { file } => {
            let program = load(&file)?;
            let mut runtime = Runtime::new(program);
            runtime.run().map_err(|error| error.to_string())
        }
        Command::Dis { file } => {
            let program = load(&file)?;
            print!("{}", program);
            Ok(())
        }
    }
}

fn read(file: &Path) -> Result<String, String> {
    std::fs::read_to_string(file).map_err(|error| format!("{}: {}", file.display(), error))
}

fn load(file: &Path) -> Result<Program, String> {
    read(file)?
        .parse::<Program>()
        .map_err(|error| format!("{}: {}", file.display(), error))
}
