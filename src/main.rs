//! lcc command line: tokenize, parse, dump or explore a source file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser as _, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use lcc::parser::ast::Program;
use lcc::parser::lexer::{self, Token};
use lcc::parser::{printer, Parser};
use lcc::ui::App;

#[derive(clap::Parser)]
#[command(name = "lcc")]
#[command(author, version, about = "lcc front end: lexer, parser and AST explorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and print its AST
    Ast {
        /// Input file to parse
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tree")]
        format: AstFormat,
    },

    /// Print the token stream of a file
    Tokens {
        /// Input file to tokenize
        file: PathBuf,
    },

    /// Parse source files and report the first error in each
    Check {
        /// Input file(s) to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Browse a file's source and AST side by side
    Explore {
        /// Input file to explore
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AstFormat {
    /// Indented node-per-line dump
    Tree,
    /// Source-like text with explicit grouping
    Source,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ast { file, format } => dump_ast(&file, format),
        Commands::Tokens { file } => dump_tokens(&file),
        Commands::Check { files } => check(&files),
        Commands::Explore { file } => explore(&file),
    }
}

fn read_source(path: &Path) -> Result<String> {
    tracing::info!("Reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn parse_file(path: &Path) -> Result<Program> {
    let source = read_source(path)?;

    let tokens = lexer::tokenize(&source);
    tracing::debug!("Tokenized {} into {} tokens", path.display(), tokens.len());

    let program = Parser::new(tokens)
        .parse_program()
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(
        "Parsed {} top-level statement(s) from {}",
        program.len(),
        path.display()
    );

    Ok(program)
}

fn dump_ast(file: &Path, format: AstFormat) -> Result<()> {
    let program = parse_file(file)?;

    match format {
        AstFormat::Tree => print!("{}", printer::render_tree(&program)),
        AstFormat::Source => print!("{}", program),
    }
    Ok(())
}

fn format_token(token: &Token) -> String {
    let position = format!("{}:{}", token.location.line, token.location.column);
    let kind = format!("{:?}", token.kind);
    format!("{position:>8}  {kind:<12} '{}'", token.value)
}

fn dump_tokens(file: &Path) -> Result<()> {
    let source = read_source(file)?;

    for token in lexer::tokenize(&source) {
        println!("{}", format_token(&token));
    }
    Ok(())
}

fn check(files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for file in files {
        match parse_file(file) {
            Ok(program) => println!("{}: ok ({} statements)", file.display(), program.len()),
            Err(err) => {
                failed += 1;
                println!("{err:#}");
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) failed", failed, files.len());
    }
    Ok(())
}

fn explore(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let mut app = App::new(file.display().to_string(), source);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Explorer terminal error")
}
