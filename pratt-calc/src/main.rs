//! Command-line interface (CLI) for pratt-calc.
//!
//! Reads one expression, either from `--expr` or as a single line of standard
//! input, and evaluates it (the default), prints its expression tree, or lists
//! its tokens. The `opers` command lists the operator table. Any syntax or
//! evaluation error is printed to standard error and the process exits with a
//! non-zero status.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see skipped
//! characters, `RUST_LOG=trace` to follow the parser step by step.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use pratt_calc::{CalcLexer, CalcParser, Expr, calc_oper_defs};
use smartstring::alias::String;
use std::io::{self, BufRead};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command (defaults to `eval`)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates an expression and prints the result
    Eval {
        /// Expression to evaluate; read from standard input if omitted
        #[arg(short, long)]
        expr: Option<String>,
    },
    /// Prints the expression tree as an S-expression
    Parse {
        /// Expression to parse; read from standard input if omitted
        #[arg(short, long)]
        expr: Option<String>,
    },
    /// Prints one token per line with its source span
    Tokens {
        /// Expression to tokenize; read from standard input if omitted
        #[arg(short, long)]
        expr: Option<String>,
    },
    /// Prints the operator binding power table
    Opers {},
}

fn read_input(expr: Option<String>) -> Result<std::string::String> {
    if let Some(expr) = expr {
        return Ok(expr.into());
    }
    let mut line = std::string::String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("can't read standard input")?;
    Ok(line)
}

fn parse_input(text: &str) -> Result<Expr> {
    let mut lexer = CalcLexer::new(text);
    let tokens: Vec<_> = lexer.by_ref().collect();
    let mut parser = CalcParser::new(tokens);
    let expr = parser
        .parse()
        .with_context(|| format!("can't parse {:?}", text.trim_end()))?;
    log::info!("Stats: {:?}, {:?}", lexer.stats(), parser.stats());
    Ok(expr)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command.unwrap_or(Commands::Eval { expr: None }) {
        Commands::Eval { expr } => {
            let text = read_input(expr)?;
            let value = parse_input(&text)?
                .eval()
                .with_context(|| format!("can't evaluate {:?}", text.trim_end()))?;
            println!("{value}");
        }
        Commands::Parse { expr } => {
            let text = read_input(expr)?;
            println!("{}", parse_input(&text)?);
        }
        Commands::Tokens { expr } => {
            let text = read_input(expr)?;
            let mut lexer = CalcLexer::new(&text);
            for tok in lexer.by_ref() {
                println!("{}\t{}", tok, tok.span.display());
            }
            log::info!("Stats: {:?}", lexer.stats());
        }
        Commands::Opers {} => {
            for (op, def) in calc_oper_defs().iter() {
                let left_bp = def.left_bp.map_or("-".into(), |bp| bp.to_string());
                println!(
                    "{}\t{}\tleft_bp={}\tright_bp={}\t{}",
                    op,
                    def.fixity,
                    left_bp,
                    def.right_bp,
                    def.assoc()
                );
            }
        }
    }

    Ok(())
}
