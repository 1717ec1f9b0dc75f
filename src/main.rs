use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use puzzles::io::{self, InputAtOnce};
use puzzles::{Problem, SolveOptions};

#[derive(Parser)]
#[command(name = "puzzles", version, about = "Solvers for small judge problems")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a problem, reading test cases from stdin or a file.
    Solve {
        /// Problem name or judge id.
        problem: Problem,
        /// Read test cases from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Omit the `Enter n and k: ` prompt of modified-fib.
        #[arg(long)]
        no_prompt: bool,
    },
    /// List the available problems.
    List,
    /// Print the input and output format of a problem.
    Show { problem: Problem },
}

fn main() -> Result<()> {
    puzzles::logging::init();
    let cli = Cli::parse();

    let mut output = io::stdout();
    match cli.command {
        Command::Solve {
            problem,
            input,
            no_prompt,
        } => {
            let mut input = match &input {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("open input {}", path.display()))?;
                    InputAtOnce::read_from(file)
                }
                None => io::stdin(),
            }
            .context("read input")?;
            info!(%problem, "solve");
            let opts = SolveOptions { prompt: !no_prompt };
            problem
                .solve(&mut input, &mut output, &opts)
                .with_context(|| format!("solve {}", problem))?;
        }
        Command::List => {
            for p in Problem::ALL {
                writeln!(output, "{:>2} {:<13} {}", p.id(), p.name(), p.title())?;
            }
        }
        Command::Show { problem } => {
            writeln!(output, "{} ({}): {}", problem.id(), problem.name(), problem.title())?;
            writeln!(output, "input: {}", problem.input_format())?;
            writeln!(output, "output: {}", problem.output_format())?;
        }
    }
    output.flush().context("flush output")?;
    Ok(())
}
