mod repl;

use clap::Parser;
use log::{error, info};
use scicalc_rs::eval::DEFAULT_MAX_DEPTH;
use scicalc_rs::{Evaluator, EvaluatorOptions};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// scicalc - evaluate arithmetic and scientific expressions
#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(about = "Evaluate arithmetic and scientific expressions", long_about = None)]
struct Args {
    /// Reject input left over after a complete expression
    #[arg(long, env = "SCICALC_STRICT")]
    strict: bool,

    /// Decimal places printed for results
    #[arg(long, env = "SCICALC_PRECISION", default_value_t = 6)]
    precision: usize,

    /// Maximum nesting of parentheses, signs and function calls
    #[arg(long, env = "SCICALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads lines from stdin)
    expression: Option<String>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    let options = EvaluatorOptions::default()
        .strict_trailing(args.strict)
        .max_depth(args.max_depth);
    let evaluator = Evaluator::with_options(options);

    if let Some(expression) = args.expression {
        let result = evaluator.evaluate(&expression);
        println!("{}", repl::format_result(&result, args.precision));
        return ExitCode::from(result.error.code() as u8);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let prompt = interactive.then_some("> ");

    match repl::run_session(
        &evaluator,
        args.precision,
        stdin.lock(),
        &mut io::stdout().lock(),
        prompt,
    ) {
        Ok(summary) => {
            info!("Session finished: {:?}", summary);
            if interactive {
                eprintln!(
                    "\n{} evaluated, {} succeeded, {} failed",
                    summary.evaluated, summary.succeeded, summary.failed
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}
