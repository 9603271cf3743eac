use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use simplang::{
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    parse_program, run,
};
use tracing_subscriber::EnvFilter;

/// simplang runs SimpleLang programs by interpreting their syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells simplang to read the program from a file instead of taking the
    /// source inline.
    #[arg(short, long)]
    file: bool,

    /// Prints the value returned by `main` on its own line after the program
    /// has finished.
    #[arg(short = 'r', long)]
    print_result: bool,

    /// Raises the log level (`-v` debug, `-vv` trace). `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The program source, or its path when `--file` is given.
    contents: String,

    /// Arguments for `main`: integers, `true` or `false`.
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let outcome = run(&program, &args.args);
    if let Err(e) = write_result(&mut io::stdout(), &outcome, args.print_result) {
        eprintln!("Failed to write the program output: {e}");
        return ExitCode::FAILURE;
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Flushes the program's output, then writes the result of `main` when
/// `print_result` is set and there is one.
fn write_result<W: Write>(out: &mut W,
                          outcome: &EvalResult<Option<Value>>,
                          print_result: bool)
                          -> io::Result<()> {
    out.flush()?;
    if print_result
       && let Ok(Some(value)) = outcome
    {
        writeln!(out, "{value}")?;
        out.flush()?;
    }
    Ok(())
}
