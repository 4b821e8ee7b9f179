//! mal command-line driver.

use malc::{init_tracing, parse_args, Command, Problem, Session, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };

    init_tracing(options.log_filter.as_deref());

    let result = match options.command {
        Command::Help => {
            print!("{USAGE}");
            Ok(())
        }
        Command::Run { path } => run_file(&path),
        Command::Eval { source } => eval_source(&source),
    };

    if let Err(problem) = result {
        eprintln!("error: {problem}");
        std::process::exit(1);
    }
}

/// `mal run`: evaluate the file, printing only what the program prints.
fn run_file(path: &str) -> Result<(), Problem> {
    Session::new()?.run_file(path)
}

/// `mal eval`: print the readable rendering of every result.
fn eval_source(source: &str) -> Result<(), Problem> {
    for line in Session::new()?.rep(source)? {
        println!("{line}");
    }
    Ok(())
}
