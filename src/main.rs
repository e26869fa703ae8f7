mod config;

use clap::Parser;
use config::{VERSION, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use klisp::interpreter::{self, Interpreter};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::process::ExitCode;

/// A small S-expression Lisp with tail calls and first-class macros
#[derive(Parser, Debug)]
#[command(name = "klisp")]
#[command(version = VERSION)]
#[command(about = "Klisp interpreter")]
struct CliArgs {
    /// Script files to execute, in order. With no files, starts the REPL.
    #[arg(value_name = "FILE")]
    scripts: Vec<PathBuf>,

    /// Drop into the interactive prompt even after running script files
    #[arg(long = "interactive", short = 'i')]
    interactive: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let interp = Interpreter::new();

    for path in &args.scripts {
        if let Err(err) = run_script(&interp, path) {
            eprintln!("klisp: {err}");
            return ExitCode::FAILURE;
        }
    }

    if args.scripts.is_empty() || args.interactive {
        if let Err(err) = run_repl(&interp) {
            eprintln!("klisp: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn run_script(interp: &Interpreter, path: &PathBuf) -> Result<(), String> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    interp
        .run(&source)
        .map(|_| ())
        .map_err(|e| format!("{}: {e}", path.display()))
}

fn run_repl(interp: &Interpreter) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| format!("failed to start REPL: {e}"))?;

    let history_file = ".klisp_history";
    let _ = rl.load_history(history_file);

    println!("{WELCOME_MESSAGE}");
    println!("{WELCOME_SUBTITLE}");

    loop {
        match rl.readline("klisp> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match line.trim() {
                    "(quit)" | "(exit)" => break,
                    _ => {}
                }
                match interp.run(&line) {
                    Ok(value) => println!("=> {}", interpreter::print(&value)),
                    Err(err) => eprintln!("error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}
