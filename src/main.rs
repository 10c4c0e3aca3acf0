use std::{fs, path::PathBuf, process};

use arithc::{evaluate_source, lower_source, parse_source, trace::Trace};
use clap::Parser;

/// arithc is a minimal compiler front-end for semicolon-terminated integer
/// arithmetic statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file to compile.
    source: PathBuf,

    /// Lower the program and print its LLVM IR instead of interpreting it.
    #[arg(short, long)]
    emit_ir: bool,

    /// Print the syntax tree of every statement instead of interpreting.
    #[arg(short, long, conflicts_with = "emit_ir")]
    dump_ast: bool,

    /// Append a line-oriented debug trace of lexed tokens and lowered
    /// operations to this file.
    #[arg(short, long)]
    trace: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.source).unwrap_or_else(|_| {
        eprintln!("Failed to read the source file '{}'. Perhaps this file does not exist?",
                  args.source.display());
        process::exit(1);
    });

    let mut trace = args.trace.and_then(|path| match Trace::open(&path) {
        Ok(trace) => Some(trace),
        Err(e) => {
            eprintln!("warning: cannot open trace file '{}', continuing without tracing: {e}",
                      path.display());
            None
        },
    });

    let outcome = if args.emit_ir {
        lower_source(&source, trace.as_mut()).map(|ir| print!("{ir}"))
    } else if args.dump_ast {
        parse_source(&source, trace.as_mut()).map(|program| {
                                                 for statement in &program.statements {
                                                     print!("{statement}");
                                                 }
                                             })
                                             .map_err(Into::into)
    } else {
        evaluate_source(&source, trace.as_mut()).map(|results| {
                                                    for result in results {
                                                        println!("{result}");
                                                    }
                                                })
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        process::exit(1);
    }
}
