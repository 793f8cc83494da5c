#[macro_use] extern crate derive_more;

mod java;
mod schema;

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;
use thiserror::Error;

// sysexits EX_USAGE
const EX_USAGE: i32 = 64;

/// Generates the interpreter's AST class hierarchy from the compiled-in
/// grammar tables, one source file per hierarchy.
#[derive(Parser, Debug)]
#[command(name = "bloxi-astgen")]
struct Cli {
    /// directory the generated sources are written into
    output_dir: PathBuf
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Schema(#[from] java::SchemaError),

    #[error(transparent)]
    Io(#[from] std::io::Error)
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(_) => {
            eprintln!("Usage: bloxi-astgen <output directory>");
            exit(EX_USAGE);
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let code = java::code_gen(&cli.output_dir, &schema::grammars())?;

    for (path, text) in code.files() {
        println!("Writing file: {:#?}", path);
        let mut file = File::create(path)?;
        write!(file, "{}", text)?;
    }

    Ok(())
}

fn main() {
    let cli = parse_args();

    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        exit(1);
    }
}
