//! Reads a file named on the command line, parses it, and prints the debug
//! outline of the resulting tree. Pure glue over [`tinytagsoup`]'s public
//! API — no parsing logic lives here.

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: tagsoup-dump <file>");
        return ExitCode::FAILURE;
    };

    let input = match std::fs::read(&path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: could not read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let root = tinytagsoup::parse(&input);
    print!("{}", tinytagsoup::serialize::dump(&tinytagsoup::Node::Element(root)));
    ExitCode::SUCCESS
}
