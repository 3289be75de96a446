//! Command-line front end: compile a pattern, test one candidate string.

use std::process::ExitCode;

use clap::Parser;

/// Match a candidate string against a restricted regular expression.
///
/// Patterns support literal bytes, `.` (any single byte), and the modifiers
/// `?`, `*`, `+` applied to the literal that follows them.
#[derive(Parser)]
#[command(name = "rematch", version)]
struct Args {
    /// The pattern to compile
    pattern: String,
    /// The candidate string to match
    input: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let re = match rematch::compile(&args.pattern) {
        Ok(re) => re,
        Err(err) => {
            eprintln!("invalid pattern {:?}: {}", args.pattern, err);
            return ExitCode::from(2);
        }
    };

    if re.is_match(&args.input) {
        println!("{:?} matches {:?}", args.input, re.pattern());
        ExitCode::SUCCESS
    } else {
        println!("{:?} does not match {:?}", args.input, re.pattern());
        ExitCode::from(1)
    }
}
