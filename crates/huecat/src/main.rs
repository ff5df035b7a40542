//! huecat command-line entry point.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use huecat::{load, no_color_requested, probe_stdout, run_sources, Args};

fn main() -> ExitCode {
    huecat::init_tracing();

    let args = Args::parse();
    let no_color = no_color_requested(std::env::var_os("NO_COLOR").as_deref());
    let options = args.options(probe_stdout(), no_color);
    tracing::debug!(?options, "starting");

    let operands = args.sources();
    let sources = operands.iter().map(|operand| load(operand, options.limit));
    let out = BufWriter::new(io::stdout().lock());

    match run_sources(sources, &options, out, &mut io::stderr().lock()) {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("huecat: {err}");
            ExitCode::FAILURE
        }
    }
}
