//! Implementation of `edaa summary`.

use std::io::{self, Write};

use edaa_vivado::parse_with;

use crate::report::{summarize, write_summary};
use crate::{GlobalArgs, SummaryArgs};

/// Imports the project and prints its filesets and libraries.
pub fn run(args: &SummaryArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, global, &mut out)
}

fn run_to(
    args: &SummaryArgs,
    global: &GlobalArgs,
    out: &mut impl Write,
) -> Result<i32, Box<dyn std::error::Error>> {
    let project = parse_with(&args.project, &global.options)?;
    let summary = summarize(&project);
    write_summary(out, &summary, args.format)?;
    Ok(0)
}
