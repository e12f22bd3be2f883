//! Implementation of `edaa files`.

use std::io::{self, Write};

use edaa_vivado::parse_with;

use crate::report::{select_files, write_files};
use crate::{FilesArgs, GlobalArgs};

/// Imports the project and lists its files on stdout.
///
/// Returns exit code 0 when at least one file matched and 2 otherwise.
pub fn run(args: &FilesArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, global, &mut out)
}

fn run_to(
    args: &FilesArgs,
    global: &GlobalArgs,
    out: &mut impl Write,
) -> Result<i32, Box<dyn std::error::Error>> {
    let project = parse_with(&args.project, &global.options)?;
    let rows = select_files(&project, args.file_type, args.fileset.as_deref())?;
    tracing::debug!(
        project = project.name(),
        filter = %args.file_type,
        matched = rows.len(),
        "selected files"
    );
    write_files(out, &rows, args.format)?;
    Ok(if rows.is_empty() { 2 } else { 0 })
}
