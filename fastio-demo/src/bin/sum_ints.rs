//! Reads test cases from stdin and prints the sum and the sorted values of
//! each.
//!
//! Input: `t`, then for each case `n` followed by `n` integers.

use fastio_common::{IoConfig, Result};
use fastio_reader::FastReader;
use fastio_writer::FastWriter;
use std::io::{BufRead, Write};
use std::process::ExitCode;

fn solve<R: BufRead, W: Write>(
    reader: &mut FastReader<R>,
    writer: &mut FastWriter<W>,
) -> Result<()> {
    let cases: usize = reader.next()?;
    tracing::debug!(cases, "reading test cases");
    for case in 1..=cases {
        let n: usize = reader.next()?;
        let mut values = reader.next_long_array(n)?;
        let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
        values.sort_unstable();
        writer.println(format_args!("Case #{case}: {sum}"));
        writer.print_array(&values);
    }
    Ok(())
}

fn main() -> ExitCode {
    fastio_demo::init_tracing();

    let config = IoConfig::from_env();
    let mut reader = FastReader::stdin();
    let mut writer = FastWriter::stdout_with_config(config);

    let outcome = solve(&mut reader, &mut writer);
    writer.close();

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    if writer.check_error() {
        eprintln!("error: failed to write output");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
