//! Walkthrough of the reader and writer APIs.
//!
//! Reads an optional list of integers from stdin (`n` followed by `n`
//! values) and echoes it back; with empty input it prints a fixed array.

use fastio_common::IoConfig;
use fastio_reader::{FastIoError, FastReader};
use fastio_writer::FastWriter;
use std::process::ExitCode;

fn main() -> ExitCode {
    fastio_demo::init_tracing();

    let config = IoConfig::from_env();
    let mut reader = FastReader::stdin();
    let mut writer = FastWriter::stdout_with_config(config);

    writer.println("Fast IO Library Example");

    let numbers = match reader.next_int() {
        Ok(n) if n >= 0 => match reader.next_int_array(n as usize) {
            Ok(values) => values,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        Ok(n) => {
            eprintln!("error: negative count {n}");
            return ExitCode::FAILURE;
        }
        Err(FastIoError::EndOfInput) => vec![1, 2, 3, 4, 5],
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    writer.newline();
    writer.println("Example with array:");
    writer.print("Array: ");
    writer.print_array(&numbers);
    writer.println(format_args!(
        "Sum: {}",
        numbers.iter().map(|&v| i64::from(v)).sum::<i64>()
    ));

    reader.close();
    writer.close();
    if writer.check_error() {
        eprintln!("error: failed to write output");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
