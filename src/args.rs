//! Command-line parsing.
//!
//! The interface is a single positional argument, so there is nothing for an argument parsing
//! library to do. There are no options: anything other than a help flag, which
//! [`crate::help`] handles before this runs, is taken as the input path.

use std::ffi::OsString;

use crate::{error::Result, fft_err, plan::ExecutionPlan};

pub fn parse_args(args: Vec<OsString>) -> Result<ExecutionPlan> {
    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    let input = iter
        .next()
        .ok_or_else(|| fft_err!(Usage, "no input image specified"))?;

    if let Some(extra) = iter.next() {
        return Err(fft_err!(
            Usage,
            "expected exactly one input image, got unexpected argument `{}'",
            extra.to_string_lossy()
        ));
    }

    Ok(ExecutionPlan::new(input))
}
