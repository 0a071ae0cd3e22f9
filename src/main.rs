use std::ffi::OsString;

use fftmagick::{args, error::FftError, help, init};

fn main() {
    help::maybe_print_help_and_exit("fftmagick");
    init::init();

    let arguments: Vec<_> = std::env::args_os().collect();
    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), FftError> {
    let plan = args::parse_args(args)?;
    plan.execute()?;
    println!("{}", std::path::Path::new(&plan.output_file).display());
    Ok(())
}
