use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;

use crate::utils::filename::SPECTRUM_SUFFIX;

/// Prints help and exits if the first argument asks for it.
/// A missing argument is left to `parse_args`, which reports it as a usage error.
pub fn maybe_print_help_and_exit(bin_name: &str) {
    if wants_help(std::env::args_os().nth(1).as_deref()) {
        print_help_and_exit(bin_name)
    }
}

fn wants_help(first_arg: Option<&OsStr>) -> bool {
    first_arg.is_some_and(is_help_flag)
}

fn is_help_flag(arg: &OsStr) -> bool {
    arg == OsStr::new("--help") || arg == OsStr::new("-help") || arg == OsStr::new("-h")
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print!("{}", help_text(bin_name));
    std::process::exit(0);
}

fn help_text(bin_name: &str) -> String {
    format!(
        "Version: {}\n\
         License: {}\n\
         Usage: {bin_name} file\n\
         \n\
         Computes the 2D Fourier transform of the image's luminance and writes the\n\
         magnitude spectrum to `file{SPECTRUM_SUFFIX}' as 8-bit grayscale.\n\
         Magnitudes above 255 are clipped; the DC term is at the top left corner.\n\
         Set RUST_LOG=info or RUST_LOG=debug for progress messages.\n",
        version_string(),
        env!("CARGO_PKG_LICENSE"),
    )
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");

    format!("fftmagick {version} {cpu}")
}
