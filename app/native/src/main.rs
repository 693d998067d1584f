//! Quotewall - quote of the day wallpaper generator.
//!
//! Running the binary with no arguments writes today's wallpaper using the
//! configured (or default) paths.

fn main() {
    if let Err(err) = quotewall_lib::cli::run() {
        eprintln!("quotewall: {err}");
        std::process::exit(1);
    }
}
