mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use pseudo::error::*;
use std::process;

/// Pseudo-localizes the input or lists the character library.
///
/// `Ok(false)` means the library listing had no entry for the requested
/// character.
fn run() -> Result<bool> {
    App::new()?.start()
}

fn main() {
    let code = match run() {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            default_error_handler(&error, &mut std::io::stderr().lock());
            1
        }
    };
    process::exit(code);
}
