//! Panic handler for user-friendly crash reporting.

use std::panic::PanicHookInfo;

/// Install the custom panic handler.
///
/// This should be called early in main() before any other initialization.
pub fn install_handler() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicHookInfo<'_>) {
    eprintln!("\nsolty crashed unexpectedly!\n");
    eprintln!("{info}");
    eprintln!("\nPlease report this bug together with the command line:");
    eprintln!("  solty {}", command_line());
    eprintln!(
        "\nversion {} on {}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

/// Arguments of the current process, skipping the program name.
fn command_line() -> String {
    std::env::args().skip(1).collect::<Vec<_>>().join(" ")
}
