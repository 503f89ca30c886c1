//! Terminal UI components (spinner, colors, response box).

pub mod frame;
mod spinner;
mod style;

pub use frame::print_framed;
pub use spinner::{PROCESSING_MESSAGE, Spinner};
pub use style::Style;

/// Prints an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}

/// Prints a status confirmation to stderr (suppressed in quiet mode).
pub fn print_status(message: &str) {
    crate::status!("{}", Style::success(message));
}
