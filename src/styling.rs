//! User-facing status lines

use console::{style, Emoji};

pub static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
pub static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[error] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[warn] ");

pub fn print_success(message: &str) {
    println!("{}{}", SUCCESS, style(message).green());
}

pub fn print_error(message: &str) {
    eprintln!("{}{}", FAILURE, style(message).red().bold());
}

pub fn print_warning(message: &str) {
    eprintln!("{}{}", WARNING, style(message).yellow());
}

/// Indented follow-up line under an error, e.g. an install command.
pub fn print_hint(message: &str) {
    eprintln!("  {}", style(message).dim());
}
