//! Status messages for the process itself, kept off stdout so replies stay
//! clean for piping.

use std::fmt;

use colored::Colorize;

pub fn info(message: impl fmt::Display) {
    eprintln!("{} {}", "[i]".cyan(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}
