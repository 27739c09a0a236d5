use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::emit::OutputMode;

#[must_use]
pub fn run_modes() -> i32 {
    print!("{}", format_modes());
    EXIT_SUCCESS
}

/// One line per output mode: CLI name, then label.
#[must_use]
pub fn format_modes() -> String {
    let mut output = String::new();
    for mode in OutputMode::ALL {
        let _ = writeln!(output, "{:<16} {}", mode.name(), mode.label());
    }
    output
}

#[cfg(test)]
#[path = "modes_tests.rs"]
mod tests;
