//! Severity-tagged terminal output
//!
//! Informational messages go to stdout, warnings and errors to stderr, each
//! prefixed with a styled severity tag so both humans and calling agents can
//! triage the log.

use console::Style;

/// Informational message on stdout
pub fn info(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("INFO"), message);
}

/// Warning on stderr; the sequence continues
pub fn warn(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("WARN"),
        message
    );
}

/// Error on stderr
pub fn error(message: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("ERROR"), message);
}

/// Section header for a bootstrap step
pub fn section(title: &str) {
    println!("{}", Style::new().cyan().bold().apply_to(title));
}

/// Echo an external command line (verbose mode only)
pub fn command_line(verbose: bool, program: &str, args: &[String]) {
    if verbose {
        println!(
            "{} {} {}",
            Style::new().dim().apply_to("+"),
            Style::new().dim().apply_to(program),
            Style::new().dim().apply_to(args.join(" "))
        );
    }
}
