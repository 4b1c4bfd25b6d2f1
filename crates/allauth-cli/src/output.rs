//! Status messages for CLI commands.
//!
//! Everything here goes to stderr; stdout is reserved for command output
//! such as exported JSON.

/// Print a success message
pub fn print_success(msg: &str) {
    eprintln!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    eprintln!("  {:<24} {}", format!("{}:", key), value);
}
