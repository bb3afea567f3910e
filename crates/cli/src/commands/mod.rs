pub mod create_csv;
pub mod create_episode;
pub mod delete_all;
pub mod delete_field;
pub mod get_field_data;
pub mod list_fields;
pub mod parse_pickups;

use std::io::{self, BufRead, Write};

/// Ask the operator to confirm a destructive action.
///
/// `--yes` flags pass `assume_yes` to keep the workflows scriptable.
pub(crate) fn confirm(message: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    print!("{} [y/N]: ", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Truncate a cell for fixed-width table output.
pub(crate) fn clip(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let head: String = value.chars().take(width).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}
