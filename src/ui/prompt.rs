use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user. Anything but `y`/`yes` is a no,
/// including a closed stdin.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
