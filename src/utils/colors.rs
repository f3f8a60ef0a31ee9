/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";

/// Gap column color:
/// no gaps → grey ("None" rows fade out),
/// any gaps → yellow (something to fill).
pub fn color_for_gap_count(count: usize) -> &'static str {
    if count == 0 { GREY } else { YELLOW }
}

/// Grey out placeholder values ("None", "00:00", empty) so covered days
/// recede visually. Pad before colorizing; the escape codes confuse
/// width-based padding otherwise.
pub fn colorize_optional(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "None" || trimmed == "00:00" || trimmed == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
