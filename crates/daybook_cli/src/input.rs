//! Prompt helpers for the menu loop.
//!
//! Every helper reads through a generic source so the answer handling stays
//! testable; the public functions bind to stdin. EOF always means "cancel":
//! required prompts return `None` and defaulted prompts fall back, so a piped
//! session ends cleanly instead of spinning or saving half-empty records.

use chrono::NaiveDateTime;
use daybook_core::{parse_datetime, Priority, Repeat};
use std::io::{self, BufRead, Write};

/// Reads one trimmed line; `None` on EOF.
fn read_line_from<R: BufRead>(source: &mut R) -> Option<String> {
    let mut buffer = String::new();
    match source.read_line(&mut buffer) {
        Ok(0) => None,
        Ok(_) => Some(buffer.trim().to_string()),
        Err(_) => None,
    }
}

fn required_from<R: BufRead>(source: &mut R, label: &str) -> Option<String> {
    loop {
        print!("{label}: ");
        let _ = io::stdout().flush();
        match read_line_from(source) {
            Some(answer) if !answer.is_empty() => return Some(answer),
            Some(_) => println!("  (required)"),
            None => return None,
        }
    }
}

fn default_from<R: BufRead>(source: &mut R, label: &str, default: &str) -> String {
    print!("{label} [{default}]: ");
    let _ = io::stdout().flush();
    match read_line_from(source) {
        Some(answer) if !answer.is_empty() => answer,
        _ => default.to_string(),
    }
}

fn priority_from<R: BufRead>(source: &mut R) -> Priority {
    loop {
        match default_from(source, "Priority (high/medium/low)", "medium")
            .to_lowercase()
            .as_str()
        {
            "h" | "high" => return Priority::High,
            "m" | "medium" => return Priority::Medium,
            "l" | "low" => return Priority::Low,
            other => println!("  unknown priority `{other}`"),
        }
    }
}

fn repeat_from<R: BufRead>(source: &mut R) -> Repeat {
    loop {
        match default_from(source, "Repeat (once/daily/weekly/monthly)", "once")
            .to_lowercase()
            .as_str()
        {
            "once" => return Repeat::Once,
            "daily" => return Repeat::Daily,
            "weekly" => return Repeat::Weekly,
            "monthly" => return Repeat::Monthly,
            other => println!("  unknown repeat `{other}`"),
        }
    }
}

/// Prompts until a non-empty answer arrives; `None` on EOF.
pub fn prompt(label: &str) -> Option<String> {
    required_from(&mut io::stdin().lock(), label)
}

/// Prompts once, falling back to `default` on empty input or EOF.
pub fn prompt_default(label: &str, default: &str) -> String {
    default_from(&mut io::stdin().lock(), label, default)
}

/// Prompts once; empty input means "skip".
pub fn prompt_optional(label: &str) -> Option<String> {
    print!("{label} (Enter to skip): ");
    let _ = io::stdout().flush();
    read_line_from(&mut io::stdin().lock()).filter(|answer| !answer.is_empty())
}

/// Prompts for a deadline, re-prompting on bad formats until valid or
/// skipped.
pub fn prompt_date_optional(label: &str) -> Option<NaiveDateTime> {
    loop {
        let answer = prompt_optional(label)?;
        match parse_datetime(&answer) {
            Ok(parsed) => return Some(parsed),
            Err(err) => println!("  {err}"),
        }
    }
}

/// Prompts for a required deadline; `None` only on EOF.
pub fn prompt_date(label: &str) -> Option<NaiveDateTime> {
    loop {
        print!("{label} (YYYY-MM-DD or YYYY-MM-DD HH:MM): ");
        let _ = io::stdout().flush();
        let answer = read_line_from(&mut io::stdin().lock())?;
        match parse_datetime(&answer) {
            Ok(parsed) => return Some(parsed),
            Err(err) => println!("  {err}"),
        }
    }
}

/// Prompts for a priority, defaulting to medium.
pub fn prompt_priority() -> Priority {
    priority_from(&mut io::stdin().lock())
}

/// Prompts for a repeat cadence, defaulting to once.
pub fn prompt_repeat() -> Repeat {
    repeat_from(&mut io::stdin().lock())
}

/// Prompts for a 1-based list position; `None` on EOF, empty input, or an
/// out-of-range answer.
pub fn prompt_index(label: &str, len: usize) -> Option<usize> {
    print!("{label} (1-{len}): ");
    let _ = io::stdout().flush();
    let answer = read_line_from(&mut io::stdin().lock())?;
    match answer.parse::<usize>() {
        Ok(position) if (1..=len).contains(&position) => Some(position - 1),
        _ => {
            println!("  invalid selection");
            None
        }
    }
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(label: &str) -> bool {
    matches!(
        prompt_default(label, "n").to_lowercase().as_str(),
        "y" | "yes"
    )
}
