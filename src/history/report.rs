use serde_json::Value;

use super::types::HistoryEntry;
use crate::system::console::{Console, Tone};

pub fn print_history(console: &Console, entries: &[HistoryEntry]) {
    if entries.is_empty() {
        console.out(Tone::Warning, "Command history is empty.");
        return;
    }

    console.out(Tone::Banner, "Command History:");
    for (index, entry) in entries.iter().enumerate() {
        console.out(
            Tone::Info,
            format!(
                "{}. [{}] {}",
                index.saturating_add(1),
                entry.timestamp,
                entry.command
            ),
        );
        if !matches!(&entry.params, Value::Null) {
            console.out(Tone::Plain, format!("   Params: {}", entry.params));
        }
        if !entry.result.is_empty() {
            console.out(Tone::Plain, format!("   Result: {}", entry.result));
        }
    }
}
