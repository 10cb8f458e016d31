use serde_json::Value;

use super::outcome::{BatchResultSet, RequestOutcome};
use crate::system::console::{Console, Tone};

fn render_body(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn print_outcome(console: &Console, outcome: &RequestOutcome) {
    match outcome {
        RequestOutcome::Success(record) => {
            console.out(
                Tone::Success,
                format!("✅ Response from URL: {}", record.url),
            );
            console.out(Tone::Plain, format!("   ➡ {}", render_body(&record.body)));
            console.out(
                Tone::Info,
                format!("⏱️  Response time: {} ms\n", record.elapsed_ms),
            );
        }
        RequestOutcome::Failure(record) => {
            console.err(Tone::Failure, format!("❌ Error fetching URL: {}", record.url));
            console.err(Tone::Plain, format!("   ➡ {}\n", record.message));
        }
    }
}

pub fn print_summary(console: &Console, results: &BatchResultSet) {
    console.out(
        Tone::Warning,
        format!("📊 Total successful requests: {}", results.success_count()),
    );
    console.out(
        Tone::Failure,
        format!("🔴 Total failed requests: {}", results.failure_count()),
    );

    if results.failures.is_empty() {
        return;
    }
    console.out(Tone::Failure, "🚨 Errors:");
    for failure in &results.failures {
        console.out(
            Tone::Plain,
            format!("   - URL: {} ➡ {}", failure.url, failure.message),
        );
    }
}
