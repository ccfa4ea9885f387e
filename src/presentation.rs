use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use gen_ranges_core::json::compare::{ElementDiff, Outcome};

/// Prints a comparison verdict in the tool's report format.
pub fn print_compare_report(outcome: &Outcome) {
    match outcome {
        Outcome::Identical => println!("The two files are identical"),
        Outcome::LengthMismatch { left_len, right_len } => {
            println!("File lengths differ. File1 length: {left_len}, File2 length: {right_len}");
        }
        Outcome::FirstDifference(diff) => print_first_difference(diff),
    }
}

fn print_first_difference(diff: &ElementDiff) {
    println!("First difference found at index {}:", diff.index);
    for (key, value) in &diff.left_only {
        println!("  Key unique to file1: {key}: {value}");
    }
    for (key, value) in &diff.right_only {
        println!("  Key unique to file2: {key}: {value}");
    }
    for changed in &diff.changed {
        println!("  Values differ for key '{}':", changed.key);
        println!("    File1: {}", changed.left);
        println!("    File2: {}", changed.right);
    }
    println!("  Item from file1:");
    println!("{}", to_pretty_indent4(&diff.left_item));
    println!("  Item from file2:");
    println!("{}", to_pretty_indent4(&diff.right_item));
}

/// Pretty-prints a value with a 4-space indent; falls back to the compact
/// form when serialization fails.
fn to_pretty_indent4(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}
