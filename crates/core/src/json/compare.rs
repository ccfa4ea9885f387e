use std::path::Path;

use serde_json::Value;

use crate::error::{CoreError, Result};

use super::read_json;

/// Verdict of comparing two top-level JSON lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Identical,
    /// The shared prefix matches but the lists have different lengths.
    LengthMismatch { left_len: usize, right_len: usize },
    /// The first index at which the two lists disagree.
    FirstDifference(Box<ElementDiff>),
}

/// Breakdown of the first differing pair of elements.
///
/// The key-level fields are populated only when both elements are objects;
/// for any other shapes the full items speak for themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDiff {
    pub index: usize,
    /// Keys present only in the left element, with their values.
    pub left_only: Vec<(String, Value)>,
    /// Keys present only in the right element, with their values.
    pub right_only: Vec<(String, Value)>,
    /// Keys present in both elements whose values differ.
    pub changed: Vec<ChangedKey>,
    pub left_item: Value,
    pub right_item: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangedKey {
    pub key: String,
    pub left: Value,
    pub right: Value,
}

/// Loads two JSON files and compares their top-level lists element-wise.
///
/// # Errors
///
/// - [`CoreError::FileRead`] / [`CoreError::Json`] when either file cannot
///   be read or parsed.
/// - [`CoreError::NotAList`] when a file's top-level value is not an array.
pub fn compare_files(left: &Path, right: &Path) -> Result<Outcome> {
    let left_items = read_list(left)?;
    let right_items = read_list(right)?;
    Ok(compare_items(&left_items, &right_items))
}

fn read_list(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        _ => Err(CoreError::NotAList {
            path: path.to_path_buf(),
        }),
    }
}

/// Walks both lists in lockstep and stops at the first differing index;
/// when the shared prefix matches, the lengths decide the verdict.
pub fn compare_items(left: &[Value], right: &[Value]) -> Outcome {
    for (index, (left_item, right_item)) in left.iter().zip(right.iter()).enumerate() {
        if left_item != right_item {
            return Outcome::FirstDifference(Box::new(diff_elements(index, left_item, right_item)));
        }
    }
    if left.len() != right.len() {
        return Outcome::LengthMismatch {
            left_len: left.len(),
            right_len: right.len(),
        };
    }
    Outcome::Identical
}

fn diff_elements(index: usize, left: &Value, right: &Value) -> ElementDiff {
    let mut left_only = Vec::new();
    let mut right_only = Vec::new();
    let mut changed = Vec::new();
    if let (Value::Object(left_map), Value::Object(right_map)) = (left, right) {
        for (key, value) in left_map {
            if !right_map.contains_key(key) {
                left_only.push((key.clone(), value.clone()));
            }
        }
        for (key, value) in right_map {
            if !left_map.contains_key(key) {
                right_only.push((key.clone(), value.clone()));
            }
        }
        for (key, left_value) in left_map {
            if let Some(right_value) = right_map.get(key)
                && left_value != right_value
            {
                changed.push(ChangedKey {
                    key: key.clone(),
                    left: left_value.clone(),
                    right: right_value.clone(),
                });
            }
        }
    }
    ElementDiff {
        index,
        left_only,
        right_only,
        changed,
        left_item: left.clone(),
        right_item: right.clone(),
    }
}
