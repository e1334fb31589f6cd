//! Human-readable output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use crate::store::Element;

pub fn format_human(result: &ExecutionResult) -> String {
    let status = match &result.data {
        ResultData::Inserted(Element::Int(value)) => format!("Added {}", value),
        ResultData::Inserted(Element::Pair { key, value }) => {
            format!("Inserted: [{}] -> {}", key, value)
        }
        ResultData::InsertedAt { index, value } => format!("Added {} at index {}", value, index),
        ResultData::Updated(Element::Pair { key, value }) => {
            format!("Updated: [{}] -> {}", key, value)
        }
        ResultData::Updated(Element::Int(value)) => format!("Updated {}", value),
        ResultData::UpdatedAt { index, value } => format!("Set index {} to {}", index, value),
        ResultData::Deleted(Element::Int(value)) => format!("Deleted {}", value),
        ResultData::Deleted(Element::Pair { key, .. }) => format!("Deleted: [{}]", key),
        ResultData::DeletedAt(index) => format!("Deleted element at index {}", index),
        ResultData::Removed(value) => format!("Removed: {}", value),
        ResultData::Popped(value) => format!("Popped: {}", value),
        ResultData::Front(value) => format!("Front of queue: {}", value),
        ResultData::Found(Element::Int(value)) => format!("Element found: {}", value),
        ResultData::Found(Element::Pair { key, value }) => {
            format!("Found: [{}] -> {}", key, value)
        }
        ResultData::NotFound(Element::Int(value)) => format!("Element not found: {}", value),
        ResultData::NotFound(Element::Pair { key, .. }) => format!("Key [{}] not found", key),
        ResultData::ValueAt { index, value } => format!("Element at index {}: {}", index, value),
        ResultData::Length(len) => format!("Length of array: {}", len),
        ResultData::Elements(elements) => {
            let rendered: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
            format!("Elements: {}", rendered.join(" "))
        }
        ResultData::IndexOutOfRange(index) => format!("Index out of bounds: {}", index),
        ResultData::KeyNotFound(key) => format!("Key [{}] not found", key),
        ResultData::EmptyStructure => "Structure is empty".to_string(),
        ResultData::UnknownCommand(command) => format!("Unknown command: {}", command),
    };

    match &result.contents {
        Some(contents) => format!("{}\n{}", status, contents),
        None => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_only() {
        let result = ExecutionResult {
            data: ResultData::Popped(7),
            contents: None,
        };
        assert_eq!(format_human(&result), "Popped: 7");
    }

    #[test]
    fn test_contents_line_follows_status() {
        let result = ExecutionResult {
            data: ResultData::Inserted(Element::Int(5)),
            contents: Some("5 3 1".to_string()),
        };
        assert_eq!(format_human(&result), "Added 5\n5 3 1");
    }

    #[test]
    fn test_empty_contents_still_prints_line() {
        let result = ExecutionResult {
            data: ResultData::Deleted(Element::Int(9)),
            contents: Some(String::new()),
        };
        assert_eq!(format_human(&result), "Deleted 9\n");
    }
}
