//! JSON output formatting

use crate::engine::executor::ExecutionResult;

pub fn format_json(result: &ExecutionResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::executor::ResultData;
    use crate::store::Element;

    #[test]
    fn test_json_shape() {
        let result = ExecutionResult {
            data: ResultData::Inserted(Element::Int(7)),
            contents: Some("7".to_string()),
        };
        let value: serde_json::Value = serde_json::from_str(&format_json(&result)).unwrap();
        assert_eq!(value["data"]["Inserted"]["Int"], 7);
        assert_eq!(value["contents"], "7");
    }
}
