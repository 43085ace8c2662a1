use crate::error::{ParseError, ParseErrorKind};
use crate::types::Value;

/// Parse a JSON document into a [`Value`] tree.
pub fn parse_json(input: &str) -> Result<Value, ParseError> {
    check_not_empty(input)?;

    let value: serde_json::Value = serde_json::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        line: Some(e.line()),
        column: Some(e.column()),
    })?;

    Ok(Value::from(value))
}

/// Parse a YAML document (or JSON, which YAML accepts) into a [`Value`] tree.
///
/// Mapping order is kept, so dictionary keys are compared in document order.
/// Only single-document input is accepted.
#[cfg(feature = "yaml")]
pub fn parse(input: &str) -> Result<Value, ParseError> {
    check_not_empty(input)?;
    check_multi_document(input)?;

    // serde_json::Value as intermediate, as with every other entry point
    let value: serde_json::Value = serde_saphyr::from_str(input)
        .map_err(|e| ParseError::new(ParseErrorKind::Syntax, e.to_string()))?;

    Ok(Value::from(value))
}

fn check_not_empty(input: &str) -> Result<(), ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, "empty input"));
    }
    Ok(())
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
#[cfg(feature = "yaml")]
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for (line_num, line) in input.lines().enumerate() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError {
                    kind: ParseErrorKind::MultiDocument,
                    message: "multi-document YAML is not supported".to_string(),
                    line: Some(line_num + 1),
                    column: None,
                });
            }
        }
    }
    Ok(())
}
