use crate::error::EventError;
use serde_json::Value;

/// Pull the SNS message text out of a Lambda SNS event.
///
/// Only the first record is read. Every step of the `Records[0].Sns.Message`
/// path is checked, so a malformed event becomes an [`EventError`] instead of
/// a panic.
pub fn extract_message(event: &Value) -> Result<&str, EventError> {
    let records = field(event, "Records")?
        .as_array()
        .ok_or(EventError::UnexpectedType {
            field: "Records",
            expected: "an array",
        })?;

    let record = records.first().ok_or(EventError::EmptyRecords)?;
    if !record.is_object() {
        return Err(EventError::UnexpectedType {
            field: "Records[0]",
            expected: "an object",
        });
    }

    let sns = field(record, "Sns")?;
    if !sns.is_object() {
        return Err(EventError::UnexpectedType {
            field: "Sns",
            expected: "an object",
        });
    }

    field(sns, "Message")?
        .as_str()
        .ok_or(EventError::UnexpectedType {
            field: "Message",
            expected: "a string",
        })
}

fn field<'a>(value: &'a Value, name: &'static str) -> Result<&'a Value, EventError> {
    value.get(name).ok_or(EventError::MissingField(name))
}
