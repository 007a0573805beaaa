//! Stored message types

use serde::Serialize;

/// A message row read back from a durable backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: i64,
    pub text: String,
    /// Insertion timestamp as rendered by the database.
    pub time: String,
}

/// Result of a listing. The shape depends on the storage mode and is
/// serialized without a tag, so durable listings render as objects and
/// volatile listings as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageList {
    Records(Vec<Message>),
    Texts(Vec<String>),
}

impl MessageList {
    /// Number of entries, whichever shape the listing has.
    pub fn count(&self) -> usize {
        match self {
            MessageList::Records(records) => records.len(),
            MessageList::Texts(texts) => texts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_serialize_as_objects() {
        let list = MessageList::Records(vec![Message {
            id: 7,
            text: "hello".to_string(),
            time: "2024-05-01 10:00:00".to_string(),
        }]);

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!([{ "id": 7, "text": "hello", "time": "2024-05-01 10:00:00" }])
        );
    }

    #[test]
    fn test_texts_serialize_as_strings() {
        let list = MessageList::Texts(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["a", "b"]));
        assert_eq!(list.count(), 2);
    }
}
