use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOutput {
    pub id: String,
    pub reviewedtext: String,
    pub storedtext: String,
}

/// Document shape of the text collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub reviewedtext: String,
    pub storedtext: String,
}

impl TextRecord {
    pub fn new(storedtext: impl Into<String>, reviewedtext: impl Into<String>) -> Self {
        Self {
            id: None,
            reviewedtext: reviewedtext.into(),
            storedtext: storedtext.into(),
        }
    }

    pub fn into_output(self, id: String) -> TextOutput {
        TextOutput {
            id,
            reviewedtext: self.reviewedtext,
            storedtext: self.storedtext,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document, to_document};

    use super::*;

    #[test]
    fn new_record_leaves_id_to_the_store() {
        let document = to_document(&TextRecord::new("abc", "cba")).unwrap();
        assert_eq!(document, doc! { "reviewedtext": "cba", "storedtext": "abc" });
    }

    #[test]
    fn stored_record_round_trips_with_id() {
        let oid = ObjectId::new();
        let record = TextRecord {
            id: Some(oid),
            ..TextRecord::new("HeLLo", "HELLO")
        };

        let document = to_document(&record).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), oid);
        assert_eq!(from_document::<TextRecord>(document).unwrap(), record);
    }

    #[test]
    fn output_takes_the_given_id() {
        let output = TextRecord::new("abc", "cba").into_output("42".into());
        assert_eq!(
            output,
            TextOutput {
                id: "42".into(),
                reviewedtext: "cba".into(),
                storedtext: "abc".into(),
            }
        );
    }
}
