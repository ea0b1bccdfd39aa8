use serde::Serialize;
use uuid::Uuid;

/// A single published unit in the load run.
///
/// Each message carries exactly one field, `message_id`, holding a freshly
/// generated v4 UUID in its canonical lowercase hyphenated form. Messages
/// are fire-and-forget: they exist only long enough to be serialized into a
/// batch, and uniqueness of the identifier is their only invariant.
///
/// On the wire the message is the JSON encoding of this struct:
///
/// ```text
/// {"message_id":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message_id: String,
}

impl Message {
    /// Creates a message with a fresh unique identifier.
    pub fn new() -> Self {
        Self {
            message_id: Uuid::new_v4().to_string(),
        }
    }

    /// Serializes the message into its JSON wire form.
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}
