use serde_json::Value;

/// One job recommendation, exactly as the server returned it.
///
/// The payload shape is owned by the server. The store keeps it opaque and
/// never inspects individual fields; presentation code decides what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Job(pub Value);

impl From<Value> for Job {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
