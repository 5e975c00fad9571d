// src/models/votes.rs

use crate::errors::ApiError;
use serde::Deserialize;
use serde_json::Value;

/// Body of PATCH requests on reviews and comments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteUpdateRequest {
    /// Accepts a JSON integer or a string holding one
    pub inc_votes: Option<Value>,
}

impl VoteUpdateRequest {
    /// Vote delta to apply, rejected unless it is a whole number
    pub fn delta(&self) -> Result<i32, ApiError> {
        let delta = match &self.inc_votes {
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        delta.ok_or(ApiError::InvalidVote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn request(body: Value) -> VoteUpdateRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_numeric_deltas() {
        assert_eq!(assert_ok!(request(json!({ "inc_votes": 4 })).delta()), 4);
        assert_eq!(assert_ok!(request(json!({ "inc_votes": -30 })).delta()), -30);
        assert_eq!(assert_ok!(request(json!({ "inc_votes": "7" })).delta()), 7);
    }

    #[test]
    fn test_invalid_deltas() {
        for body in [
            json!({}),
            json!({ "inc_votes": null }),
            json!({ "inc_votes": "banana" }),
            json!({ "inc_votes": 1.5 }),
            json!({ "inc_votes": [1] }),
            json!({ "votes": 1 }),
        ] {
            let err = assert_err!(request(body).delta());
            assert!(matches!(err, ApiError::InvalidVote));
        }
    }
}
