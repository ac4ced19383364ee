use serde::{Deserialize, Serialize};

use crate::InvokeResult;

/// JSON body sent to the remote function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationPayload {
    pub keyword: String,
}

impl InvocationPayload {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Serialize to the wire form, `{"keyword":"..."}`.
    pub fn to_bytes(&self) -> InvokeResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_form() {
        let bytes = InvocationPayload::new("hello").to_bytes().unwrap();
        assert_eq!(bytes, br#"{"keyword":"hello"}"#);
    }

    #[test]
    fn test_payload_escapes_keyword() {
        let bytes = InvocationPayload::new(r#"say "hi""#).to_bytes().unwrap();
        assert_eq!(bytes, br#"{"keyword":"say \"hi\""}"#);

        let decoded: InvocationPayload = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.keyword, r#"say "hi""#);
    }
}
