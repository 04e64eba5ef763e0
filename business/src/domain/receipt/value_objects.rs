use uuid::Uuid;

/// Opaque identifier handed out when a receipt is stored.
/// Lookups accept any string; only issued identifiers resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Creates a ReceiptId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random (v4 UUID) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ReceiptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_distinct_ids() {
        let first = ReceiptId::generate();
        let second = ReceiptId::generate();

        assert_ne!(first, second);
    }

    #[test]
    fn should_generate_uuid_formatted_id() {
        let id = ReceiptId::generate();

        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn should_keep_arbitrary_strings_verbatim() {
        let id: ReceiptId = "not-a-uuid".into();
        assert_eq!(id.as_str(), "not-a-uuid");
        assert_eq!(format!("{}", id), "not-a-uuid");
    }
}
