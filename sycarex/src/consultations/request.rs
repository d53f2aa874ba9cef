use serde::{Deserialize, Serialize};

/// One lead-capture submission as written by the client. Field names
/// match the columns of the `consultations` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub business_needs: String,
}

impl ConsultationRequest {
    pub fn new(name: &str, email: &str, business_needs: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            business_needs: business_needs.to_string(),
        }
    }

    /// Required-field constraint: all three fields non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.business_needs.is_empty()
    }
}

/// Full row shape of the `consultations` table. `id`, `status` and the
/// timestamps are assigned by the store; the client writes once and
/// never reads a row back.
#[derive(Clone, Debug, Deserialize)]
pub struct ConsultationRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub business_needs: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_column_names() {
        let request = ConsultationRequest::new(
            "Ada",
            "ada@example.com",
            "Need invoicing automation",
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["business_needs"], "Need invoicing automation");
    }

    #[test]
    fn test_is_complete_requires_all_fields() {
        let request = ConsultationRequest::new("Ada", "ada@example.com", "Automation");
        assert!(request.is_complete());

        assert!(!ConsultationRequest::new("", "ada@example.com", "x").is_complete());
        assert!(!ConsultationRequest::new("Ada", "", "x").is_complete());
        assert!(!ConsultationRequest::new("Ada", "ada@example.com", "").is_complete());
    }

    #[test]
    fn test_record_deserializes_server_assigned_fields() {
        let row = r#"{
            "id": "4d9e2b6a-6f3e-4b39-9a39-1c5a4f5c2f10",
            "name": "Ada",
            "email": "ada@example.com",
            "business_needs": "Need invoicing automation",
            "status": "new",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let record: ConsultationRecord = serde_json::from_str(row).unwrap();
        assert_eq!(record.status, "new");
        assert_eq!(record.name, "Ada");
    }
}
