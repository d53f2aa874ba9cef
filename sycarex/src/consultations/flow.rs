use log::error;

use super::request::ConsultationRequest;
use super::store::ConsultationStore;
use crate::SycarexError;

pub const SUCCESS_NOTICE: &str = "Thank you! Your consultation request has been \
submitted successfully. We'll get back to you soon.";

pub const FAILURE_NOTICE: &str = "Sorry, there was an error submitting your \
request. Please try again.";

/// Form fields addressable by the change operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    BusinessNeeds,
}

/// Outcome of the last completed submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failure,
}

impl SubmitStatus {
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitStatus::Success => SUCCESS_NOTICE,
            SubmitStatus::Failure => FAILURE_NOTICE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitStatus::Success)
    }
}

/// Submit lifecycle of the consultation form: idle -> submitting -> idle
/// with a success or failure notice. UI-independent; the view drives it
/// through `set_field`, `begin_submit` and `finish_submit`.
#[derive(Clone, Debug, Default)]
pub struct SubmissionFlow {
    name: String,
    email: String,
    business_needs: String,
    is_submitting: bool,
    status: Option<SubmitStatus>,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a single buffer field, leaving the others untouched.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::BusinessNeeds => self.business_needs = value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn business_needs(&self) -> &str {
        &self.business_needs
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    fn to_request(&self) -> ConsultationRequest {
        ConsultationRequest::new(&self.name, &self.email, &self.business_needs)
    }

    /// Enter the submitting state. Returns the request snapshot to send,
    /// or `None` when a submit is already in flight or a required field
    /// is empty; in that case no state changes.
    pub fn begin_submit(&mut self) -> Option<ConsultationRequest> {
        if self.is_submitting {
            return None;
        }
        let request = self.to_request();
        if !request.is_complete() {
            return None;
        }
        self.status = None;
        self.is_submitting = true;
        Some(request)
    }

    /// Leave the submitting state. The flag is cleared on every path;
    /// the buffer is reset only after a confirmed insert so a failed
    /// submit can be retried without re-typing.
    pub fn finish_submit(&mut self, result: Result<(), SycarexError>) {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.status = Some(SubmitStatus::Success);
                self.name.clear();
                self.email.clear();
                self.business_needs.clear();
            }
            Err(err) => {
                error!("error submitting consultation: {}", err);
                self.status = Some(SubmitStatus::Failure);
            }
        }
    }

    /// Run one full submit against the given store: at most one insert
    /// per invocation, zero when the guard refuses.
    pub async fn submit(&mut self, store: &dyn ConsultationStore) {
        if let Some(request) = self.begin_submit() {
            let result = store.insert(&request).await;
            self.finish_submit(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::consultations::store::MemoryStore;

    struct RejectingStore;

    #[async_trait(?Send)]
    impl ConsultationStore for RejectingStore {
        async fn insert(
            &self,
            _request: &ConsultationRequest,
        ) -> Result<(), SycarexError> {
            Err(SycarexError::Rejected {
                status: 401,
                message: "new row violates row-level security policy".to_string(),
            })
        }
    }

    fn filled_flow() -> SubmissionFlow {
        let mut flow = SubmissionFlow::new();
        flow.set_field(Field::Name, "Ada".to_string());
        flow.set_field(Field::Email, "ada@example.com".to_string());
        flow.set_field(
            Field::BusinessNeeds,
            "Need invoicing automation".to_string(),
        );
        flow
    }

    #[test]
    fn test_set_field_updates_single_field() {
        let mut flow = SubmissionFlow::new();
        flow.set_field(Field::Email, "ada@example.com".to_string());
        assert_eq!(flow.name(), "");
        assert_eq!(flow.email(), "ada@example.com");
        assert_eq!(flow.business_needs(), "");
    }

    #[tokio::test]
    async fn test_accepted_submit_resets_buffer_and_reports_success() {
        // Scenario A
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        flow.submit(&store).await;

        assert_eq!(
            store.rows(),
            vec![ConsultationRequest::new(
                "Ada",
                "ada@example.com",
                "Need invoicing automation",
            )]
        );
        assert_eq!(flow.name(), "");
        assert_eq!(flow.email(), "");
        assert_eq!(flow.business_needs(), "");
        assert!(!flow.is_submitting());
        let notice = flow.status().unwrap().notice();
        assert!(notice.contains("Thank you"));
    }

    #[tokio::test]
    async fn test_rejected_submit_preserves_buffer_and_reports_failure() {
        // Scenario B
        let mut flow = filled_flow();
        flow.submit(&RejectingStore).await;

        assert_eq!(flow.name(), "Ada");
        assert_eq!(flow.email(), "ada@example.com");
        assert_eq!(flow.business_needs(), "Need invoicing automation");
        assert!(!flow.is_submitting());
        let notice = flow.status().unwrap().notice();
        assert!(!notice.contains("Thank you"));
    }

    #[tokio::test]
    async fn test_empty_field_blocks_submit() {
        // Scenario C
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        flow.set_field(Field::Name, String::new());
        flow.submit(&store).await;

        assert!(store.is_empty());
        assert!(!flow.is_submitting());
        assert!(flow.status().is_none());
    }

    #[tokio::test]
    async fn test_submit_while_submitting_issues_no_request() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        assert!(flow.begin_submit().is_some());
        assert!(flow.is_submitting());

        flow.submit(&store).await;
        assert!(store.is_empty());
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_flag_set_between_begin_and_finish() {
        let mut flow = filled_flow();
        assert!(!flow.is_submitting());
        let request = flow.begin_submit();
        assert!(request.is_some());
        assert!(flow.is_submitting());
        flow.finish_submit(Ok(()));
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_flag_cleared_on_failure() {
        let mut flow = filled_flow();
        flow.begin_submit();
        flow.finish_submit(Err(SycarexError::Request("connection reset".to_string())));
        assert!(!flow.is_submitting());
        assert_eq!(flow.status(), Some(&SubmitStatus::Failure));
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_clears_prior_notice() {
        let mut flow = filled_flow();
        flow.submit(&RejectingStore).await;
        assert_eq!(flow.status(), Some(&SubmitStatus::Failure));

        // buffer was preserved, so the retry is reachable immediately
        let request = flow.begin_submit().unwrap();
        assert!(flow.status().is_none());
        assert_eq!(request.name, "Ada");
        flow.finish_submit(Ok(()));
        assert_eq!(flow.status(), Some(&SubmitStatus::Success));
    }

    #[tokio::test]
    async fn test_each_accepted_submit_issues_exactly_one_request() {
        let store = MemoryStore::new();
        let mut flow = filled_flow();
        flow.submit(&store).await;
        assert_eq!(store.len(), 1);

        // duplicate rows on user-driven resubmission are accepted behavior
        let mut flow = filled_flow();
        flow.submit(&store).await;
        assert_eq!(store.len(), 2);
    }
}
