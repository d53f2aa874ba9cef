pub mod flow;
pub mod request;
#[cfg(target_arch = "wasm32")]
pub mod rest;
pub mod store;

pub use flow::{Field, SubmissionFlow, SubmitStatus};
pub use request::{ConsultationRecord, ConsultationRequest};
#[cfg(target_arch = "wasm32")]
pub use rest::RestTableStore;
pub use store::{ConsultationStore, MemoryStore};
