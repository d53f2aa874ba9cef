pub mod base;
pub mod consultations;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub(crate) mod http;

pub use base::config::StoreConfig;
#[cfg(target_arch = "wasm32")]
pub use consultations::RestTableStore;
pub use consultations::{
    ConsultationRecord, ConsultationRequest, ConsultationStore, Field,
    MemoryStore, SubmissionFlow, SubmitStatus,
};
pub use error::SycarexError;
