pub(crate) mod consultation_form;
pub(crate) mod status_notice;

pub use consultation_form::ConsultationSection;
pub(crate) use status_notice::StatusNoticeView;
