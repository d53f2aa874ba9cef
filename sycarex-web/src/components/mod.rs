pub(crate) mod benefits;
pub(crate) mod footer;
pub(crate) mod forms;
pub(crate) mod hero;
pub(crate) mod services;

pub use benefits::BenefitsSection;
pub use footer::FooterSection;
pub use forms::ConsultationSection;
pub use hero::HeroSection;
pub use services::ServicesSection;
