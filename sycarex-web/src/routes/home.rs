use leptos::*;

use crate::components::{
    BenefitsSection, ConsultationSection, FooterSection, HeroSection,
    ServicesSection,
};

/// Single-page marketing layout, sections in their original order.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-black to-gray-900 text-white">
            <HeroSection/>
            <SectionDivider accent="via-cyan-500"/>
            <BenefitsSection/>
            <SectionDivider accent="via-purple-500"/>
            <ServicesSection/>
            <SectionDivider accent="via-cyan-500"/>
            <ConsultationSection/>
            <FooterSection/>
        </div>
    }
}

#[component]
fn SectionDivider(accent: &'static str) -> impl IntoView {
    view! {
        <div class="relative">
            <div class=format!(
                "absolute inset-x-0 h-px bg-gradient-to-r from-transparent {} to-transparent opacity-50",
                accent,
            )></div>
        </div>
    }
}
