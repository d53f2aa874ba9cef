use leptos::*;

use crate::vars::BRAND_NAME;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center px-6 lg:px-8">
            <div class="max-w-7xl mx-auto text-center space-y-8">
                <h2 class="text-3xl md:text-4xl font-bold bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent">
                    {BRAND_NAME}
                </h2>
                <h1 class="text-5xl md:text-7xl lg:text-8xl font-thin tracking-tight leading-tight">
                    <span class="block bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent">
                        "Automate Your"
                    </span>
                    <span class="block text-white mt-2">
                        "Business with AI"
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 max-w-3xl mx-auto leading-relaxed font-light">
                    "Transform your operations with cutting-edge AI automation. "
                    "Streamline workflows, enhance productivity, and unlock unprecedented growth."
                </p>
                <div class="pt-8">
                    <a
                        href="#consultation"
                        class="group relative inline-flex px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-600 text-white font-medium rounded-full overflow-hidden transition-all duration-300 hover:scale-105 hover:shadow-2xl hover:shadow-cyan-500/25"
                    >
                        <span class="relative z-10">"Book a Free Consultation"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
