use leptos::*;

use crate::vars::BRAND_NAME;

const FOOTER_SERVICES: [&str; 7] = [
    "AI Agents",
    "Chatbots",
    "Workflow Automation",
    "Data Analysis",
    "Machine Learning",
    "Computer Vision",
    "Predictive Analytics",
];

#[component]
pub fn FooterSection() -> impl IntoView {
    view! {
        <footer class="relative border-t border-gray-800 py-16 px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-12">
                    <div class="lg:col-span-2">
                        <h3 class="text-2xl font-bold mb-4 bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                            {BRAND_NAME}
                        </h3>
                        <p class="text-gray-300 mb-6 leading-relaxed">
                            "Transforming businesses through intelligent automation. "
                            "Partner with us to unlock the full potential of AI for your organization."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-6 text-cyan-400">"Contact"</h4>
                        <div class="space-y-4 text-gray-300">
                            <div class="hover:text-cyan-400 transition-colors">
                                <a href="mailto:baher.kherbek@sycarex.com">"baher.kherbek@sycarex.com"</a>
                            </div>
                            <div class="hover:text-green-400 transition-colors">
                                "+963 935 315 414 (WhatsApp)"
                            </div>
                            <div class="hover:text-cyan-400 transition-colors">
                                "Latakia, Syria"
                            </div>
                        </div>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-6 text-purple-400">"Services"</h4>
                        <div class="space-y-3">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|service| {
                                    view! {
                                        <a href="#services" class="block text-gray-300 hover:text-purple-400 transition-colors">
                                            {*service}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-16 pt-8 text-center">
                    <p class="text-gray-400">
                        "© 2025 Sycarex AI. All rights reserved. Powered by the future."
                    </p>
                </div>
            </div>
        </footer>
    }
}
