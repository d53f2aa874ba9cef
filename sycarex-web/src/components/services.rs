use leptos::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    accent: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 12] = [
    Service {
        icon: "🤖",
        title: "AI Agents",
        accent: "text-cyan-400",
        blurb: "Intelligent agents that handle complex tasks, make decisions, \
                and interact with customers autonomously.",
    },
    Service {
        icon: "💬",
        title: "Chatbots",
        accent: "text-purple-400",
        blurb: "Advanced conversational AI that provides 24/7 customer support \
                and enhances user engagement.",
    },
    Service {
        icon: "🔁",
        title: "Workflow Automation",
        accent: "text-blue-400",
        blurb: "Streamline business processes with intelligent automation that \
                adapts to your workflow.",
    },
    Service {
        icon: "📊",
        title: "Data Analysis",
        accent: "text-green-400",
        blurb: "Transform raw data into actionable insights with AI-powered \
                analytics and reporting.",
    },
    Service {
        icon: "🧠",
        title: "Machine Learning",
        accent: "text-pink-400",
        blurb: "Custom ML models that learn from your data to predict trends \
                and optimize operations.",
    },
    Service {
        icon: "👁",
        title: "Computer Vision",
        accent: "text-orange-400",
        blurb: "AI-powered image and video analysis for quality control, \
                security, and automation.",
    },
    Service {
        icon: "📄",
        title: "Document Processing",
        accent: "text-indigo-400",
        blurb: "Intelligent document extraction, classification, and \
                processing with OCR and NLP.",
    },
    Service {
        icon: "🛡",
        title: "Fraud Detection",
        accent: "text-yellow-400",
        blurb: "Advanced AI algorithms to detect and prevent fraudulent \
                activities in real-time.",
    },
    Service {
        icon: "⚡",
        title: "Process Optimization",
        accent: "text-teal-400",
        blurb: "AI-driven optimization of business processes to reduce costs \
                and improve efficiency.",
    },
    Service {
        icon: "🎯",
        title: "Predictive Analytics",
        accent: "text-red-400",
        blurb: "Forecast future trends and behaviors to make data-driven \
                strategic decisions.",
    },
    Service {
        icon: "👥",
        title: "Customer Intelligence",
        accent: "text-violet-400",
        blurb: "AI-powered customer segmentation, behavior analysis, and \
                personalization engines.",
    },
    Service {
        icon: "🕐",
        title: "Real-time Monitoring",
        accent: "text-emerald-400",
        blurb: "Continuous AI monitoring systems that alert and respond to \
                critical events instantly.",
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="relative py-32 px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-5xl font-thin mb-6">
                        <span class="bg-gradient-to-r from-purple-400 to-cyan-500 bg-clip-text text-transparent">
                            "Our Services"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto">
                        "Comprehensive AI automation solutions designed to transform every aspect of your business."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <ServiceCard
                                    icon=service.icon
                                    title=service.title
                                    accent=service.accent
                                    blurb=service.blurb
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    accent: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="group relative p-8 rounded-2xl border border-gray-800 hover:border-cyan-500 transition-all duration-500 hover:shadow-2xl hover:shadow-cyan-500/20 hover:-translate-y-2">
            <div class="relative z-10">
                <div class=format!("text-4xl mb-6 {}", accent)>{icon}</div>
                <h3 class=format!("text-2xl font-medium mb-4 {}", accent)>{title}</h3>
                <p class="text-gray-300 leading-relaxed">{blurb}</p>
            </div>
        </div>
    }
}
