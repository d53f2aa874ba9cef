use leptos::*;

struct Benefit {
    icon: &'static str,
    title: &'static str,
    accent: &'static str,
    blurb: &'static str,
}

const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "⚡",
        title: "Boost Efficiency",
        accent: "text-cyan-400",
        blurb: "Automate repetitive tasks and free your team to focus on \
                strategic initiatives that drive growth.",
    },
    Benefit {
        icon: "📈",
        title: "Scale Seamlessly",
        accent: "text-purple-400",
        blurb: "Scale your operations seamlessly without proportional \
                increases in overhead and complexity.",
    },
    Benefit {
        icon: "🤖",
        title: "Drive Innovation",
        accent: "text-blue-400",
        blurb: "Stay ahead of the competition with cutting-edge AI solutions \
                tailored to your business.",
    },
    Benefit {
        icon: "🎯",
        title: "Reduce Costs",
        accent: "text-green-400",
        blurb: "Cut operational expenses by up to 60% while maintaining or \
                improving service quality and output.",
    },
    Benefit {
        icon: "🕐",
        title: "24/7 Operations",
        accent: "text-orange-400",
        blurb: "AI systems work around the clock, ensuring continuous \
                productivity and customer service availability.",
    },
    Benefit {
        icon: "✓",
        title: "Improve Accuracy",
        accent: "text-pink-400",
        blurb: "Eliminate human errors and achieve 99%+ accuracy in data \
                processing and decision-making tasks.",
    },
];

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section class="relative py-32 px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-5xl font-thin mb-6">
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                            "Why AI Automation?"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed">
                        "In today's rapidly evolving business landscape, AI automation isn't just an advantage - it's essential. "
                        "We help businesses transform their operations, reduce costs, and scale efficiently."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {BENEFITS
                        .iter()
                        .map(|benefit| {
                            view! {
                                <BenefitCard
                                    icon=benefit.icon
                                    title=benefit.title
                                    accent=benefit.accent
                                    blurb=benefit.blurb
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
fn BenefitCard(
    icon: &'static str,
    title: &'static str,
    accent: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="group text-center p-8 rounded-2xl border border-gray-800 hover:border-cyan-500/50 transition-all duration-500 hover:shadow-2xl hover:shadow-cyan-500/10">
            <div class="w-16 h-16 mx-auto mb-6 bg-gradient-to-br from-cyan-500 to-blue-600 rounded-full flex items-center justify-center text-2xl group-hover:scale-110 transition-transform duration-300">
                {icon}
            </div>
            <h3 class=format!("text-2xl font-medium mb-4 {}", accent)>{title}</h3>
            <p class="text-gray-300 leading-relaxed">{blurb}</p>
        </div>
    }
}
