use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::*;
use sycarex::{ConsultationStore, Field, SubmissionFlow};
use wasm_bindgen_futures::spawn_local;

use super::StatusNoticeView;
use crate::GlobalState;

const INPUT_CLASS: &str = "w-full px-6 py-4 bg-gray-900/50 border \
border-gray-700 rounded-xl text-white placeholder-gray-400 \
focus:border-cyan-500 focus:ring-2 focus:ring-cyan-500/20 \
focus:outline-none transition-all duration-300";

const BUTTON_CLASS: &str = "group relative px-12 py-4 bg-gradient-to-r \
from-cyan-500 to-purple-600 text-white font-medium rounded-full \
overflow-hidden transition-all duration-300 hover:scale-105 \
hover:shadow-2xl hover:shadow-cyan-500/25 disabled:opacity-50 \
disabled:cursor-not-allowed disabled:hover:scale-100";

/// Wires the submission flow state machine to the form view. One
/// instance per form; the store is injected through global state.
#[derive(Clone)]
pub struct ConsultationSubmission {
    flow: RwSignal<SubmissionFlow>,
    store: Rc<dyn ConsultationStore>,
}

impl ConsultationSubmission {
    pub fn new(store: Rc<dyn ConsultationStore>) -> Self {
        Self {
            flow: create_rw_signal(SubmissionFlow::new()),
            store,
        }
    }

    pub fn flow(&self) -> RwSignal<SubmissionFlow> {
        self.flow
    }

    pub fn handle_input(&self, field: Field, value: String) {
        self.flow.update(|flow| flow.set_field(field, value));
    }

    pub fn handle_submit(&self, ev: SubmitEvent) {
        ev.prevent_default();
        let mut request = None;
        self.flow.update(|flow| request = flow.begin_submit());
        let Some(request) = request else {
            return;
        };

        let flow = self.flow;
        let store = Rc::clone(&self.store);
        spawn_local(async move {
            let result = store.insert(&request).await;
            flow.update(|flow| flow.finish_submit(result));
        });
    }
}

#[component]
pub fn ConsultationSection() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");
    let store = state.with_untracked(|state| Rc::clone(&state.store));

    let submission = ConsultationSubmission::new(store);
    let flow = submission.flow();

    let status = Signal::derive(move || flow.with(|f| f.status().cloned()));
    let is_submitting = Signal::derive(move || flow.with(|f| f.is_submitting()));

    let on_submit = {
        let submission = submission.clone();
        move |ev: SubmitEvent| submission.handle_submit(ev)
    };
    let on_name = {
        let submission = submission.clone();
        move |ev| submission.handle_input(Field::Name, event_target_value(&ev))
    };
    let on_email = {
        let submission = submission.clone();
        move |ev| submission.handle_input(Field::Email, event_target_value(&ev))
    };
    let on_business_needs = {
        let submission = submission.clone();
        move |ev| {
            submission.handle_input(Field::BusinessNeeds, event_target_value(&ev))
        }
    };

    view! {
        <section id="consultation" class="relative py-32 px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-thin mb-6">
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                            "Ready to Transform?"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-300">
                        "Book a free consultation and discover how AI automation can revolutionize your business."
                    </p>
                </div>
                <form on:submit=on_submit class="space-y-8">
                    <div class="grid md:grid-cols-2 gap-8">
                        <div>
                            <label for="name" class="block text-sm font-medium text-gray-300 mb-3">
                                "Full Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                required
                                placeholder="Enter your full name"
                                class=INPUT_CLASS
                                prop:value=move || flow.with(|f| f.name().to_string())
                                on:input=on_name
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-300 mb-3">
                                "Email Address"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required
                                placeholder="Enter your email address"
                                class=INPUT_CLASS
                                prop:value=move || flow.with(|f| f.email().to_string())
                                on:input=on_email
                            />
                        </div>
                    </div>
                    <div>
                        <label for="business-needs" class="block text-sm font-medium text-gray-300 mb-3">
                            "Business Needs"
                        </label>
                        <textarea
                            id="business-needs"
                            name="business_needs"
                            rows="6"
                            required
                            placeholder="Tell us about your business and automation goals..."
                            class=format!("{} resize-none", INPUT_CLASS)
                            prop:value=move || flow.with(|f| f.business_needs().to_string())
                            on:input=on_business_needs
                        ></textarea>
                    </div>
                    <div class="text-center pt-4">
                        <StatusNoticeView status=status/>
                        <button
                            type="submit"
                            prop:disabled=move || is_submitting.get()
                            class=BUTTON_CLASS
                        >
                            {move || if is_submitting.get() {
                                "Submitting..."
                            } else {
                                "Schedule Consultation"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
