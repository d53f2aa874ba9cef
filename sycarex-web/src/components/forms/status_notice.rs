use leptos::*;
use sycarex::SubmitStatus;

/// Renders the outcome notice of the last submit, or nothing while no
/// submit has completed.
#[component]
pub fn StatusNoticeView(status: Signal<Option<SubmitStatus>>) -> impl IntoView {
    view! {
        { move || if let Some(status) = status.get() {
            let class = if status.is_success() {
                "mb-6 p-4 rounded-xl bg-green-500/10 border border-green-500/30 text-green-400"
            } else {
                "mb-6 p-4 rounded-xl bg-red-500/10 border border-red-500/30 text-red-400"
            };
            view! {
                <div class=class>
                    {status.notice()}
                </div>
            }.into_view()
        } else {
            view! { }.into_view()
        }}
    }
}
