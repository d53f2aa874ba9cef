use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::home::HomePage;
use crate::GlobalState;

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);

    view! {
        <Stylesheet id="sycarex" href="/pkg/tailwind.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Router fallback=|| view! { <HomePage/> }.into_view()>
            <main>
                <Routes>
                    <Route path="" view=|| view! { <HomePage/> }/>
                </Routes>
            </main>
        </Router>
    }
}
