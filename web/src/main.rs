use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod pages;

fn main() {
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <components::Navbar />
            <main>
                <Routes fallback=|| view! { <div class="container"><h1>"Page not found"</h1></div> }>
                    <Route path=path!("/") view=pages::ArraysPage />
                    <Route path=path!("/arrays") view=pages::ArraysPage />
                    <Route path=path!("/monitors") view=pages::MonitorsPage />
                </Routes>
            </main>
        </Router>
    }
}
