use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="brand">"ArrayWatch"</A>
            <A href="/arrays">"Arrays"</A>
            <A href="/monitors">"Monitors"</A>
        </nav>
    }
}
