use leptos::prelude::*;

#[component]
pub fn EmptyState(
    message: &'static str,
    #[prop(optional, into)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
            {hint.map(|h| view! { <p class="text-muted">{h}</p> })}
        </div>
    }
}
