use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional)] dashed: bool,
    #[prop(optional, into)] title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = if dashed { "card-dashed" } else { "card" };
    view! {
        <div class=class>
            {title.map(|t| view! { <h2 class="card-title">{t}</h2> })}
            {children()}
        </div>
    }
}
