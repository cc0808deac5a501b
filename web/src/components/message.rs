use leptos::prelude::*;

/// Inline success/error banner. The signal holds `Option<(is_success, text)>`;
/// `None` renders nothing.
#[component]
pub fn Message(signal: ReadSignal<Option<(bool, String)>>) -> impl IntoView {
    move || {
        signal.get().map(|(is_success, text)| {
            let class = match is_success {
                true => "message message-success",
                false => "message message-error",
            };
            view! { <div class=class>{text}</div> }
        })
    }
}
