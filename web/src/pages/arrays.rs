use itertools::Itertools;
use leptos::prelude::*;

use shared::ago;
use shared::array::ArrayRecord;
use shared::error::friendly_array_create_error;
use shared::session::ArrayDraft;
use shared::status::CollectionStatus;

use crate::api;
use crate::components::{Card, EmptyState, Loading, Message};

fn now_epoch() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[component]
pub fn ArraysPage() -> impl IntoView {
    let (trigger, set_trigger) = signal(0u32);
    let arrays = LocalResource::new(move || {
        trigger.get();
        api::fetch_arrays()
    });

    // one wall clock drives every "updated … ago" label on the page
    let (now, set_now) = signal(now_epoch());

    // whole-collection refetch every 5s; the poll has no failure path, the
    // resource just keeps its last value until the next successful fetch
    let poll = send_wrapper::SendWrapper::new(gloo_timers::callback::Interval::new(5_000, move || {
        set_trigger.update(|t| *t += 1);
    }));
    let clock = send_wrapper::SendWrapper::new(gloo_timers::callback::Interval::new(1_000, move || {
        set_now.set(now_epoch());
    }));
    on_cleanup(move || {
        drop(poll);
        drop(clock);
    });

    let defaults = ArrayDraft::new();
    let host = RwSignal::new(defaults.host);
    let username = RwSignal::new(defaults.username);
    let password = RwSignal::new(defaults.password);
    let data_ttl_days = RwSignal::new(defaults.data_ttl_days);
    let frequency = RwSignal::new(defaults.frequency);
    let (add_msg, set_add_msg) = signal::<Option<(bool, String)>>(None);

    let on_add = move |_| {
        let draft = ArrayDraft {
            host: host.get().trim().to_string(),
            username: username.get().trim().to_string(),
            password: password.get(),
            data_ttl_days: data_ttl_days.get(),
            frequency: frequency.get(),
        };
        if draft.host.is_empty() {
            return;
        }
        let payload = draft.create_payload();
        leptos::logging::log!("adding array {}", payload.host);
        leptos::task::spawn_local(async move {
            match api::create_array(&payload).await {
                Ok(_) => {
                    let fresh = ArrayDraft::new();
                    host.set(fresh.host);
                    username.set(fresh.username);
                    password.set(fresh.password);
                    data_ttl_days.set(fresh.data_ttl_days);
                    frequency.set(fresh.frequency);
                    set_add_msg.set(None);
                    set_trigger.update(|t| *t += 1);
                }
                Err(e) => set_add_msg.set(Some((false, friendly_array_create_error(&e)))),
            }
        });
    };

    view! {
        <div class="container">
            <h1>"Arrays"</h1>

            <Card dashed=true title="Add array">
                <div class="form-row">
                    <input type="text" class="form-input" placeholder="Hostname"
                        bind:value=host
                    />
                    <input type="text" class="form-input" placeholder="Username"
                        bind:value=username
                    />
                    <input type="password" class="form-input" placeholder="Password"
                        bind:value=password
                    />
                </div>
                <div class="form-row">
                    <label>"Retention (days)"
                        <input type="number" class="form-input" min="0"
                            bind:value=data_ttl_days
                        />
                    </label>
                    <label>"Frequency (seconds)"
                        <input type="number" class="form-input" min="1"
                            bind:value=frequency
                        />
                    </label>
                    <button class="btn btn-success" on:click=on_add>"Add"</button>
                </div>
            </Card>
            <Message signal=add_msg />

            <Suspense fallback=Loading>
                {move || Suspend::new(async move {
                    match arrays.await {
                        Ok(records) => {
                            if records.is_empty() {
                                view! {
                                    <EmptyState
                                        message="No arrays monitored yet."
                                        hint="Add one above to start collecting."
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <ul class="record-list">
                                        {records
                                            .into_iter()
                                            .sorted_by_key(|a| a.display_name().to_string())
                                            .map(|array| view! { <ArrayCard array set_trigger now /> })
                                            .collect_view()}
                                    </ul>
                                }.into_any()
                            }
                        }
                        Err(e) => view! { <div class="message message-error">"Error: " {e}</div> }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ArrayCard(
    array: ArrayRecord,
    set_trigger: WriteSignal<u32>,
    now: ReadSignal<f64>,
) -> impl IntoView {
    let id = array.id.clone().unwrap_or_default();
    let display_name = array.display_name().to_string();
    let host_label = array.host.clone();
    let purity = array.purity_version.clone().unwrap_or_else(|| "-".into());
    let frequency_label = array
        .frequency
        .map(|f| format!("{}s", f))
        .unwrap_or_else(|| "-".into());
    let ttl_label = array.data_ttl.clone().unwrap_or_else(|| "-".into());
    let task_timestamp = array.task_timestamp;
    let task_state = array.task_state.clone();

    // the toggle flips this locally and pushes the partial update without
    // waiting for confirmation; the next poll reconciles with the server
    let enabled = RwSignal::new(array.enabled);
    let status = {
        let task_state = task_state.clone();
        move || CollectionStatus::derive(enabled.get(), task_state.as_deref()).to_string()
    };
    let status_class = move || {
        if enabled.get().unwrap_or(true) {
            "badge"
        } else {
            "badge badge-paused"
        }
    };
    let updated = move || ago::from_epoch(task_timestamp, now.get());
    let seconds_ago = move || {
        task_timestamp
            .map(|ts| format!("{}s", (now.get() - ts).floor() as i64))
            .unwrap_or_else(|| "-".into())
    };
    let updated_title = ago::timestamp_label(task_timestamp);

    let editing = RwSignal::new(false);
    let (card_msg, set_card_msg) = signal::<Option<(bool, String)>>(None);

    let draft = ArrayDraft::edit(&array);
    let edit_host = RwSignal::new(draft.host);
    let edit_username = RwSignal::new(draft.username);
    let edit_password = RwSignal::new(draft.password);
    let edit_ttl = RwSignal::new(draft.data_ttl_days);
    let edit_frequency = RwSignal::new(draft.frequency);

    // Copy handles, so the click handlers below stay usable inside <Show>
    let original = StoredValue::new(array.clone());
    let record_id = StoredValue::new(id.clone());

    let on_edit = move |_| {
        // reseed the draft so a cancelled session leaves no residue
        let draft = original.with_value(ArrayDraft::edit);
        edit_host.set(draft.host);
        edit_username.set(draft.username);
        edit_password.set(draft.password);
        edit_ttl.set(draft.data_ttl_days);
        edit_frequency.set(draft.frequency);
        editing.set(true);
    };

    let on_cancel = move |_| editing.set(false);

    let on_save = move |_| {
        let draft = ArrayDraft {
            host: edit_host.get(),
            username: edit_username.get(),
            password: edit_password.get(),
            data_ttl_days: edit_ttl.get(),
            frequency: edit_frequency.get(),
        };
        let payload = original.with_value(|orig| draft.update_payload(orig));
        let id = record_id.get_value();
        leptos::task::spawn_local(async move {
            match api::update_array(&id, &payload).await {
                Ok(_) => {
                    editing.set(false);
                    set_card_msg.set(Some((true, "Saved!".to_string())));
                    set_trigger.update(|t| *t += 1);
                    gloo_timers::callback::Timeout::new(3_000, move || {
                        set_card_msg.set(None);
                    })
                    .forget();
                }
                Err(e) => set_card_msg.set(Some((false, e))),
            }
        });
    };

    let on_toggle = move |_| {
        let next = !enabled.get().unwrap_or(true);
        enabled.set(Some(next));
        let id = record_id.get_value();
        leptos::logging::log!("array {} collection enabled -> {}", id, next);
        leptos::task::spawn_local(async move {
            // fire-and-forget, no error path
            let _ = api::set_array_enabled(&id, next).await;
        });
    };

    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this array?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = record_id.get_value();
        leptos::task::spawn_local(async move {
            let _ = api::delete_array(&id).await;
            set_trigger.update(|t| *t += 1);
        });
    };

    view! {
        <li>
            <Card>
                <div class="flex-between">
                    <div>
                        <span class="text-lg font-semibold">{display_name}</span>
                        <span class=status_class>{status}</span>
                        <div class="text-xs text-muted text-mono">{id}</div>
                    </div>
                    <div class="flex gap-1">
                        <button class="btn btn-secondary" on:click=on_toggle>
                            {move || if enabled.get().unwrap_or(true) { "Pause" } else { "Resume" }}
                        </button>
                        <Show when=move || !editing.get()>
                            <button class="btn btn-primary" on:click=on_edit>"Edit"</button>
                        </Show>
                        <Show when=move || editing.get()>
                            <button class="btn btn-success" on:click=on_save>"Save"</button>
                            <button class="btn btn-secondary" on:click=on_cancel>"Cancel"</button>
                        </Show>
                        <button class="btn btn-danger" on:click=on_delete>"Delete"</button>
                    </div>
                </div>

                <Show when=move || !editing.get()>
                    <div class="detail-grid">
                        <span class="detail-label">"Host:"</span>
                        <span class="detail-value">{host_label.clone()}</span>
                        <span class="detail-label">"Purity:"</span>
                        <span class="detail-value">{purity.clone()}</span>
                        <span class="detail-label">"Frequency:"</span>
                        <span class="detail-value">{frequency_label.clone()}</span>
                        <span class="detail-label">"Retention:"</span>
                        <span class="detail-value">{ttl_label.clone()}</span>
                        <span class="detail-label">"Updated:"</span>
                        <span class="detail-value" title=updated_title.clone()>
                            {updated} " (" {seconds_ago} ")"
                        </span>
                    </div>
                </Show>

                <Show when=move || editing.get()>
                    <div class="form-group">
                        <label>"Hostname"</label>
                        <input type="text" class="form-input" bind:value=edit_host />
                    </div>
                    <div class="form-group">
                        <label>"Username"</label>
                        <input type="text" class="form-input" bind:value=edit_username />
                    </div>
                    <div class="form-group">
                        <label>"Password"</label>
                        <input type="password" class="form-input" bind:value=edit_password />
                        <div class="help-text">"Leave untouched to keep the stored credentials"</div>
                    </div>
                    <div class="form-group">
                        <label>"Retention (days)"</label>
                        <input type="number" class="form-input" min="0" bind:value=edit_ttl />
                    </div>
                    <div class="form-group">
                        <label>"Frequency (seconds)"</label>
                        <input type="number" class="form-input" min="1" bind:value=edit_frequency />
                    </div>
                </Show>

                <Message signal=card_msg />
            </Card>
        </li>
    }
}
