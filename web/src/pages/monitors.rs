use itertools::Itertools;
use leptos::prelude::*;

use shared::ago;
use shared::metrics;
use shared::monitor::{MonitorRecord, COMPARISONS, SEVERITIES};
use shared::session::MonitorDraft;
use shared::status::CollectionStatus;
use shared::window;

use crate::api;
use crate::components::{Card, EmptyState, Loading, Message};

fn now_epoch() -> f64 {
    js_sys::Date::now() / 1000.0
}

/// Form-bound signals for one monitor draft. Bundling them keeps the add
/// and edit forms on a single source of truth.
#[derive(Clone, Copy)]
struct MonitorFormSignals {
    name: RwSignal<String>,
    monitor_type: RwSignal<String>,
    array_name: RwSignal<String>,
    vol_name: RwSignal<String>,
    metric: RwSignal<String>,
    unit: RwSignal<String>,
    value: RwSignal<String>,
    compare: RwSignal<String>,
    window_magnitude: RwSignal<String>,
    window_scope: RwSignal<String>,
    hits: RwSignal<String>,
    severity: RwSignal<String>,
    data_ttl_days: RwSignal<String>,
    frequency: RwSignal<String>,
}

impl MonitorFormSignals {
    fn from_draft(draft: MonitorDraft) -> Self {
        MonitorFormSignals {
            name: RwSignal::new(draft.name),
            monitor_type: RwSignal::new(draft.monitor_type),
            array_name: RwSignal::new(draft.array_name),
            vol_name: RwSignal::new(draft.vol_name),
            metric: RwSignal::new(draft.metric),
            unit: RwSignal::new(draft.unit),
            value: RwSignal::new(draft.value),
            compare: RwSignal::new(draft.compare),
            window_magnitude: RwSignal::new(draft.window_magnitude),
            window_scope: RwSignal::new(draft.window_scope),
            hits: RwSignal::new(draft.hits),
            severity: RwSignal::new(draft.severity),
            data_ttl_days: RwSignal::new(draft.data_ttl_days),
            frequency: RwSignal::new(draft.frequency),
        }
    }

    fn load(&self, draft: MonitorDraft) {
        self.name.set(draft.name);
        self.monitor_type.set(draft.monitor_type);
        self.array_name.set(draft.array_name);
        self.vol_name.set(draft.vol_name);
        self.metric.set(draft.metric);
        self.unit.set(draft.unit);
        self.value.set(draft.value);
        self.compare.set(draft.compare);
        self.window_magnitude.set(draft.window_magnitude);
        self.window_scope.set(draft.window_scope);
        self.hits.set(draft.hits);
        self.severity.set(draft.severity);
        self.data_ttl_days.set(draft.data_ttl_days);
        self.frequency.set(draft.frequency);
    }

    fn to_draft(self) -> MonitorDraft {
        MonitorDraft {
            name: self.name.get(),
            monitor_type: self.monitor_type.get(),
            array_name: self.array_name.get(),
            vol_name: self.vol_name.get(),
            metric: self.metric.get(),
            unit: self.unit.get(),
            value: self.value.get(),
            compare: self.compare.get(),
            window_magnitude: self.window_magnitude.get(),
            window_scope: self.window_scope.get(),
            hits: self.hits.get(),
            severity: self.severity.get(),
            data_ttl_days: self.data_ttl_days.get(),
            frequency: self.frequency.get(),
        }
    }
}

#[component]
pub fn MonitorsPage() -> impl IntoView {
    let (trigger, set_trigger) = signal(0u32);
    let monitors = LocalResource::new(move || {
        trigger.get();
        api::fetch_monitors()
    });

    let (now, set_now) = signal(now_epoch());

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

    let form = MonitorFormSignals::from_draft(MonitorDraft::new());
    let (add_msg, set_add_msg) = signal::<Option<(bool, String)>>(None);

    let on_add = move |_| {
        let draft = form.to_draft();
        if draft.value.trim().is_empty() {
            return;
        }
        let payload = draft.payload();
        leptos::task::spawn_local(async move {
            match api::create_monitor(&payload).await {
                Ok(_) => {
                    form.load(MonitorDraft::new());
                    set_add_msg.set(None);
                    set_trigger.update(|t| *t += 1);
                }
                Err(e) => set_add_msg.set(Some((false, e))),
            }
        });
    };

    view! {
        <div class="container">
            <h1>"Monitors"</h1>

            <Card dashed=true title="Add monitor">
                <MonitorForm form />
                <button class="btn btn-success" on:click=on_add>"Add"</button>
            </Card>
            <Message signal=add_msg />

            <Suspense fallback=Loading>
                {move || Suspend::new(async move {
                    match monitors.await {
                        Ok(records) => {
                            if records.is_empty() {
                                view! {
                                    <EmptyState
                                        message="No monitors defined yet."
                                        hint="Add one above to start alerting."
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <ul class="record-list">
                                        {records
                                            .into_iter()
                                            .sorted_by_key(|m| m.scope_label())
                                            .map(|monitor| view! { <MonitorCard monitor set_trigger now /> })
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
fn MonitorForm(form: MonitorFormSignals) -> impl IntoView {
    let monitor_type = form.monitor_type;
    let metric = form.metric;
    let unit = form.unit;

    // switching scope invalidates metrics outside the vol subset
    Effect::new(move |_| {
        let list = metrics::metrics_for(&monitor_type.get());
        if !list.iter().any(|m| m.id == metric.get_untracked()) {
            if let Some(first) = list.first() {
                metric.set(first.id.to_string());
            }
        }
    });

    // switching metric invalidates units of the previous family
    Effect::new(move |_| {
        let units = metrics::units_for(&metric.get());
        if !units.iter().any(|u| u.id == unit.get_untracked()) {
            if let Some(first) = units.first() {
                unit.set(first.id.to_string());
            }
        }
    });

    view! {
        <div class="form-row">
            <label>"Name"
                <input type="text" class="form-input" placeholder="Optional"
                    bind:value=form.name
                />
            </label>
            <label>"Scope"
                <select class="form-input" bind:value=monitor_type>
                    <option value="array">"Array"</option>
                    <option value="vol">"Volume"</option>
                </select>
            </label>
            <label>"Array pattern"
                <input type="text" class="form-input" bind:value=form.array_name />
            </label>
            <Show when=move || monitor_type.get() == "vol">
                <label>"Volume pattern"
                    <input type="text" class="form-input" bind:value=form.vol_name />
                </label>
            </Show>
        </div>
        <div class="form-row">
            <label>"Metric"
                <select class="form-input" bind:value=metric>
                    {move || {
                        metrics::metrics_for(&monitor_type.get())
                            .iter()
                            .map(|m| view! { <option value=m.id>{m.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <label>"Condition"
                <select class="form-input" bind:value=form.compare>
                    {COMPARISONS
                        .iter()
                        .map(|(id, symbol)| view! { <option value=*id>{*symbol}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>"Threshold"
                <input type="number" class="form-input" bind:value=form.value />
            </label>
            <label>"Unit"
                <select class="form-input" bind:value=unit>
                    {move || {
                        metrics::units_for(&metric.get())
                            .iter()
                            .map(|u| view! { <option value=u.id>{u.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
        </div>
        <div class="form-row">
            <label>"Window"
                <input type="number" class="form-input" min="1" bind:value=form.window_magnitude />
            </label>
            <label>"Window scope"
                <select class="form-input" bind:value=form.window_scope>
                    {window::SCOPES
                        .iter()
                        .map(|(id, label)| view! { <option value=*id>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>"Hits"
                <input type="number" class="form-input" min="1" bind:value=form.hits />
            </label>
            <label>"Severity"
                <select class="form-input" bind:value=form.severity>
                    {SEVERITIES
                        .iter()
                        .map(|s| view! { <option value=*s>{*s}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
        <div class="form-row">
            <label>"Retention (days)"
                <input type="number" class="form-input" min="0" bind:value=form.data_ttl_days />
            </label>
            <label>"Frequency (seconds)"
                <input type="number" class="form-input" min="1" bind:value=form.frequency />
            </label>
        </div>
    }
}

#[component]
fn MonitorCard(
    monitor: MonitorRecord,
    set_trigger: WriteSignal<u32>,
    now: ReadSignal<f64>,
) -> impl IntoView {
    let id = monitor.id.clone().unwrap_or_default();
    let title = monitor
        .name
        .clone()
        .unwrap_or_else(|| metrics::metric_label(&monitor.metric).to_string());
    let scope_label = monitor.scope_label();
    let metric_label = metrics::metric_label(&monitor.metric);
    let threshold_label = monitor.threshold_label();
    let compare_symbol = COMPARISONS
        .iter()
        .find(|(c, _)| *c == monitor.compare)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(">");
    let window_label = monitor.window.clone();
    let severity_label = monitor.severity().to_string();
    let severity_class = format!("badge badge-{}", monitor.severity());
    let hits_label = monitor.hits.unwrap_or(1).to_string();
    let ttl_label = monitor.data_ttl.clone().unwrap_or_else(|| "-".into());
    let task_timestamp = monitor.task_timestamp;
    let task_state = monitor.task_state.clone();

    let enabled = RwSignal::new(monitor.enabled);
    let status = move || CollectionStatus::derive(enabled.get(), task_state.as_deref()).to_string();
    let status_class = move || {
        if enabled.get().unwrap_or(true) {
            "badge"
        } else {
            "badge badge-paused"
        }
    };
    let updated = move || ago::from_epoch(task_timestamp, now.get());
    let updated_title = ago::timestamp_label(task_timestamp);

    let editing = RwSignal::new(false);
    let (card_msg, set_card_msg) = signal::<Option<(bool, String)>>(None);

    let form = MonitorFormSignals::from_draft(MonitorDraft::edit(&monitor));

    let original = StoredValue::new(monitor);
    let record_id = StoredValue::new(id.clone());

    let on_edit = move |_| {
        form.load(original.with_value(MonitorDraft::edit));
        editing.set(true);
    };

    let on_cancel = move |_| editing.set(false);

    let on_save = move |_| {
        let payload = form.to_draft().payload();
        let id = record_id.get_value();
        leptos::task::spawn_local(async move {
            match api::update_monitor(&id, &payload).await {
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
        leptos::logging::log!("monitor {} collection enabled -> {}", id, next);
        leptos::task::spawn_local(async move {
            // fire-and-forget, no error path
            let _ = api::set_monitor_enabled(&id, next).await;
        });
    };

    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this monitor?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = record_id.get_value();
        leptos::task::spawn_local(async move {
            let _ = api::delete_monitor(&id).await;
            set_trigger.update(|t| *t += 1);
        });
    };

    view! {
        <li>
            <Card>
                <div class="flex-between">
                    <div>
                        <span class="text-lg font-semibold">{title}</span>
                        <span class=status_class>{status}</span>
                        <span class=severity_class>{severity_label}</span>
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
                        <span class="detail-label">"Scope:"</span>
                        <span class="detail-value">{scope_label.clone()}</span>
                        <span class="detail-label">"Rule:"</span>
                        <span class="detail-value">
                            {format!("{} {} {}", metric_label, compare_symbol, threshold_label)}
                        </span>
                        <span class="detail-label">"Window:"</span>
                        <span class="detail-value">{window_label.clone()}</span>
                        <span class="detail-label">"Hits:"</span>
                        <span class="detail-value">{hits_label.clone()}</span>
                        <span class="detail-label">"Retention:"</span>
                        <span class="detail-value">{ttl_label.clone()}</span>
                        <span class="detail-label">"Updated:"</span>
                        <span class="detail-value" title=updated_title.clone()>{updated}</span>
                    </div>
                </Show>

                <Show when=move || editing.get()>
                    <MonitorForm form />
                </Show>

                <Message signal=card_msg />
            </Card>
        </li>
    }
}
