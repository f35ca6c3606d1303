use super::{
    utils::{ACADEMIC_YEARS, BATCH_OPTIONS},
    view_model::use_add_results_view_model,
};
use crate::{
    components::{forms::FormMessages, layout::Layout},
    pages::lo_detail::{hub_label, use_lo_id},
    utils::{
        files::{file_from_drop, file_from_input, ACCEPTED_EXTENSIONS},
        navigation,
    },
};
use leptos::*;

const SELECT_CLASS: &str =
    "block w-full rounded-md border border-border px-3 py-2 text-sm text-fg bg-surface";

#[component]
pub fn AddResultsPage() -> impl IntoView {
    let lo_id = use_lo_id();
    view! { <AddResultsView lo_id=lo_id /> }
}

#[component]
pub fn AddResultsView(#[prop(into)] lo_id: Signal<String>) -> impl IntoView {
    let vm = use_add_results_view_model(lo_id);
    let form = vm.form;
    let pending = vm.upload_action.pending();
    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    let drop_zone_class = move || {
        if vm.drag_active.get() {
            "border-2 border-dashed rounded-lg p-8 text-center border-action-primary-bg bg-surface-muted"
        } else {
            "border-2 border-dashed rounded-lg p-8 text-center border-border-strong"
        }
    };

    view! {
        <Layout>
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Add Results"</h1>
                        <p class="text-sm text-fg-muted">
                            {move || hub_label(&lo_id.get()).to_string()}
                            <span class="ml-2">{move || format!("LO {}", vm.lo_number.get())}</span>
                        </p>
                    </div>
                    <button
                        type="button"
                        class="text-sm text-fg-muted hover:text-fg"
                        on:click=move |_| navigation::navigate_back()
                    >
                        "Back"
                    </button>
                </div>

                <form
                    class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <FormMessages messages=vm.messages />
                    <div class="grid gap-4 sm:grid-cols-2">
                        <div class="space-y-1">
                            <label for="batch" class="block text-sm font-medium text-fg">"Batch"</label>
                            <select
                                id="batch"
                                class=SELECT_CLASS
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|state| state.batch = value);
                                }
                            >
                                <option value="">"Select batch"</option>
                                {BATCH_OPTIONS
                                    .iter()
                                    .map(|batch| view! { <option value=*batch>{format!("Batch {}", batch)}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="space-y-1">
                            <label for="academic-year" class="block text-sm font-medium text-fg">"Academic year"</label>
                            <select
                                id="academic-year"
                                class=SELECT_CLASS
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|state| state.academic_year = value);
                                }
                            >
                                <option value="">"Select year"</option>
                                {ACADEMIC_YEARS
                                    .iter()
                                    .map(|year| view! { <option value=*year>{*year}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div
                        class=drop_zone_class
                        on:dragenter=move |ev| {
                            ev.prevent_default();
                            vm.drag_active.set(true);
                        }
                        on:dragover=move |ev| {
                            ev.prevent_default();
                            vm.drag_active.set(true);
                        }
                        on:dragleave=move |ev| {
                            ev.prevent_default();
                            vm.drag_active.set(false);
                        }
                        on:drop=move |ev| {
                            ev.prevent_default();
                            vm.drag_active.set(false);
                            vm.select_file(file_from_drop(&ev));
                        }
                    >
                        {move || match form.with(|state| state.file.clone()) {
                            Some(file) => view! {
                                <div class="flex items-center justify-between gap-4 text-left">
                                    <div>
                                        <p class="text-sm font-medium text-fg">{file.name.clone()}</p>
                                        <p class="text-xs text-fg-muted">{file.size_label()}</p>
                                    </div>
                                    <button
                                        type="button"
                                        class="text-sm text-action-danger-bg hover:underline"
                                        on:click=move |_| vm.clear_file()
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                            .into_view(),
                            None => view! {
                                <p class="text-sm text-fg-muted">"Drag and drop the mark sheet here, or"</p>
                                <label class="mt-2 inline-block cursor-pointer text-sm font-semibold text-action-primary-bg hover:underline">
                                    "browse files"
                                    <input
                                        id="marks-file"
                                        type="file"
                                        class="sr-only"
                                        accept=accept.clone()
                                        on:change=move |ev| vm.select_file(file_from_input(&ev))
                                    />
                                </label>
                                <p class="mt-1 text-xs text-fg-muted">"Excel (.xlsx, .xls) or CSV"</p>
                            }
                            .into_view(),
                        }}
                    </div>

                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || !vm.can_submit()
                    >
                        {move || if pending.get() { "Uploading..." } else { "Upload Results" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
