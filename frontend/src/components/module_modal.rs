use crate::{
    api::{ApiError, LearningOutcome, LearningOutcomePayload, Module},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
};
use leptos::*;

/// Learning outcomes of one module. Lecturers get the add/edit/delete forms;
/// everyone can open an outcome.
#[component]
pub fn ModuleModal(
    #[prop(into)] module: Signal<Option<Module>>,
    #[prop(into)] outcomes: Signal<Option<Result<Vec<LearningOutcome>, ApiError>>>,
    #[prop(into)] can_edit: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_close: Callback<()>,
    on_select: Callback<LearningOutcome>,
    on_create: Callback<LearningOutcomePayload>,
    on_update: Callback<(String, String)>,
    on_delete: Callback<LearningOutcome>,
) -> impl IntoView {
    let new_lo_id = create_rw_signal(String::new());
    let new_description = create_rw_signal(String::new());
    let editing = create_rw_signal(None::<(String, String)>);

    // Forms start empty for every opened module and after every reload.
    create_effect(move |_| {
        module.with(|_| ());
        outcomes.with(|_| ());
        new_lo_id.set(String::new());
        new_description.set(String::new());
        editing.set(None);
    });

    let submit_new = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_create.call(LearningOutcomePayload {
            lo_id: new_lo_id.get_untracked(),
            lo_description: new_description.get_untracked(),
        });
    };

    let outcome_row = move |lo: LearningOutcome| {
        let row_id = lo.id.clone();
        let is_editing = move || {
            editing
                .get()
                .map(|(id, _)| id == row_id)
                .unwrap_or(false)
        };
        let lo = store_value(lo);
        view! {
            <li class="py-3 flex flex-col gap-2">
                <Show
                    when=is_editing
                    fallback=move || {
                        let current = lo.get_value();
                        view! {
                            <div class="flex items-start justify-between gap-4">
                                <button
                                    type="button"
                                    class="text-left"
                                    on:click=move |_| on_select.call(lo.get_value())
                                >
                                    <span class="font-semibold text-fg">{current.lo_id.clone()}</span>
                                    <span class="block text-sm text-fg-muted">{current.description().to_string()}</span>
                                </button>
                                <Show when=move || can_edit.get()>
                                    <div class="flex gap-2 shrink-0">
                                        <button
                                            type="button"
                                            class="text-sm text-action-primary-bg hover:underline"
                                            on:click=move |_| {
                                                let current = lo.get_value();
                                                editing.set(Some((current.id.clone(), current.description().to_string())));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            type="button"
                                            class="text-sm text-action-danger-bg hover:underline"
                                            on:click=move |_| on_delete.call(lo.get_value())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                >
                    <form
                        class="flex flex-col gap-2"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            if let Some(edit) = editing.get_untracked() {
                                on_update.call(edit);
                            }
                        }
                    >
                        <textarea
                            class="w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=move || editing.get().map(|(_, text)| text).unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                editing.update(|edit| {
                                    if let Some((_, text)) = edit {
                                        *text = value;
                                    }
                                });
                            }
                        ></textarea>
                        <div class="flex justify-end gap-2">
                            <button type="button" class="text-sm" on:click=move |_| editing.set(None)>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="text-sm font-semibold text-action-primary-bg disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                "Save"
                            </button>
                        </div>
                    </form>
                </Show>
            </li>
        }
    };

    view! {
        <Show when=move || module.get().is_some()>
            <div class="fixed inset-0 z-[65] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[66] w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="flex items-start justify-between">
                        <div>
                            <h2 class="text-lg font-semibold text-fg">
                                {move || module.get().map(|m| m.module_id).unwrap_or_default()}
                            </h2>
                            <p class="text-sm text-fg-muted">
                                {move || module.get().map(|m| m.module_name).unwrap_or_default()}
                            </p>
                        </div>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>

                    <InlineErrorMessage error=error />

                    {move || match outcomes.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! {
                            <p class="text-sm text-status-error-text">{err.error}</p>
                        }
                        .into_view(),
                        Some(Ok(list)) if list.is_empty() => view! {
                            <EmptyState title="No learning outcomes yet" />
                        }
                        .into_view(),
                        Some(Ok(list)) => view! {
                            <ul class="divide-y divide-border">
                                {list.into_iter().map(outcome_row).collect_view()}
                            </ul>
                        }
                        .into_view(),
                    }}

                    <Show when=move || can_edit.get()>
                        <form class="border-t border-border pt-4 space-y-2" on:submit=submit_new>
                            <h3 class="text-sm font-semibold text-fg">"Add learning outcome"</h3>
                            <input
                                type="text"
                                placeholder="LO ID (e.g. LO1)"
                                class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                                prop:value=move || new_lo_id.get()
                                on:input=move |ev| new_lo_id.set(event_target_value(&ev))
                            />
                            <textarea
                                placeholder="Description"
                                class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                                prop:value=move || new_description.get()
                                on:input=move |ev| new_description.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                type="submit"
                                class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                "Add LO"
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
