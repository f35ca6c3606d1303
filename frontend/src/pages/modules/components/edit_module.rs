use crate::{components::error::InlineErrorMessage, pages::modules::view_model::ModulesViewModel};
use leptos::*;

/// Rename dialog. The module id is the resource key and stays read-only.
#[component]
pub fn EditModuleModal(vm: ModulesViewModel) -> impl IntoView {
    let pending = vm.update_action.pending();
    let module_id = move || {
        vm.editing
            .with(|module| module.as_ref().map(|m| m.module_id.clone()))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || vm.editing.with(Option::is_some)>
            <div class="fixed inset-0 z-[65] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| vm.cancel_edit()
                ></button>
                <form
                    class="relative z-[66] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.save_edit();
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">"Edit module"</h2>
                    <InlineErrorMessage error=vm.error />
                    <div class="space-y-1">
                        <label for="edit-module-id" class="block text-sm font-medium text-fg">"Module ID"</label>
                        <input
                            id="edit-module-id"
                            type="text"
                            readonly=true
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm bg-surface-muted"
                            prop:value=module_id
                        />
                    </div>
                    <div class="space-y-1">
                        <label for="edit-module-name" class="block text-sm font-medium text-fg">"Module name"</label>
                        <input
                            id="edit-module-name"
                            type="text"
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=move || vm.edit_name.get()
                            on:input=move |ev| vm.edit_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex justify-end gap-3">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md text-sm font-medium border border-border text-fg"
                            on:click=move |_| vm.cancel_edit()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-md text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
