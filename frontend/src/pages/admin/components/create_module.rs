use crate::{
    components::{
        forms::{FormMessages, TextField},
        side_panel::SidePanel,
    },
    pages::admin::view_model::CreateModuleViewModel,
};
use leptos::*;

#[component]
pub fn CreateModulePanel(vm: CreateModuleViewModel) -> impl IntoView {
    let pending = vm.create_action.pending();
    let form = vm.form;

    view! {
        <SidePanel
            is_open=vm.panel_open
            title="Create Module"
            on_close=Callback::new(move |_| vm.close())
        >
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <FormMessages messages=vm.messages />
                <TextField
                    id="module-id"
                    label="Module ID"
                    placeholder="e.g. EE2201"
                    value=Signal::derive(move || form.with(|state| state.module_id.clone()))
                    on_input=Callback::new(move |value: String| form.update(|state| state.module_id = value))
                />
                <TextField
                    id="module-name"
                    label="Module name"
                    value=Signal::derive(move || form.with(|state| state.module_name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|state| state.module_name = value))
                />
                <p class="text-xs text-fg-muted">"Module IDs use uppercase letters and digits only."</p>
                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Creating..." } else { "Create Module" }}
                </button>
            </form>
        </SidePanel>
    }
}
