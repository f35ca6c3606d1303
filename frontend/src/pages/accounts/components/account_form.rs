use crate::{
    components::{
        forms::{FormMessages, TextField},
        side_panel::SidePanel,
    },
    pages::accounts::{
        utils::{AccountFormState, AccountKind},
        view_model::AccountViewModel,
    },
    state::session::Role,
};
use leptos::*;

#[component]
pub fn AccountPanel(vm: AccountViewModel) -> impl IntoView {
    let pending = vm.add_action.pending();
    let form = vm.form;
    let field = move |read: fn(&AccountFormState) -> String| {
        Signal::derive(move || form.with(|state| read(state)))
    };

    view! {
        <SidePanel
            is_open=vm.panel_open
            title=vm.kind.panel_title()
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
                    id="account-username"
                    label="Username"
                    value=field(|state| state.username.clone())
                    on_input=Callback::new(move |value: String| form.update(|state| state.username = value))
                />
                <TextField
                    id="account-email"
                    label="Email"
                    input_type="email"
                    value=field(|state| state.email.clone())
                    on_input=Callback::new(move |value: String| form.update(|state| state.email = value))
                />
                <TextField
                    id="account-password"
                    label="Password"
                    input_type="password"
                    value=field(|state| state.password.clone())
                    on_input=Callback::new(move |value: String| form.update(|state| state.password = value))
                />
                <Show when=move || vm.kind == AccountKind::Teacher>
                    <div class="space-y-1">
                        <label for="account-type" class="block text-sm font-medium text-fg">"Account type"</label>
                        <select
                            id="account-type"
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            on:change=move |ev| {
                                let role = Role::parse(&event_target_value(&ev)).unwrap_or(Role::Lecturer);
                                form.update(|state| state.account_type = role);
                            }
                        >
                            <option value="Lecture" selected=move || form.with(|s| s.account_type == Role::Lecturer)>
                                "Lecturer"
                            </option>
                            <option value="Admin" selected=move || form.with(|s| s.account_type == Role::Admin)>
                                "Admin"
                            </option>
                        </select>
                    </div>
                </Show>
                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Saving..." } else { vm.kind.panel_title() }}
                </button>
            </form>
        </SidePanel>
    }
}
