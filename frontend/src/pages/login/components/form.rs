use crate::{
    api::ApiError,
    components::error::InlineErrorMessage,
    pages::login::utils::ROLE_OPTIONS,
    router,
    state::session::Role,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn LoginForm(
    role: RwSignal<Option<Role>>,
    username: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"LO-PO Attainment Console"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="role" class="block text-sm font-medium text-fg">"Role"</label>
                        <select
                            id="role"
                            class=INPUT_CLASS
                            on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
                        >
                            <option value="" selected=move || role.get().is_none()>"Select your role"</option>
                            {ROLE_OPTIONS
                                .iter()
                                .map(|option| {
                                    let option = *option;
                                    view! {
                                        <option
                                            value=option.wire_value()
                                            selected=move || role.get() == Some(option)
                                        >
                                            {option.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label for="username" class="block text-sm font-medium text-fg">"Username"</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <div class="text-center">
                        <a href=router::FORGOT_PASSWORD class="text-sm text-action-primary-bg hover:underline">
                            "Forgot your password?"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
