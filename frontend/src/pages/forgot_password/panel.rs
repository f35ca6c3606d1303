use super::view_model::use_forgot_password_view_model;
use crate::{
    components::{
        error::InlineErrorMessage,
        forms::TextField,
        layout::{ChromeVariant, Layout, SuccessMessage},
    },
    router,
};
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();

    view! {
        <Layout variant=ChromeVariant::Public>
            <div class="max-w-md mx-auto space-y-6">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Forgot your password?"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Tell us who you are and we will point you to the right contact."
                    </p>
                </div>
                {move || vm.notice.get().map(|notice| view! { <SuccessMessage message=notice /> })}
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <TextField
                        id="forgot-username"
                        label="Username"
                        value=vm.username
                        on_input=Callback::new(move |value: String| vm.username.set(value))
                    />
                    <TextField
                        id="forgot-email"
                        label="Email"
                        input_type="email"
                        value=vm.email
                        on_input=Callback::new(move |value: String| vm.email.set(value))
                    />
                    <InlineErrorMessage error=vm.error />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    >
                        "Request reset"
                    </button>
                    <div class="text-center">
                        <a href=router::LOGIN class="text-sm text-action-primary-bg hover:underline">"Back to login"</a>
                    </div>
                </form>
            </div>
        </Layout>
    }
}
