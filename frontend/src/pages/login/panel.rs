use super::{components::form::LoginForm, view_model::use_login_view_model};
use crate::components::layout::{ChromeVariant, Header};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <Header variant=ChromeVariant::Public />
        <LoginForm
            role=vm.role
            username=vm.username
            password=vm.password
            error=vm.error
            pending=pending
            on_submit=handle_submit
        />
    }
}
