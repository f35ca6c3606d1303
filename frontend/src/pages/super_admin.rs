use crate::{
    components::{
        cards::{ActionCard, WelcomeCard},
        layout::Layout,
    },
    pages::accounts::{
        components::account_form::AccountPanel, utils::AccountKind,
        view_model::use_account_view_model,
    },
    router,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn SuperAdminDashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let username = Signal::derive(move || {
        auth.with(|state| state.session.as_ref().map(|s| s.username.clone()))
            .unwrap_or_default()
    });
    let admin_vm = use_account_view_model(AccountKind::Administrator);

    view! {
        <Layout>
            <div class="space-y-6">
                <WelcomeCard username=username role_label="Super Administrator" />
                <div class="grid gap-4 sm:grid-cols-2">
                    <ActionCard
                        title="Add Administrator"
                        description="Create an administrator account for a department."
                        on_click=Callback::new(move |_| admin_vm.open())
                    />
                    <ActionCard
                        title="Modules"
                        description="Review every module and its learning outcomes."
                        href=router::MODULES
                    />
                </div>
            </div>
            <AccountPanel vm=admin_vm />
        </Layout>
    }
}
