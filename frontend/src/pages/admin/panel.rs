use crate::{
    components::{
        cards::{ActionCard, WelcomeCard},
        layout::Layout,
    },
    pages::{
        accounts::{
            components::account_form::AccountPanel, utils::AccountKind,
            view_model::use_account_view_model,
        },
        admin::{components::create_module::CreateModulePanel, view_model::use_create_module_view_model},
    },
    router,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let username = Signal::derive(move || {
        auth.with(|state| state.session.as_ref().map(|s| s.username.clone()))
            .unwrap_or_default()
    });
    let module_vm = use_create_module_view_model();
    let teacher_vm = use_account_view_model(AccountKind::Teacher);

    view! {
        <Layout>
            <div class="space-y-6">
                <WelcomeCard username=username role_label="Administrator" />
                <div class="grid gap-4 sm:grid-cols-3">
                    <ActionCard
                        title="Create Module"
                        description="Register a new module by its code and name."
                        on_click=Callback::new(move |_| module_vm.open())
                    />
                    <ActionCard
                        title="Add Teacher"
                        description="Give a lecturer or administrator access to the console."
                        on_click=Callback::new(move |_| teacher_vm.open())
                    />
                    <ActionCard
                        title="Manage Modules"
                        description="Edit or delete modules and browse their learning outcomes."
                        href=router::MODULES
                    />
                </div>
            </div>
            <CreateModulePanel vm=module_vm />
            <AccountPanel vm=teacher_vm />
        </Layout>
    }
}
