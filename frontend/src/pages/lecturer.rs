use crate::{
    components::{
        cards::{ActionCard, WelcomeCard},
        layout::Layout,
    },
    router,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn LecturerDashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let username = Signal::derive(move || {
        auth.with(|state| state.session.as_ref().map(|s| s.username.clone()))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <WelcomeCard username=username role_label="Lecturer" />
                <div class="grid gap-4 sm:grid-cols-2">
                    <ActionCard
                        title="My Modules"
                        description="Define learning outcomes, upload batch results and compare years."
                        href=router::MODULES
                    />
                </div>
            </div>
        </Layout>
    }
}
