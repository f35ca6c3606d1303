use crate::{
    components::layout::{ChromeVariant, Layout},
    router,
    state::auth::use_auth,
};
use leptos::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "Learning outcomes per module",
        "Define the outcomes each module assesses and keep their descriptions current.",
    ),
    (
        "Batch result uploads",
        "Upload Excel or CSV marks for a batch and academic year in one step.",
    ),
    (
        "Year-on-year trends",
        "Compare attainment across academic years and see what improved or declined.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let entry_href = move || {
        auth.get()
            .session
            .map(|session| session.dashboard_path())
            .unwrap_or(router::LOGIN)
    };

    view! {
        <Layout variant=ChromeVariant::Public>
            <section class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                    "Data-Driven Quality: Automate Your Outcome-Based Education (OBE) Assurance."
                </h1>
                <p class="mt-4 max-w-3xl mx-auto text-lg text-fg-muted">
                    "Track Learning Outcome and Program Outcome attainment for every batch, from mark sheets to trends."
                </p>
                <div class="mt-8 flex justify-center">
                    <a
                        href=entry_href
                        class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    >
                        "Access your dashboard"
                    </a>
                </div>
            </section>
            <section class="grid gap-6 sm:grid-cols-3">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="rounded-lg border border-border bg-surface-elevated p-6">
                                <h3 class="text-lg font-semibold text-fg">{*title}</h3>
                                <p class="mt-2 text-sm text-fg-muted">{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </Layout>
    }
}
