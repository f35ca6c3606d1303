use super::{hub_label, repository::OutcomeRepository, use_lo_id};
use crate::{
    api::{ApiClient, LearningOutcome},
    components::{
        cards::ActionCard,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    router,
};
use leptos::*;
use std::rc::Rc;

const LOAD_FAILED: &str = "Failed to load learning outcome details";

#[component]
pub fn LoDetailPage() -> impl IntoView {
    let lo_id = use_lo_id();
    view! { <LoDetailView lo_id=lo_id /> }
}

#[component]
pub fn LoDetailView(#[prop(into)] lo_id: Signal<String>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = OutcomeRepository::new_with_client(Rc::new(api));
    let outcome = create_resource(
        move || lo_id.get(),
        move |id| {
            let repo = repository.clone();
            async move { repo.fetch_outcome(id).await }
        },
    );

    let details = move || match outcome.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => {
            log::error!("{}: {}", LOAD_FAILED, err);
            view! { <ErrorMessage message=LOAD_FAILED /> }.into_view()
        }
        Some(Ok(lo)) => view! { <OutcomeSummary outcome=lo /> }.into_view(),
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-fg">
                    {move || format!("Objective {} Hub", hub_label(&lo_id.get()))}
                </h1>
                {details}
                <div class="grid gap-4 sm:grid-cols-2">
                    {move || {
                        let id = lo_id.get();
                        view! {
                            <ActionCard
                                title="Add Results"
                                description="Upload a batch mark sheet for an academic year."
                                href=router::add_results_path(&id)
                            />
                            <ActionCard
                                title="Comparisons"
                                description="See how attainment moved across academic years."
                                href=router::comparison_path(&id)
                            />
                        }
                    }}
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn OutcomeSummary(outcome: LearningOutcome) -> impl IntoView {
    let module = outcome.owning_module().map(str::to_string);
    let uploads = outcome.assignments.clone();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
            <div class="flex items-baseline gap-3">
                <span class="text-lg font-semibold text-fg">{outcome.lo_id.clone()}</span>
                {module.map(|m| view! { <span class="text-sm text-fg-muted">{m}</span> })}
            </div>
            <p class="text-fg">{outcome.description().to_string()}</p>
            <div>
                <h3 class="text-sm font-semibold text-fg">"Uploaded results"</h3>
                {if uploads.is_empty() {
                    view! { <p class="text-sm text-fg-muted">"No results uploaded yet."</p> }.into_view()
                } else {
                    view! {
                        <ul class="mt-1 text-sm text-fg-muted list-disc list-inside">
                            {uploads
                                .into_iter()
                                .map(|a| {
                                    let label = a
                                        .assignment_name
                                        .clone()
                                        .unwrap_or_else(|| a.assignment_id.clone());
                                    view! { <li>{label}</li> }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}
