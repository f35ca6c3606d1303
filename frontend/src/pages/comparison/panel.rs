use super::utils::{
    bar_class, bar_height_percent, chart_scale, delta_label, load_comparison, status_class,
    Comparison, ComparisonState,
};
use crate::{
    api::ApiClient,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::lo_detail::{hub_label, repository::OutcomeRepository, use_lo_id},
    router,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ComparisonPage() -> impl IntoView {
    let lo_id = use_lo_id();
    view! { <ComparisonView lo_id=lo_id /> }
}

#[component]
pub fn ComparisonView(#[prop(into)] lo_id: Signal<String>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = OutcomeRepository::new_with_client(Rc::new(api));
    let comparison = create_resource(
        move || lo_id.get(),
        move |id| {
            let repo = repository.clone();
            async move {
                let result = load_comparison(&repo, id).await;
                if let Err(err) = &result {
                    log::error!("Error fetching trend data: {}", err);
                }
                result
            }
        },
    );

    let body = move || match ComparisonState::from_result(comparison.get()) {
        ComparisonState::Loading => view! { <LoadingSpinner /> }.into_view(),
        ComparisonState::Error(message) => view! { <ErrorMessage message=message /> }.into_view(),
        ComparisonState::NoData { lo_name } => view! {
            <EmptyState
                title="No trend data yet"
                description=format!(
                    "Upload results for at least two batches of {} to compare attainment.",
                    lo_name
                )
            />
        }
        .into_view(),
        ComparisonState::Ready(data) => view! { <TrendChart comparison=data /> }.into_view(),
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-fg">
                        {move || format!("{} Comparison", hub_label(&lo_id.get()))}
                    </h1>
                    <a
                        href=move || router::lo_detail_path(&lo_id.get())
                        class="text-sm text-fg-muted hover:text-fg"
                    >
                        "Back to hub"
                    </a>
                </div>
                {body}
            </div>
        </Layout>
    }
}

#[component]
fn TrendChart(comparison: Comparison) -> impl IntoView {
    let scale = chart_scale(&comparison.series);
    let latest = comparison.series.last().map(|p| p.average).unwrap_or_default();
    let batches = comparison.series.len();
    let bars = comparison.series.clone();
    let cards = comparison.series;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 flex flex-col md:flex-row md:items-center justify-between gap-4">
            <div>
                <p class="text-xs font-semibold uppercase text-fg-muted">"Learning Outcome Focus"</p>
                <h2 class="text-xl font-bold text-fg">{comparison.lo_name}</h2>
            </div>
            <div class="flex gap-4 text-sm">
                <div>
                    <p class="text-fg-muted">"Total Batches"</p>
                    <p class="text-2xl font-bold text-fg">{batches}</p>
                </div>
                <div>
                    <p class="text-fg-muted">"Latest Avg."</p>
                    <p class="text-2xl font-bold text-status-success-text">{format!("{:.1}%", latest)}</p>
                </div>
            </div>
        </div>

        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <div class="flex items-end gap-6 h-64" role="img" aria-label="Average attainment per academic year">
                {bars
                    .into_iter()
                    .map(|point| {
                        let height = format!("height: {:.1}%", bar_height_percent(point.average, scale));
                        view! {
                            <div class="flex-1 h-full flex flex-col justify-end items-center gap-2">
                                <span class="text-xs font-semibold text-fg">{format!("{:.1}%", point.average)}</span>
                                <div class=format!("w-full rounded-t-md {}", bar_class(point.status)) style=height></div>
                                <span class="text-xs text-fg-muted">{point.year}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
            {cards
                .into_iter()
                .map(|point| {
                    view! {
                        <div class="bg-surface-elevated shadow rounded-lg p-5 space-y-2">
                            <div class="flex items-center justify-between">
                                <span class="text-sm font-semibold text-fg">{point.year}</span>
                                <span class=format!("text-xs font-semibold px-2 py-0.5 rounded {}", status_class(point.status))>
                                    {point.status.label()}
                                </span>
                            </div>
                            <p class="text-3xl font-bold text-fg">{format!("{:.1}%", point.average)}</p>
                            {point.delta.map(|delta| view! {
                                <p class={if delta >= 0.0 { "text-sm text-status-success-text" } else { "text-sm text-status-error-text" }}>
                                    {delta_label(delta)}
                                </p>
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
