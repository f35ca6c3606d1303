use crate::api::Module;
use leptos::*;

#[component]
pub fn ModuleCard(
    module: Module,
    #[prop(into)] can_manage: Signal<bool>,
    on_explore: Callback<Module>,
    on_edit: Callback<Module>,
    on_delete: Callback<Module>,
) -> impl IntoView {
    let outcome_count = module.los_pos_names.len();
    let module_id = module.module_id.clone();
    let module_name = module.module_name.clone();
    let module = store_value(module);

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-5 shadow-sm flex flex-col gap-3">
            <div>
                <h3 class="text-lg font-semibold text-fg">{module_id}</h3>
                <p class="text-sm text-fg-muted">{module_name}</p>
            </div>
            <p class="text-xs text-fg-muted">
                {match outcome_count {
                    0 => "No learning outcomes".to_string(),
                    1 => "1 learning outcome".to_string(),
                    n => format!("{} learning outcomes", n),
                }}
            </p>
            <div class="mt-auto flex flex-wrap gap-2">
                <button
                    type="button"
                    class="px-3 py-1.5 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    on:click=move |_| on_explore.call(module.get_value())
                >
                    "Explore LOs"
                </button>
                <Show when=move || can_manage.get()>
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded-md text-sm font-medium border border-border text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| on_edit.call(module.get_value())
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded-md text-sm font-medium text-action-danger-text bg-action-danger-bg hover:bg-action-danger-bg-hover"
                        on:click=move |_| on_delete.call(module.get_value())
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::module;
    use crate::test_support::ssr::render_to_string;

    fn render(can_manage: bool) -> String {
        render_to_string(move || {
            let mut se101 = module("SE101", "Software Engineering");
            se101.los_pos_names = vec!["LO1".into(), "LO2".into()];
            view! {
                <ModuleCard
                    module=se101
                    can_manage=Signal::derive(move || can_manage)
                    on_explore=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn admin_sees_edit_and_delete() {
        let html = render(true);
        assert!(html.contains("SE101"));
        assert!(html.contains("2 learning outcomes"));
        assert!(html.contains("Explore LOs"));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn lecturer_only_explores() {
        let html = render(false);
        assert!(html.contains("Explore LOs"));
        assert!(!html.contains("Delete"));
    }
}
