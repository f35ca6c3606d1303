use crate::{
    api::LearningOutcome,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
        module_modal::ModuleModal,
    },
    pages::modules::{
        components::{edit_module::EditModuleModal, module_card::ModuleCard},
        view_model::use_modules_view_model,
    },
};
use leptos::*;

#[component]
pub fn ModulesPage() -> impl IntoView {
    let vm = use_modules_view_model();
    let can_manage = Signal::derive(move || vm.can_manage_modules());
    let can_edit_outcomes = Signal::derive(move || vm.can_manage_outcomes());
    let outcome_pending = Signal::derive(move || {
        vm.create_outcome_action.pending().get()
            || vm.update_outcome_action.pending().get()
            || vm.delete_outcome_action.pending().get()
    });
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|m| format!("Delete {} ({})? Its learning outcomes are removed too.", m.module_id, m.module_name))
            .unwrap_or_default()
    });
    let outcome_delete_message = Signal::derive(move || {
        vm.pending_outcome_delete
            .get()
            .map(|lo| format!("Delete {}? Uploaded results stay on the server.", lo.lo_id))
            .unwrap_or_default()
    });

    let module_list = move || match vm.modules_resource.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => {
            log::warn!("Failed to load modules: {}", err);
            view! { <p class="text-sm text-status-error-text">{err.error}</p> }.into_view()
        }
        Some(Ok(modules)) if modules.is_empty() => view! {
            <EmptyState
                title="No modules yet"
                description="Modules created from the admin dashboard appear here."
            />
        }
        .into_view(),
        Some(Ok(modules)) => view! {
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {modules
                    .into_iter()
                    .map(|module| {
                        view! {
                            <ModuleCard
                                module=module
                                can_manage=can_manage
                                on_explore=Callback::new(move |module| vm.open(module))
                                on_edit=Callback::new(move |module| vm.start_edit(module))
                                on_delete=Callback::new(move |module| vm.request_delete(module))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Modules"</h1>
                    <p class="text-sm text-fg-muted">
                        "Open a module to browse its learning outcomes."
                    </p>
                </div>
                <Show when=move || vm.editing.with(Option::is_none)>
                    <InlineErrorMessage error=vm.error />
                </Show>
                {module_list}
            </div>
            <EditModuleModal vm=vm />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete module"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
            <ModuleModal
                module=vm.open_module
                outcomes=Signal::derive(move || vm.outcomes_resource.get())
                can_edit=can_edit_outcomes
                error=vm.outcome_error
                pending=outcome_pending
                on_close=Callback::new(move |_| vm.close())
                on_select=Callback::new(move |lo: LearningOutcome| vm.select_outcome(lo))
                on_create=Callback::new(move |payload| {
                    vm.create_outcome(payload);
                })
                on_update=Callback::new(move |(lo_id, description): (String, String)| {
                    vm.update_outcome(lo_id, description);
                })
                on_delete=Callback::new(move |lo| vm.request_outcome_delete(lo))
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_outcome_delete.with(Option::is_some))
                title="Delete learning outcome"
                message=outcome_delete_message
                confirm_label="Delete"
                confirm_disabled=outcome_pending
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_outcome_delete())
                on_cancel=Callback::new(move |_| vm.cancel_outcome_delete())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_heading_while_modules_load() {
        let html = render_to_string(|| {
            provide_session(Some("admin"));
            view! { <ModulesPage /> }
        });
        assert!(html.contains("Modules"));
        assert!(html.contains("Open a module"));
    }
}
