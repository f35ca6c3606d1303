use leptos::*;

/// Slide-over panel hosting the dashboard forms.
#[component]
pub fn SidePanel(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex justify-end">
                <button
                    type="button"
                    aria-label="Close panel"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <aside class="relative z-[61] h-full w-full max-w-md bg-surface-elevated shadow-xl border-l border-border p-6 overflow-y-auto">
                    <div class="flex items-start justify-between mb-6">
                        <h2 class="text-lg font-semibold text-fg">{title.get_value()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>
                    {children()}
                </aside>
            </div>
        </Show>
    }
}
