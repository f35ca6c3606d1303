use leptos::*;

/// Greeting at the top of every dashboard.
#[component]
pub fn WelcomeCard(
    #[prop(into)] username: Signal<String>,
    #[prop(into)] role_label: String,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <p class="text-sm font-medium text-fg-muted">{role_label}</p>
                <h2 class="mt-1 text-2xl font-bold text-fg">
                    "Welcome back, " {move || username.get()}
                </h2>
            </div>
        </div>
    }
}

/// Quick action tile. Renders a link when `href` is given, otherwise a button
/// calling `on_click`.
#[component]
pub fn ActionCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let body = view! {
        <h3 class="text-lg font-semibold text-fg">{title}</h3>
        <p class="mt-1 text-sm text-fg-muted">{description}</p>
    };
    let class = "block w-full text-left bg-surface-elevated shadow rounded-lg p-5 border border-border hover:border-action-primary-bg transition-colors";
    match href {
        Some(href) => view! { <a href=href class=class>{body}</a> }.into_view(),
        None => view! {
            <button
                type="button"
                class=class
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.call(());
                    }
                }
            >
                {body}
            </button>
        }
        .into_view(),
    }
}
