use crate::{
    config::contact,
    router,
    state::auth::{use_auth, use_logout},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromeVariant {
    /// Landing, login and password help pages.
    Public,
    #[default]
    Workspace,
}

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header(#[prop(optional)] variant: ChromeVariant) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let on_logout = use_logout();
    let (menu_open, set_menu_open) = create_signal(false);

    let username = move || {
        auth.get()
            .session
            .map(|session| session.username)
            .unwrap_or_default()
    };
    let dashboard_href = move || {
        auth.get()
            .session
            .map(|session| session.dashboard_path())
            .unwrap_or(router::LOGIN)
    };

    let links = move || match variant {
        ChromeVariant::Public => view! {
            <a href=router::HOME class=NAV_LINK>"Home"</a>
            <a href=router::LOGIN class=NAV_LINK>"Login"</a>
        }
        .into_view(),
        ChromeVariant::Workspace => view! {
            <a href=dashboard_href class=NAV_LINK>"Dashboard"</a>
            <a href=router::MODULES class=NAV_LINK>"Modules"</a>
            <span class="px-3 py-2 text-sm text-fg-muted">{username}</span>
            <button
                type="button"
                class=NAV_LINK
                on:click=move |_| {
                    set_menu_open.set(false);
                    on_logout.call(());
                }
            >
                "Logout"
            </button>
        }
        .into_view(),
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=router::HOME class="flex items-center gap-2">
                        <span class="text-xl font-semibold text-fg">"LO-PO Attainment"</span>
                        <span class="hidden sm:inline text-sm text-fg-muted">{contact::FACULTY}</span>
                    </a>
                    <nav class="hidden lg:flex items-center space-x-2">{links}</nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg"
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="mobile-nav"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        "☰"
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden flex flex-col border-t border-border py-3">
                        {links}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-12 border-t border-border bg-surface-elevated">
            <div class="max-w-7xl mx-auto px-4 py-8 grid gap-6 sm:grid-cols-3 text-sm text-fg-muted">
                <div>
                    <h3 class="font-semibold text-fg">"Contact Us"</h3>
                    <p class="mt-2">{contact::ADDRESS}</p>
                </div>
                <div>
                    <h3 class="font-semibold text-fg">"Phone"</h3>
                    <ul class="mt-2 space-y-1">
                        {contact::PHONES
                            .iter()
                            .map(|phone| view! { <li>{*phone}</li> })
                            .collect_view()}
                    </ul>
                    <p class="mt-2">"Fax: " {contact::FAX}</p>
                </div>
                <div>
                    <h3 class="font-semibold text-fg">"Email"</h3>
                    <a class="mt-2 block hover:text-fg" href=format!("mailto:{}", contact::EMAIL)>
                        {contact::EMAIL}
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(#[prop(optional)] variant: ChromeVariant, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-surface">
            <Header variant=variant />
            <main class="flex-1 w-full max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn workspace_header_shows_username_and_logout() {
        let html = render_to_string(move || {
            provide_session(Some("admin"));
            view! { <Header variant=ChromeVariant::Workspace /> }
        });
        assert!(html.contains("kasun"));
        assert!(html.contains("Logout"));
        assert!(html.contains("/admin-dashboard"));
        assert!(html.contains("/modules"));
    }

    #[test]
    fn public_header_links_to_login() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Header variant=ChromeVariant::Public /> }
        });
        assert!(html.contains("/loginpage"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn layout_renders_children_and_contact_block() {
        let html = render_to_string(move || {
            provide_session(Some("lecture"));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("ar@eng.ruh.ac.lk"));
        assert!(html.contains("+94 912245762"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Failed to add teacher" />
                    <SuccessMessage message="Teacher added successfully!" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Failed to add teacher"));
        assert!(html.contains("Teacher added successfully!"));
    }
}
