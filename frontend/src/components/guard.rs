use crate::{
    components::layout::LoadingSpinner,
    router,
    state::{
        auth::use_auth,
        session::{Role, Session},
    },
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    SignedIn,
    Roles(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(&'static str),
}

pub const SUPER_ADMIN_ONLY: RouteAccess = RouteAccess::Roles(&[Role::SuperAdmin]);
pub const ADMINS: RouteAccess = RouteAccess::Roles(&[Role::Admin, Role::SuperAdmin]);
pub const LECTURERS: RouteAccess = RouteAccess::Roles(&[Role::Lecturer]);

pub fn authorize(session: Option<&Session>, access: RouteAccess) -> AccessDecision {
    match (access, session) {
        (RouteAccess::Public, _) => AccessDecision::Allow,
        (_, None) => AccessDecision::Redirect(router::LOGIN),
        (RouteAccess::SignedIn, Some(_)) => AccessDecision::Allow,
        (RouteAccess::Roles(allowed), Some(session)) => match session.role() {
            Some(role) if allowed.contains(&role) => AccessDecision::Allow,
            _ => AccessDecision::Redirect(router::HOME),
        },
    }
}

/// Renders `children` only when the current session satisfies `access`;
/// otherwise redirects once mounted.
#[component]
pub fn RequireAccess(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| authorize(auth.get().session.as_ref(), access));
    create_effect(move |_| {
        if let AccessDecision::Redirect(target) = decision.get() {
            log::info!("access denied; redirecting to {}", target);
            navigation::navigate_to(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == AccessDecision::Allow
            fallback=|| view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_children_for_permitted_role() {
        let html = render_to_string(move || {
            provide_session(Some("admin"));
            view! {
                <RequireAccess access=ADMINS>
                    {|| view! { <div>"admin-area"</div> }}
                </RequireAccess>
            }
        });
        assert!(html.contains("admin-area"));
    }

    #[test]
    fn hides_children_without_session() {
        let html = render_to_string(move || {
            provide_session(None);
            view! {
                <RequireAccess access=RouteAccess::SignedIn>
                    {|| view! { <div>"modules-area"</div> }}
                </RequireAccess>
            }
        });
        assert!(!html.contains("modules-area"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn hides_children_for_wrong_role() {
        let html = render_to_string(move || {
            provide_session(Some("lecture"));
            view! {
                <RequireAccess access=SUPER_ADMIN_ONLY>
                    {|| view! { <div>"root-area"</div> }}
                </RequireAccess>
            }
        });
        assert!(!html.contains("root-area"));
    }
}
