use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{client::encode_segment, ApiClient},
    components::guard::{RequireAccess, RouteAccess, ADMINS, LECTURERS, SUPER_ADMIN_ONLY},
    pages::{
        add_results::AddResultsPage, admin::AdminDashboardPage, comparison::ComparisonPage,
        forgot_password::ForgotPasswordPage, home::HomePage, lecturer::LecturerDashboardPage,
        lo_detail::LoDetailPage, login::LoginPage, modules::ModulesPage,
        super_admin::SuperAdminDashboardPage,
    },
    state::{auth::AuthProvider, session::SessionStore},
};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/loginpage";
pub const FORGOT_PASSWORD: &str = "/forgottenpassword";
pub const ADMIN_DASHBOARD: &str = "/admin-dashboard";
pub const SUPER_ADMIN_DASHBOARD: &str = "/super-admin-dashboard";
pub const LECTURER_DASHBOARD: &str = "/lecturer-dashboard";
pub const MODULES: &str = "/modules";

pub const ROUTE_PATHS: &[&str] = &[
    HOME,
    LOGIN,
    FORGOT_PASSWORD,
    ADMIN_DASHBOARD,
    SUPER_ADMIN_DASHBOARD,
    LECTURER_DASHBOARD,
    MODULES,
    "/lo-detail/:lo_id",
    "/lo-detail/:lo_id/add-results",
    "/lo-detail/:lo_id/comparisons",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[HOME, LOGIN, FORGOT_PASSWORD];

pub fn lo_detail_path(lo_id: &str) -> String {
    format!("/lo-detail/{}", encode_segment(lo_id))
}

pub fn add_results_path(lo_id: &str) -> String {
    format!("{}/add-results", lo_detail_path(lo_id))
}

pub fn comparison_path(lo_id: &str) -> String {
    format!("{}/comparisons", lo_detail_path(lo_id))
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let store = SessionStore::platform_default();
    provide_context(store.clone());
    provide_context(ApiClient::new().with_session_store(store));
    view! {
        <Title text="LO-PO Attainment Console"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME view=HomePage/>
                    <Route path=LOGIN view=LoginPage/>
                    <Route path=FORGOT_PASSWORD view=ForgotPasswordPage/>
                    <Route path=SUPER_ADMIN_DASHBOARD view=ProtectedSuperAdminDashboard/>
                    <Route path=ADMIN_DASHBOARD view=ProtectedAdminDashboard/>
                    <Route path=LECTURER_DASHBOARD view=ProtectedLecturerDashboard/>
                    <Route path=MODULES view=ProtectedModules/>
                    <Route path="/lo-detail/:lo_id" view=ProtectedLoDetail/>
                    <Route path="/lo-detail/:lo_id/add-results" view=ProtectedAddResults/>
                    <Route path="/lo-detail/:lo_id/comparisons" view=ProtectedComparison/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedSuperAdminDashboard() -> impl IntoView {
    view! { <RequireAccess access=SUPER_ADMIN_ONLY><SuperAdminDashboardPage/></RequireAccess> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireAccess access=ADMINS><AdminDashboardPage/></RequireAccess> }
}

#[component]
fn ProtectedLecturerDashboard() -> impl IntoView {
    view! { <RequireAccess access=LECTURERS><LecturerDashboardPage/></RequireAccess> }
}

#[component]
fn ProtectedModules() -> impl IntoView {
    view! { <RequireAccess access=RouteAccess::SignedIn><ModulesPage/></RequireAccess> }
}

#[component]
fn ProtectedLoDetail() -> impl IntoView {
    view! { <RequireAccess access=RouteAccess::SignedIn><LoDetailPage/></RequireAccess> }
}

#[component]
fn ProtectedAddResults() -> impl IntoView {
    view! { <RequireAccess access=RouteAccess::SignedIn><AddResultsPage/></RequireAccess> }
}

#[component]
fn ProtectedComparison() -> impl IntoView {
    view! { <RequireAccess access=RouteAccess::SignedIn><ComparisonPage/></RequireAccess> }
}
