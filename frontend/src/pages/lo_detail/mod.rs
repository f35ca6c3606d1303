//! Pages scoped to one learning outcome: its hub, the results upload and the
//! year-on-year comparison.

pub mod panel;
pub mod repository;

pub use panel::{LoDetailPage, LoDetailView};

use leptos::*;
use leptos_router::use_params_map;

/// `:lo_id` route parameter, empty when the route has none.
pub fn use_lo_id() -> Signal<String> {
    let params = use_params_map();
    Signal::derive(move || params.with(|p| p.get("lo_id").cloned().unwrap_or_default()))
}

/// Heading suffix taken from the segment after the last `_` of the LO id.
pub fn hub_label(lo_id: &str) -> &str {
    lo_id.rsplit('_').next().unwrap_or(lo_id)
}
