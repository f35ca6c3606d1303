use crate::{
    api::{ApiError, LearningOutcome, TrendMap, TrendPoint, TrendStatus},
    pages::lo_detail::repository::OutcomeRepository,
};
use serde::{Deserialize, Serialize};

pub const LOAD_FAILED: &str = "Could not load comparison data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub lo_name: String,
    pub series: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonState {
    Loading,
    Error(String),
    NoData { lo_name: String },
    Ready(Comparison),
}

impl ComparisonState {
    pub fn from_result(result: Option<Result<Comparison, ApiError>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Err(_)) => Self::Error(LOAD_FAILED.to_string()),
            Some(Ok(comparison)) if comparison.series.is_empty() => Self::NoData {
                lo_name: comparison.lo_name,
            },
            Some(Ok(comparison)) => Self::Ready(comparison),
        }
    }
}

fn series_for_prefix<'a>(trend: &'a TrendMap, id: &str) -> Option<&'a Vec<TrendPoint>> {
    if id.is_empty() {
        return None;
    }
    let prefix = format!("{} -", id);
    trend
        .iter()
        .find(|(key, _)| key.starts_with(&prefix))
        .map(|(_, series)| series)
}

/// Series keyed `"{id} - ..."`, falling back to `"{loId} - ..."`. The trailing
/// ` -` keeps `LO1` from matching `LO10`.
pub fn find_trend_series(trend: &TrendMap, outcome: &LearningOutcome) -> Vec<TrendPoint> {
    series_for_prefix(trend, &outcome.id)
        .or_else(|| series_for_prefix(trend, &outcome.lo_id))
        .cloned()
        .unwrap_or_default()
}

pub async fn load_comparison(
    repository: &OutcomeRepository,
    lo_id: String,
) -> Result<Comparison, ApiError> {
    let outcome = repository.fetch_outcome(lo_id).await?;
    let module_id = outcome
        .owning_module()
        .ok_or_else(|| ApiError::unknown("Learning outcome has no module"))?
        .to_string();
    let trend = repository.fetch_trend(&module_id).await?;
    Ok(Comparison {
        lo_name: outcome.description().to_string(),
        series: find_trend_series(&trend, &outcome),
    })
}

/// Upper bound of the bar chart: 100 unless an average exceeds it.
pub fn chart_scale(series: &[TrendPoint]) -> f64 {
    series.iter().map(|p| p.average).fold(100.0, f64::max)
}

pub fn bar_height_percent(average: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        0.0
    } else {
        (average / scale * 100.0).clamp(0.0, 100.0)
    }
}

pub fn status_class(status: TrendStatus) -> &'static str {
    match status {
        TrendStatus::Improved => "bg-status-success-bg text-status-success-text",
        TrendStatus::Declined => "bg-status-error-bg text-status-error-text",
        TrendStatus::Baseline => "bg-surface-muted text-fg-muted",
        TrendStatus::Stable | TrendStatus::Unknown => "bg-status-info-bg text-status-info-text",
    }
}

pub fn bar_class(status: TrendStatus) -> &'static str {
    match status {
        TrendStatus::Improved => "bg-status-success-text",
        TrendStatus::Declined => "bg-status-error-text",
        TrendStatus::Baseline | TrendStatus::Stable | TrendStatus::Unknown => "bg-action-primary-bg",
    }
}

/// Absolute change to one decimal with a direction marker, e.g. `▲ 4.2%`.
pub fn delta_label(delta: f64) -> String {
    let marker = if delta > 0.0 {
        "▲"
    } else if delta < 0.0 {
        "▼"
    } else {
        "■"
    };
    format!("{} {:.1}%", marker, delta.abs())
}
