use chrono::{Local, Timelike};
use metrics_exporter_prometheus::PrometheusHandle;
use nutrisync::compatibility::TimeOfDay;
use nutrisync::config::CatalogConfig;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// CLI flag first, then the configured location.
pub(crate) fn catalog_path(config: &CatalogConfig, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| config.path.clone())
}

/// Day runs from 06:00 to 17:59 local time.
pub(crate) fn time_of_day_for_hour(hour: u32) -> TimeOfDay {
    if (6..18).contains(&hour) {
        TimeOfDay::Day
    } else {
        TimeOfDay::Night
    }
}

pub(crate) fn current_time_of_day() -> TimeOfDay {
    time_of_day_for_hour(Local::now().hour())
}
