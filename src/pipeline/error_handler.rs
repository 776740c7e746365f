use std::collections::BTreeMap;

use crate::{DispatchReport, Outcome};

/// Log one skipped technology. Call from the collector as outcomes arrive.
pub fn log_skipped_outcome(outcome: &Outcome) {
    if let Some(err) = outcome.error() {
        log::warn!("Skipped {}: {}", outcome.tech_name, err);
    }
}

/// Count skipped outcomes per failure kind, sorted by kind name.
pub fn skip_reasons(report: &DispatchReport) -> BTreeMap<&'static str, usize> {
    let mut reasons = BTreeMap::new();
    for err in report.outcomes.iter().filter_map(Outcome::error) {
        *reasons.entry(err.kind()).or_insert(0) += 1;
    }
    reasons
}

/// After dispatch: log the per-kind breakdown of skips (debug), if any.
pub fn log_skip_breakdown(report: &DispatchReport) {
    let reasons = skip_reasons(report);
    if reasons.is_empty() {
        return;
    }
    let parts: Vec<String> = reasons
        .iter()
        .map(|(kind, n)| format!("{kind}: {n}"))
        .collect();
    log::debug!("Skip reasons: {}", parts.join(", "));
}
