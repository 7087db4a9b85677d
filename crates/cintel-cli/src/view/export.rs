//! CSV and JSON export of the full, unfiltered report.

use cintel_core::AnalysisResponse;

pub const CSV_HEADER: &str =
    "Handle,Niche,Tier,Primary Region,Density,Reach,Campaign Score,Brand Summary";

/// One header line plus one line per creator. Only the brand summary is
/// quoted, with embedded quotes doubled.
#[must_use]
pub fn to_csv(response: &AnalysisResponse) -> String {
    let mut lines = Vec::with_capacity(response.creators.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for c in &response.creators {
        lines.push(format!(
            "{},{},{},{},{}%,{},{},\"{}\"",
            c.handle,
            c.content_intelligence.primary_niche,
            c.kpi_analysis.overall_tier,
            c.regions.primary.name,
            c.regions.primary.percentage,
            c.reach_estimation.category,
            c.campaign_fit.score,
            c.brand_summary.replace('"', "\"\""),
        ));
    }
    lines.join("\n")
}

/// The raw report as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serialization error, which only occurs for non-finite numbers.
pub fn to_json(response: &AnalysisResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}
