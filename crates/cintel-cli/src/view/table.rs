//! Roster table and search filter.

use cintel_core::AnalysisResult;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
pub struct CreatorRow {
    #[tabled(rename = "Creator")]
    pub creator: String,
    #[tabled(rename = "Niche")]
    pub niche: String,
    #[tabled(rename = "KPI Tier")]
    pub tier: String,
    #[tabled(rename = "Primary Region")]
    pub primary_region: String,
    #[tabled(rename = "Density")]
    pub density: String,
    #[tabled(rename = "Reach")]
    pub reach: String,
    #[tabled(rename = "Campaign Score")]
    pub campaign_score: String,
}

impl From<&AnalysisResult> for CreatorRow {
    fn from(c: &AnalysisResult) -> Self {
        Self {
            creator: c.handle.clone(),
            niche: c.content_intelligence.primary_niche.clone(),
            tier: c.kpi_analysis.overall_tier.to_string().to_uppercase(),
            primary_region: c.regions.primary.name.clone(),
            density: format!("{}%", c.regions.primary.percentage),
            reach: c.reach_estimation.category.to_string(),
            campaign_score: format!("{}/10", c.campaign_fit.score),
        }
    }
}

/// Creators whose handle or primary niche contains `query`, ignoring case.
/// A blank query keeps everything.
#[must_use]
pub fn filter_creators<'a>(creators: &'a [AnalysisResult], query: &str) -> Vec<&'a AnalysisResult> {
    let needle = query.trim().to_lowercase();
    creators
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.handle.to_lowercase().contains(&needle)
                || c.content_intelligence
                    .primary_niche
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

#[must_use]
pub fn render_table(creators: &[&AnalysisResult]) -> String {
    if creators.is_empty() {
        return "No creators match the current filter.".to_string();
    }
    let rows: Vec<CreatorRow> = creators.iter().map(|c| CreatorRow::from(*c)).collect();
    Table::new(rows).with(Style::modern()).to_string()
}
