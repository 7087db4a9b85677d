//! Wire model for the analysis response.
//!
//! Field names follow the camelCase JSON schema sent to the completion
//! service. Categorical fields deserialize unknown strings into an
//! `Unrecognized` variant so a single off-script value does not discard the
//! whole report; [`crate::validate::check_response`] flags those values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-band KPI classification used per pillar and for the overall tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiTier {
    #[serde(rename = "Good to Go")]
    GoodToGo,
    Average,
    Low,
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for KpiTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiTier::GoodToGo => write!(f, "Good to Go"),
            KpiTier::Average => write!(f, "Average"),
            KpiTier::Low => write!(f, "Low"),
            KpiTier::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrandSafety {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for BrandSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandSafety::Low => write!(f, "Low Risk"),
            BrandSafety::Medium => write!(f, "Medium Risk"),
            BrandSafety::High => write!(f, "High Risk"),
            BrandSafety::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

/// Why the audience follows the creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudienceIntent {
    Entertainment,
    Learning,
    Purchase,
    Inspiration,
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for AudienceIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudienceIntent::Entertainment => write!(f, "Entertainment"),
            AudienceIntent::Learning => write!(f, "Learning"),
            AudienceIntent::Purchase => write!(f, "Purchase"),
            AudienceIntent::Inspiration => write!(f, "Inspiration"),
            AudienceIntent::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReachCategory {
    #[serde(rename = "Low Reach")]
    Low,
    #[serde(rename = "Stable Reach")]
    Stable,
    #[serde(rename = "High Reach")]
    High,
    #[serde(rename = "Viral Potential")]
    Viral,
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for ReachCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReachCategory::Low => write!(f, "Low Reach"),
            ReachCategory::Stable => write!(f, "Stable Reach"),
            ReachCategory::High => write!(f, "High Reach"),
            ReachCategory::Viral => write!(f, "Viral Potential"),
            ReachCategory::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSplit {
    pub name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regions {
    pub primary: RegionSplit,
    #[serde(default)]
    pub secondary: Vec<RegionSplit>,
}

/// One administrative region's share of the in-country audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateShare {
    pub state: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMetric {
    pub category: KpiTier,
    /// 1-100.
    pub score: f64,
    pub insight: String,
}

/// The four performance pillars plus the overall tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiAnalysis {
    pub awareness: KpiMetric,
    pub engagement: KpiMetric,
    pub conversions: KpiMetric,
    pub roi: KpiMetric,
    pub overall_tier: KpiTier,
}

impl KpiAnalysis {
    /// Pillars in display order, labelled.
    #[must_use]
    pub fn pillars(&self) -> [(&'static str, &KpiMetric); 4] {
        [
            ("Brand Awareness", &self.awareness),
            ("Engagement", &self.engagement),
            ("Conversions", &self.conversions),
            ("ROI & EMV", &self.roi),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIntelligence {
    pub primary_niche: String,
    pub secondary_niche: String,
    pub dominant_format: String,
    pub brand_safety: BrandSafety,
    pub intent: AudienceIntent,
    pub audience_intent_details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachEstimation {
    pub category: ReachCategory,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroup {
    pub range: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderSkew {
    pub male: f64,
    pub female: f64,
    #[serde(default)]
    pub other: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroSplit {
    pub metro: f64,
    pub tier2_3: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_groups: Vec<AgeGroup>,
    pub gender_skew: GenderSkew,
    pub metro_split: MetroSplit,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFit {
    /// 0-10.
    pub score: f64,
    #[serde(default)]
    pub recommended_categories: Vec<String>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
}

/// Per-creator intelligence record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub handle: String,
    pub brand_summary: String,
    pub regions: Regions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_breakdown: Option<Vec<StateShare>>,
    pub kpi_analysis: KpiAnalysis,
    pub content_intelligence: ContentIntelligence,
    pub reach_estimation: ReachEstimation,
    pub demographics: Demographics,
    pub campaign_fit: CampaignFit,
}

/// Full report returned by the completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub creators: Vec<AnalysisResult>,
    pub summary: String,
}
