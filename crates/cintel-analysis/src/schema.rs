//! JSON schema sent as the `responseSchema` generation constraint.
//!
//! Field names mirror the camelCase wire shape of
//! [`cintel_core::AnalysisResponse`]. Bump [`SCHEMA_VERSION`] whenever a
//! field is added, removed, or changes type.

use serde_json::{json, Value};

pub const SCHEMA_VERSION: u32 = 2;

const KPI_TIERS: [&str; 3] = ["Good to Go", "Average", "Low"];
const BRAND_SAFETY_LEVELS: [&str; 3] = ["Low Risk", "Medium Risk", "High Risk"];
const AUDIENCE_INTENTS: [&str; 4] = ["Entertainment", "Learning", "Purchase", "Inspiration"];
const REACH_CATEGORIES: [&str; 4] = ["Low Reach", "Stable Reach", "High Reach", "Viral Potential"];

fn enum_string(values: &[&str], description: &str) -> Value {
    json!({ "type": "STRING", "enum": values, "description": description })
}

fn share(label: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            label: { "type": "STRING" },
            "percentage": { "type": "NUMBER" }
        },
        "required": [label, "percentage"]
    })
}

fn kpi_metric() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "category": enum_string(&KPI_TIERS, "Must be 'Good to Go', 'Average', or 'Low'"),
            "score": { "type": "NUMBER", "description": "Scale of 1-100" },
            "insight": {
                "type": "STRING",
                "description": "Highly specific reasoning derived from metrics and content signals."
            }
        },
        "required": ["category", "score", "insight"]
    })
}

fn creator() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "handle": { "type": "STRING" },
            "brandSummary": {
                "type": "STRING",
                "description": "Two or three sentences positioning the creator for brand partners."
            },
            "regions": {
                "type": "OBJECT",
                "properties": {
                    "primary": share("name"),
                    "secondary": { "type": "ARRAY", "items": share("name") }
                },
                "required": ["primary", "secondary"]
            },
            "stateBreakdown": { "type": "ARRAY", "items": share("state") },
            "kpiAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "awareness": kpi_metric(),
                    "engagement": kpi_metric(),
                    "conversions": kpi_metric(),
                    "roi": kpi_metric(),
                    "overallTier": enum_string(
                        &KPI_TIERS,
                        "Overall classification: 'Good to Go', 'Average', or 'Low'"
                    )
                },
                "required": ["awareness", "engagement", "conversions", "roi", "overallTier"]
            },
            "contentIntelligence": {
                "type": "OBJECT",
                "properties": {
                    "primaryNiche": { "type": "STRING" },
                    "secondaryNiche": { "type": "STRING" },
                    "dominantFormat": { "type": "STRING" },
                    "brandSafety": enum_string(&BRAND_SAFETY_LEVELS, "Brand-safety risk level"),
                    "intent": enum_string(&AUDIENCE_INTENTS, "Why the audience follows this creator"),
                    "audienceIntentDetails": {
                        "type": "STRING",
                        "description": "Detailed reasoning for the selected audience intent with specific examples or observations from the creator's content style."
                    }
                },
                "required": [
                    "primaryNiche", "secondaryNiche", "dominantFormat",
                    "brandSafety", "intent", "audienceIntentDetails"
                ]
            },
            "reachEstimation": {
                "type": "OBJECT",
                "properties": {
                    "category": enum_string(&REACH_CATEGORIES, "Audience density class"),
                    "reasoning": { "type": "STRING" }
                },
                "required": ["category", "reasoning"]
            },
            "demographics": {
                "type": "OBJECT",
                "properties": {
                    "ageGroups": { "type": "ARRAY", "items": share("range") },
                    "genderSkew": {
                        "type": "OBJECT",
                        "properties": {
                            "male": { "type": "NUMBER" },
                            "female": { "type": "NUMBER" },
                            "other": { "type": "NUMBER" }
                        },
                        "required": ["male", "female"]
                    },
                    "metroSplit": {
                        "type": "OBJECT",
                        "properties": {
                            "metro": { "type": "NUMBER" },
                            "tier2_3": { "type": "NUMBER" }
                        },
                        "required": ["metro", "tier2_3"]
                    },
                    "reasoning": { "type": "STRING" }
                },
                "required": ["ageGroups", "genderSkew", "metroSplit", "reasoning"]
            },
            "campaignFit": {
                "type": "OBJECT",
                "properties": {
                    "score": { "type": "NUMBER", "description": "Scale of 0-10" },
                    "recommendedCategories": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "riskFlags": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["score", "recommendedCategories", "riskFlags"]
            }
        },
        "required": [
            "handle", "brandSummary", "regions", "kpiAnalysis", "contentIntelligence",
            "reachEstimation", "demographics", "campaignFit"
        ]
    })
}

/// The full response schema: `{creators: [..], summary}`.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "creators": { "type": "ARRAY", "items": creator() },
            "summary": { "type": "STRING" }
        },
        "required": ["creators", "summary"]
    })
}
