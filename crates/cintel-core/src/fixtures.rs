use crate::types::{AnalysisResponse, AnalysisResult};

/// A schema-conformant creator record as the completion service returns it.
pub(crate) fn sample_result_json(handle: &str) -> String {
    serde_json::json!({
        "handle": handle,
        "brandSummary": "Mumbai street-food creator with strong regional pull.",
        "regions": {
            "primary": { "name": "India", "percentage": 78.0 },
            "secondary": [
                { "name": "UAE", "percentage": 9.0 },
                { "name": "United States", "percentage": 6.0 }
            ]
        },
        "stateBreakdown": [
            { "state": "Maharashtra", "percentage": 31.0 },
            { "state": "Gujarat", "percentage": 12.0 }
        ],
        "kpiAnalysis": {
            "awareness": { "category": "Good to Go", "score": 82, "insight": "Reach growing month on month." },
            "engagement": { "category": "Average", "score": 55, "insight": "Saves lag behind likes." },
            "conversions": { "category": "Low", "score": 30, "insight": "No link-in-bio calls to action." },
            "roi": { "category": "Average", "score": 60, "insight": "EMV in line with niche." },
            "overallTier": "Average"
        },
        "contentIntelligence": {
            "primaryNiche": "Food",
            "secondaryNiche": "Travel",
            "dominantFormat": "Reels",
            "brandSafety": "Low Risk",
            "intent": "Entertainment",
            "audienceIntentDetails": "Hooks built around taste-test reactions."
        },
        "reachEstimation": { "category": "High Reach", "reasoning": "Consistent reel virality." },
        "demographics": {
            "ageGroups": [
                { "range": "18-24", "percentage": 40.0 },
                { "range": "25-34", "percentage": 45.0 }
            ],
            "genderSkew": { "male": 55.0, "female": 44.0, "other": 1.0 },
            "metroSplit": { "metro": 65.0, "tier2_3": 35.0 },
            "reasoning": "Hindi-English captions and metro locations."
        },
        "campaignFit": {
            "score": 7.5,
            "recommendedCategories": ["QSR", "Beverages"],
            "riskFlags": []
        }
    })
    .to_string()
}

pub(crate) fn sample_result(handle: &str) -> AnalysisResult {
    serde_json::from_str(&sample_result_json(handle)).expect("fixture should deserialize")
}

pub(crate) fn sample_response(handles: &[&str]) -> AnalysisResponse {
    AnalysisResponse {
        creators: handles.iter().map(|h| sample_result(h)).collect(),
        summary: "Roster skews toward food and travel.".to_string(),
    }
}
