use cintel_core::{AnalysisResponse, AnalysisResult};

pub(crate) fn sample_result_value(handle: &str, niche: &str) -> serde_json::Value {
    serde_json::json!({
        "handle": handle,
        "brandSummary": format!("{handle} makes \"{niche}\" content, mostly Reels."),
        "regions": {
            "primary": { "name": "India", "percentage": 78 },
            "secondary": [{ "name": "UAE", "percentage": 9 }]
        },
        "stateBreakdown": [
            { "state": "Maharashtra", "percentage": 31 },
            { "state": "Gujarat", "percentage": 12.5 }
        ],
        "kpiAnalysis": {
            "awareness": { "category": "Good to Go", "score": 82, "insight": "Reach growing month on month." },
            "engagement": { "category": "Average", "score": 55, "insight": "Saves lag behind likes." },
            "conversions": { "category": "Low", "score": 30, "insight": "No link-in-bio calls to action." },
            "roi": { "category": "Average", "score": 60, "insight": "EMV in line with niche." },
            "overallTier": "Average"
        },
        "contentIntelligence": {
            "primaryNiche": niche,
            "secondaryNiche": "Travel",
            "dominantFormat": "Reels",
            "brandSafety": "Low Risk",
            "intent": "Inspiration",
            "audienceIntentDetails": "Recipe hooks drive saves."
        },
        "reachEstimation": { "category": "High Reach", "reasoning": "Frequent shares." },
        "demographics": {
            "ageGroups": [
                { "range": "18-24", "percentage": 40 },
                { "range": "25-34", "percentage": 45 }
            ],
            "genderSkew": { "male": 42, "female": 57, "other": 1 },
            "metroSplit": { "metro": 64, "tier2_3": 36 },
            "reasoning": "Hinglish captions and metro locations."
        },
        "campaignFit": {
            "score": 7.5,
            "recommendedCategories": ["FMCG", "Kitchen appliances"],
            "riskFlags": []
        }
    })
}

pub(crate) fn sample_result(handle: &str, niche: &str) -> AnalysisResult {
    serde_json::from_value(sample_result_value(handle, niche)).expect("fixture matches schema")
}

pub(crate) fn sample_response(handles: &[&str]) -> AnalysisResponse {
    AnalysisResponse {
        creators: handles.iter().map(|h| sample_result(h, "Food")).collect(),
        summary: "Roster skews toward food and travel.".to_string(),
    }
}
