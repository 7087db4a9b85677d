//! Post-parse checks on a model-generated [`AnalysisResponse`].
//!
//! Deserialization already enforces the structure of the schema. These checks
//! cover what the schema cannot express (value ranges, categorical strings
//! outside the rubric) and the handle coverage of the report. Nothing here
//! modifies the response; callers decide how to surface the findings.

use std::collections::HashSet;
use std::fmt;

use crate::types::{
    AnalysisResponse, AnalysisResult, AudienceIntent, BrandSafety, KpiTier, ReachCategory,
};

/// One finding against a single creator record.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaViolation {
    /// Index of the creator in `creators`.
    pub index: usize,
    pub handle: String,
    /// Dotted JSON path of the offending field, e.g. `kpiAnalysis.roi.score`.
    pub field: String,
    pub problem: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handle = if self.handle.is_empty() {
            "<no handle>"
        } else {
            &self.handle
        };
        write!(
            f,
            "creator #{} ({handle}): {} {}",
            self.index + 1,
            self.field,
            self.problem
        )
    }
}

struct Checker<'a> {
    index: usize,
    handle: &'a str,
    out: &'a mut Vec<SchemaViolation>,
}

impl Checker<'_> {
    fn push(&mut self, field: &str, problem: String) {
        self.out.push(SchemaViolation {
            index: self.index,
            handle: self.handle.to_string(),
            field: field.to_string(),
            problem,
        });
    }

    fn range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if !value.is_finite() || value < min || value > max {
            self.push(field, format!("is {value}, expected {min}-{max}"));
        }
    }

    fn percentage(&mut self, field: &str, value: f64) {
        self.range(field, value, 0.0, 100.0);
    }

    fn recognized(&mut self, field: &str, ok: bool) {
        if !ok {
            self.push(field, "is not one of the rubric values".to_string());
        }
    }
}

fn check_creator(index: usize, creator: &AnalysisResult, out: &mut Vec<SchemaViolation>) {
    let mut c = Checker {
        index,
        handle: &creator.handle,
        out,
    };

    if creator.handle.trim().is_empty() {
        c.push("handle", "is empty".to_string());
    }

    c.percentage("regions.primary.percentage", creator.regions.primary.percentage);
    for (i, region) in creator.regions.secondary.iter().enumerate() {
        c.percentage(&format!("regions.secondary[{i}].percentage"), region.percentage);
    }
    if let Some(states) = &creator.state_breakdown {
        for (i, share) in states.iter().enumerate() {
            c.percentage(&format!("stateBreakdown[{i}].percentage"), share.percentage);
        }
    }

    let kpi = &creator.kpi_analysis;
    for (name, metric) in [
        ("awareness", &kpi.awareness),
        ("engagement", &kpi.engagement),
        ("conversions", &kpi.conversions),
        ("roi", &kpi.roi),
    ] {
        c.range(&format!("kpiAnalysis.{name}.score"), metric.score, 1.0, 100.0);
        c.recognized(
            &format!("kpiAnalysis.{name}.category"),
            metric.category != KpiTier::Unrecognized,
        );
    }
    c.recognized(
        "kpiAnalysis.overallTier",
        kpi.overall_tier != KpiTier::Unrecognized,
    );

    let content = &creator.content_intelligence;
    c.recognized(
        "contentIntelligence.brandSafety",
        content.brand_safety != BrandSafety::Unrecognized,
    );
    c.recognized(
        "contentIntelligence.intent",
        content.intent != AudienceIntent::Unrecognized,
    );
    c.recognized(
        "reachEstimation.category",
        creator.reach_estimation.category != ReachCategory::Unrecognized,
    );

    let demo = &creator.demographics;
    for (i, group) in demo.age_groups.iter().enumerate() {
        c.percentage(&format!("demographics.ageGroups[{i}].percentage"), group.percentage);
    }
    c.percentage("demographics.genderSkew.male", demo.gender_skew.male);
    c.percentage("demographics.genderSkew.female", demo.gender_skew.female);
    c.percentage("demographics.genderSkew.other", demo.gender_skew.other);
    c.percentage("demographics.metroSplit.metro", demo.metro_split.metro);
    c.percentage("demographics.metroSplit.tier2_3", demo.metro_split.tier2_3);

    c.range("campaignFit.score", creator.campaign_fit.score, 0.0, 10.0);
}

/// Returns every range or vocabulary violation in `response`.
#[must_use]
pub fn check_response(response: &AnalysisResponse) -> Vec<SchemaViolation> {
    let mut out = Vec::new();
    for (index, creator) in response.creators.iter().enumerate() {
        check_creator(index, creator, &mut out);
    }
    out
}

/// Coverage of requested handles by the returned report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleReconciliation {
    /// Requested handles with no matching creator record.
    pub missing: Vec<String>,
    /// Returned creator handles that were never requested.
    pub unexpected: Vec<String>,
}

impl HandleReconciliation {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

fn handle_key(handle: &str) -> String {
    handle.trim().trim_start_matches('@').to_lowercase()
}

/// Compares `requested` handles with the creators in `response`.
///
/// Matching ignores case and a leading `@`. When nothing was requested (the
/// roster came only from attachments) every returned handle is expected.
#[must_use]
pub fn reconcile_handles(requested: &[String], response: &AnalysisResponse) -> HandleReconciliation {
    let returned: HashSet<String> = response
        .creators
        .iter()
        .map(|c| handle_key(&c.handle))
        .collect();

    let missing = requested
        .iter()
        .filter(|h| !returned.contains(&handle_key(h)))
        .cloned()
        .collect();

    let unexpected = if requested.is_empty() {
        Vec::new()
    } else {
        let wanted: HashSet<String> = requested.iter().map(|h| handle_key(h)).collect();
        response
            .creators
            .iter()
            .filter(|c| !wanted.contains(&handle_key(&c.handle)))
            .map(|c| c.handle.clone())
            .collect()
    };

    HandleReconciliation {
        missing,
        unexpected,
    }
}
