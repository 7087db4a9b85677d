//! Full per-creator report with text bar charts.

use std::fmt;

use cintel_core::AnalysisResult;

const BAR_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 28;

/// Renders `percentage` (0-100, clamped) as a fixed-width bar.
#[must_use]
pub fn bar(percentage: f64) -> String {
    let clamped = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_WIDTH - filled)
    )
}

fn bar_line(f: &mut fmt::Formatter<'_>, label: &str, percentage: f64) -> fmt::Result {
    writeln!(
        f,
        "  {label:<LABEL_WIDTH$} {} {percentage:>5}%",
        bar(percentage)
    )
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.len()))
}

/// Detail view for one creator. Rendering uses only the record itself.
pub struct DetailView<'a>(pub &'a AnalysisResult);

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        let content = &c.content_intelligence;
        let demo = &c.demographics;

        writeln!(
            f,
            "{}  [OVERALL: {}]  inferred dataset",
            c.handle,
            c.kpi_analysis.overall_tier.to_string().to_uppercase()
        )?;
        writeln!(f, "{}", c.brand_summary)?;

        heading(f, "Performance KPI Verification")?;
        for (label, metric) in c.kpi_analysis.pillars() {
            writeln!(
                f,
                "  {label:<16} {:>5}/100  {:<10}  {}",
                metric.score, metric.category, metric.insight
            )?;
        }

        heading(f, "Regional Split")?;
        bar_line(f, &c.regions.primary.name, c.regions.primary.percentage)?;
        for region in &c.regions.secondary {
            bar_line(f, &region.name, region.percentage)?;
        }

        heading(f, "State Breakdown")?;
        match c.state_breakdown.as_deref() {
            Some(states) if !states.is_empty() => {
                for share in states {
                    bar_line(f, &share.state, share.percentage)?;
                }
            }
            _ => writeln!(f, "  State-level data not applicable or detected.")?,
        }

        heading(f, "Demographics")?;
        for group in &demo.age_groups {
            bar_line(f, &group.range, group.percentage)?;
        }
        writeln!(
            f,
            "  Gender skew: male {}% / female {}% / other {}%",
            demo.gender_skew.male, demo.gender_skew.female, demo.gender_skew.other
        )?;
        bar_line(f, "Metro", demo.metro_split.metro)?;
        bar_line(f, "Tier 2/3", demo.metro_split.tier2_3)?;
        writeln!(f, "  {}", demo.reasoning)?;

        heading(f, "Content Intelligence")?;
        writeln!(
            f,
            "  Niche: {} / {}",
            content.primary_niche, content.secondary_niche
        )?;
        writeln!(f, "  Dominant format: {}", content.dominant_format)?;
        writeln!(f, "  Brand safety: {}", content.brand_safety)?;
        writeln!(f, "  Audience intent: {}", content.intent)?;
        writeln!(f, "  {}", content.audience_intent_details)?;

        heading(f, "Reach")?;
        writeln!(f, "  {}: {}", c.reach_estimation.category, c.reach_estimation.reasoning)?;

        heading(f, "Campaign Fit")?;
        writeln!(f, "  Score: {}/10", c.campaign_fit.score)?;
        if !c.campaign_fit.recommended_categories.is_empty() {
            writeln!(
                f,
                "  Recommended: {}",
                c.campaign_fit.recommended_categories.join(", ")
            )?;
        }
        if c.campaign_fit.risk_flags.is_empty() {
            writeln!(f, "  No significant risks detected.")
        } else {
            for flag in &c.campaign_fit.risk_flags {
                writeln!(f, "  ! {flag}")?;
            }
            Ok(())
        }
    }
}

/// Finds a creator by handle, ignoring case and a leading `@`.
#[must_use]
pub fn find_creator<'a>(creators: &'a [AnalysisResult], handle: &str) -> Option<&'a AnalysisResult> {
    let key = handle.trim().trim_start_matches('@');
    creators
        .iter()
        .find(|c| c.handle.trim_start_matches('@').eq_ignore_ascii_case(key))
}
