//! How the report's numbers are produced.

pub const METHODOLOGY: &str = "\
How the creator intelligence report is estimated

1. Roster Ingestion
   Handles, CSV and spreadsheet manifests, documents, and screenshots are
   combined into a baseline creator list.

2. Live Signal Validation
   Up to the configured cap, each handle is looked up on the social graph for
   verified follower counts, bios, and recent post captions.

3. Probabilistic Synthesis
   The model reads linguistic and cultural markers to estimate regional and
   state-level audience density.

4. KPI Benchmarking
   Engagement depth is cross-referenced against niche-specific ROI and
   conversion benchmarks across four pillars: Brand Awareness, Engagement,
   Conversions, and ROI & EMV.

Probabilistic vs. deterministic data
   Follower and post counts fetched from the social graph are deterministic
   (API-validated). Regions, demographics, tiers, and scores are
   probabilistic model output and are reported as estimates.

   - State Breakdown (20+ Points) when India is a primary or secondary region
   - Intent-Based Audience Scoring (Entertainment, Learning, Purchase, Inspiration)
";
