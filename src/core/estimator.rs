use crate::core::{
    catalog::generate_outfits,
    sizing::classify,
    synthesis::{synthesize, SynthesisMode, UniformSource},
};
use crate::models::AnalysisReport;

/// Main estimation orchestrator - runs the three-stage pipeline
///
/// # Pipeline Stages
/// 1. Measurement synthesis (sample fixture or random draw)
/// 2. Body type and size classification
/// 3. Outfit catalog generation
///
/// Every stage is a pure function of its input; the only caller-supplied
/// state is the uniform random source.
#[derive(Debug, Clone, Default)]
pub struct Estimator;

impl Estimator {
    pub fn new() -> Self {
        Self
    }

    /// Run one complete analysis, producing a fresh report
    ///
    /// The returned report replaces any previous one wholesale; nothing in
    /// it is shared with prior runs.
    pub fn analyze(&self, mode: SynthesisMode, rng: &mut dyn UniformSource) -> AnalysisReport {
        let profile = synthesize(mode, rng);
        let (body_type, sizes) = classify(&profile);
        let outfits = generate_outfits(
            body_type,
            sizes.top,
            sizes.bottom,
            profile.fit_preference,
            profile.age_group,
        );

        AnalysisReport {
            analysis_id: uuid::Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            profile,
            body_type,
            sizes,
            outfits,
        }
    }
}
