use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::{AgeGroup, FitPreference, MeasurementProfile};

/// Source of uniform draws in [0, 1)
///
/// The synthesizer only ever consumes uniform samples through this seam,
/// so tests can script exact sequences and verify the derived math.
pub trait UniformSource {
    fn draw(&mut self) -> f64;
}

/// Production uniform source backed by rand's StdRng
pub struct StdUniform {
    rng: StdRng,
}

impl StdUniform {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for StdUniform {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// How a profile should be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisMode {
    /// Deterministic fixture profile, used for demos and regression tests
    Sample,
    /// Random draw for the given age group
    Random { age_group: AgeGroup },
}

/// The constant fixture returned in sample mode
pub fn sample_profile() -> MeasurementProfile {
    MeasurementProfile {
        height_cm: 152,
        chest_cm: 78,
        waist_cm: 66,
        hips_cm: 84,
        shoulder_cm: 36,
        inseam_cm: 68,
        fit_preference: FitPreference::Tailored,
        age_group: AgeGroup::Kids,
    }
}

/// Clipped standard-normal sample
///
/// Box-Muller transform, rescaled by 1/2.5 and clamped to [-3, 3].
/// Consumes exactly two uniform draws.
pub fn clipped_gaussian(rng: &mut dyn UniformSource) -> f64 {
    // Guard u1 away from zero so ln() stays finite
    let u1 = rng.draw().max(f64::MIN_POSITIVE);
    let u2 = rng.draw();
    let standard = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    (standard / 2.5).clamp(-3.0, 3.0)
}

/// Produce a measurement profile
///
/// Sample mode ignores the random source entirely and returns the exact
/// fixture. Random mode draws a normal-ish adult profile; waist is derived
/// from chest and hips from waist, so the three always stay ordered
/// waist < chest and waist < hips. Total function, no failure modes.
pub fn synthesize(mode: SynthesisMode, rng: &mut dyn UniformSource) -> MeasurementProfile {
    let age_group = match mode {
        SynthesisMode::Sample => return sample_profile(),
        SynthesisMode::Random { age_group } => age_group,
    };

    let height_cm = offset(166, clipped_gaussian(rng) * 6.0);
    let chest_cm = offset(88, clipped_gaussian(rng) * 6.0);
    let waist_cm = chest_cm - (6 + (rng.draw() * 6.0).round() as u16);
    let hips_cm = waist_cm + (6 + (rng.draw() * 8.0).round() as u16);
    let shoulder_cm = offset(40, clipped_gaussian(rng) * 3.0);
    let inseam_cm = (height_cm as f64 * 0.45 + (rng.draw() * 4.0 - 2.0)).round() as u16;
    let fit_preference = if rng.draw() < 0.5 {
        FitPreference::Tailored
    } else {
        FitPreference::Relaxed
    };

    MeasurementProfile {
        height_cm,
        chest_cm,
        waist_cm,
        hips_cm,
        shoulder_cm,
        inseam_cm,
        fit_preference,
        age_group,
    }
}

/// Apply a rounded signed offset to a positive base measurement
#[inline]
fn offset(base: i32, delta: f64) -> u16 {
    (base + delta.round() as i32).max(1) as u16
}
