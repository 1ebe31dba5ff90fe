// Unit tests for FitAI Algo

use fitai_algo::core::{
    catalog::{filter_outfits, generate_outfits},
    sizing::{estimate_kids_size, infer_body_type, size_band_for},
    synthesis::{clipped_gaussian, sample_profile, synthesize, SynthesisMode, UniformSource},
};
use fitai_algo::models::{
    AgeGroup, BodyType, FitPreference, KidsSize, MeasurementProfile, Occasion, OutfitFilter,
    SizeBand,
};

fn profile(chest: u16, waist: u16, hips: u16, shoulder: u16) -> MeasurementProfile {
    MeasurementProfile {
        height_cm: 170,
        chest_cm: chest,
        waist_cm: waist,
        hips_cm: hips,
        shoulder_cm: shoulder,
        inseam_cm: 76,
        fit_preference: FitPreference::Tailored,
        age_group: AgeGroup::Adult,
    }
}

/// Scripted uniform source for exact synthesizer checks
struct Sequence {
    values: Vec<f64>,
    next: usize,
}

impl Sequence {
    fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl UniformSource for Sequence {
    fn draw(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[test]
fn test_body_type_first_match_precedence() {
    // Wide hips win even when the chest/hip delta would also match a rule
    let pear = profile(100, 70, 96, 40);
    assert_eq!(pear.hip_waist_delta(), 26);
    assert_eq!(infer_body_type(&pear), BodyType::CurvyPear);

    // Balanced beats inverted when both deltas are small
    let balanced = profile(92, 80, 90, 40);
    assert_eq!(infer_body_type(&balanced), BodyType::BalancedRectangle);
}

#[test]
fn test_body_type_curvy_boundary() {
    let at_16 = profile(110, 74, 90, 40);
    assert_eq!(at_16.hip_waist_delta(), 16);
    assert_ne!(infer_body_type(&at_16), BodyType::CurvyPear);

    let at_17 = profile(110, 73, 90, 40);
    assert_eq!(at_17.hip_waist_delta(), 17);
    assert_eq!(infer_body_type(&at_17), BodyType::CurvyPear);
}

#[test]
fn test_size_band_strict_thresholds() {
    assert_eq!(size_band_for(83.99), SizeBand::Xs);
    assert_eq!(size_band_for(84.00), SizeBand::S);
    assert_eq!(size_band_for(91.99), SizeBand::S);
    assert_eq!(size_band_for(92.00), SizeBand::M);
}

#[test]
fn test_kids_band_edges() {
    assert_eq!(estimate_kids_size(94, AgeGroup::Kids), KidsSize::Toddler);
    assert_eq!(estimate_kids_size(95, AgeGroup::Kids), KidsSize::KidsS);
    assert_eq!(estimate_kids_size(131, AgeGroup::Kids), KidsSize::KidsL);
    assert_eq!(estimate_kids_size(151, AgeGroup::Kids), KidsSize::TeenBridge);
    assert_eq!(estimate_kids_size(159, AgeGroup::Adult), KidsSize::TeenPetite);
    assert_eq!(estimate_kids_size(160, AgeGroup::Adult), KidsSize::AdultRange);
}

#[test]
fn test_sample_profile_constants() {
    let fixture = sample_profile();
    assert_eq!(
        (
            fixture.height_cm,
            fixture.chest_cm,
            fixture.waist_cm,
            fixture.hips_cm,
            fixture.shoulder_cm,
            fixture.inseam_cm,
        ),
        (152, 78, 66, 84, 36, 68)
    );
    assert_eq!(fixture.fit_preference, FitPreference::Tailored);
    assert_eq!(fixture.age_group, AgeGroup::Kids);
}

#[test]
fn test_sample_mode_ignores_rng_state() {
    // A source that would explode if its draws mattered
    let mut hostile = Sequence::new(vec![0.0]);

    for _ in 0..3 {
        assert_eq!(synthesize(SynthesisMode::Sample, &mut hostile), sample_profile());
    }
    // No draws were consumed
    assert_eq!(hostile.next, 0);
}

#[test]
fn test_box_muller_scripted_sequence() {
    // u1 = e^-8, u2 = 0: sqrt(16) * cos(0) = 4, rescaled to 1.6
    let mut seq = Sequence::new(vec![(-8.0f64).exp(), 0.0]);
    let g = clipped_gaussian(&mut seq);
    assert!((g - 1.6).abs() < 1e-12);
}

#[test]
fn test_generate_outfits_curvy_reference_case() {
    let outfits = generate_outfits(
        BodyType::CurvyPear,
        SizeBand::M,
        SizeBand::M,
        FitPreference::Relaxed,
        AgeGroup::Adult,
    );

    assert_eq!(outfits.len(), 5);

    let occasions: Vec<Occasion> = outfits.iter().map(|o| o.occasion).collect();
    assert_eq!(
        occasions,
        vec![
            Occasion::Work,
            Occasion::Evening,
            Occasion::Weekend,
            Occasion::Event,
            Occasion::Event,
        ]
    );

    // Every entry that consults the curvy flag picked the curvy branch
    assert!(outfits[0].good.contains("High-waist"));
    assert!(outfits[1].good.contains("v-necklines"));
    assert!(outfits[3].good.contains("Wrap or A-line"));
}

#[test]
fn test_filter_weekend_reference_case() {
    let outfits = generate_outfits(
        BodyType::CurvyPear,
        SizeBand::M,
        SizeBand::M,
        FitPreference::Relaxed,
        AgeGroup::Adult,
    );

    let visible = filter_outfits(&outfits, OutfitFilter::Occasion(Occasion::Weekend));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].occasion, Occasion::Weekend);

    let all = filter_outfits(&outfits, OutfitFilter::All);
    assert_eq!(all.len(), 5);
}
