use crate::models::{AgeGroup, BodyType, KidsSize, MeasurementProfile, SizeBand, SizeClassification};

/// Infer the body type from torso/hip proportions
///
/// Rule order matters; the first matching rule wins:
/// 1. hips - waist > 16        -> Curvy / Pear
/// 2. |chest - hips| <= 4      -> Balanced / Rectangle
/// 3. chest - hips > 8         -> Inverted Triangle
/// 4. otherwise                -> Classic / Regular
#[inline]
pub fn infer_body_type(m: &MeasurementProfile) -> BodyType {
    let hip_waist = m.hip_waist_delta();
    let chest_hip = m.chest_hip_delta();

    if hip_waist > 16 {
        BodyType::CurvyPear
    } else if chest_hip.abs() <= 4 {
        BodyType::BalancedRectangle
    } else if chest_hip > 8 {
        BodyType::InvertedTriangle
    } else {
        BodyType::ClassicRegular
    }
}

/// Map a size metric to its band
///
/// All thresholds are strict `<` on the upper bound; a boundary value
/// belongs to the next-higher band (84.00 is S, not XS).
#[inline]
pub fn size_band_for(metric: f64) -> SizeBand {
    if metric < 84.0 {
        SizeBand::Xs
    } else if metric < 92.0 {
        SizeBand::S
    } else if metric < 100.0 {
        SizeBand::M
    } else if metric < 108.0 {
        SizeBand::L
    } else {
        SizeBand::Xl
    }
}

/// Top size from the chest/shoulder average
#[inline]
pub fn estimate_top_size(m: &MeasurementProfile) -> SizeBand {
    size_band_for((m.chest_cm as f64 + m.shoulder_cm as f64) / 2.0)
}

/// Bottom size from the waist/hips average
#[inline]
pub fn estimate_bottom_size(m: &MeasurementProfile) -> SizeBand {
    size_band_for((m.waist_cm as f64 + m.hips_cm as f64) / 2.0)
}

/// Kids size band by height, with coarse bridge labels on the adult side
#[inline]
pub fn estimate_kids_size(height_cm: u16, age_group: AgeGroup) -> KidsSize {
    match age_group {
        AgeGroup::Adult => {
            if height_cm < 160 {
                KidsSize::TeenPetite
            } else {
                KidsSize::AdultRange
            }
        }
        AgeGroup::Kids => {
            if height_cm < 95 {
                KidsSize::Toddler
            } else if height_cm < 111 {
                KidsSize::KidsS
            } else if height_cm < 131 {
                KidsSize::KidsM
            } else if height_cm < 151 {
                KidsSize::KidsL
            } else {
                KidsSize::TeenBridge
            }
        }
    }
}

/// Run all classifiers over a profile
pub fn classify(m: &MeasurementProfile) -> (BodyType, SizeClassification) {
    let body_type = infer_body_type(m);
    let kids_band = match m.age_group {
        AgeGroup::Kids => Some(estimate_kids_size(m.height_cm, AgeGroup::Kids)),
        AgeGroup::Adult => None,
    };

    let sizes = SizeClassification {
        top: estimate_top_size(m),
        bottom: estimate_bottom_size(m),
        kids_band,
    };

    (body_type, sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitPreference;

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

    #[test]
    fn test_curvy_requires_strictly_more_than_16() {
        // hip_waist exactly 16 falls through to the next rules
        let at_boundary = profile(100, 74, 90, 40);
        assert_eq!(at_boundary.hip_waist_delta(), 16);
        assert_ne!(infer_body_type(&at_boundary), BodyType::CurvyPear);

        let over_boundary = profile(100, 73, 90, 40);
        assert_eq!(over_boundary.hip_waist_delta(), 17);
        assert_eq!(infer_body_type(&over_boundary), BodyType::CurvyPear);
    }

    #[test]
    fn test_balanced_rectangle_band() {
        // |chest - hips| <= 4 in both directions
        assert_eq!(infer_body_type(&profile(94, 80, 90, 40)), BodyType::BalancedRectangle);
        assert_eq!(infer_body_type(&profile(90, 80, 94, 40)), BodyType::BalancedRectangle);
        assert_eq!(infer_body_type(&profile(90, 80, 90, 40)), BodyType::BalancedRectangle);
    }

    #[test]
    fn test_inverted_triangle() {
        let broad = profile(100, 80, 90, 44);
        assert_eq!(broad.chest_hip_delta(), 10);
        assert_eq!(infer_body_type(&broad), BodyType::InvertedTriangle);
    }

    #[test]
    fn test_classic_fallthrough() {
        // chest_hip in (4, 8]: neither balanced nor inverted
        let middle = profile(96, 80, 90, 40);
        assert_eq!(middle.chest_hip_delta(), 6);
        assert_eq!(infer_body_type(&middle), BodyType::ClassicRegular);

        // Negative delta beyond the balanced band, hips not pear-wide
        let slight_pear = profile(84, 80, 90, 40);
        assert_eq!(infer_body_type(&slight_pear), BodyType::ClassicRegular);
    }

    #[test]
    fn test_body_type_totality() {
        for chest in (70..=120).step_by(2) {
            for waist in (55..=100).step_by(3) {
                for hips in (70..=120).step_by(2) {
                    let m = profile(chest, waist, hips, 40);
                    // Must classify without panicking; result is one of four
                    let _ = infer_body_type(&m);
                }
            }
        }
    }

    #[test]
    fn test_size_band_boundaries() {
        assert_eq!(size_band_for(83.99), SizeBand::Xs);
        assert_eq!(size_band_for(84.00), SizeBand::S);
        assert_eq!(size_band_for(91.99), SizeBand::S);
        assert_eq!(size_band_for(92.00), SizeBand::M);
        assert_eq!(size_band_for(99.99), SizeBand::M);
        assert_eq!(size_band_for(100.00), SizeBand::L);
        assert_eq!(size_band_for(107.99), SizeBand::L);
        assert_eq!(size_band_for(108.00), SizeBand::Xl);
    }

    #[test]
    fn test_top_and_bottom_metrics() {
        let m = profile(92, 70, 90, 40);
        // top metric (92 + 40) / 2 = 66 -> XS
        assert_eq!(estimate_top_size(&m), SizeBand::Xs);
        // bottom metric (70 + 90) / 2 = 80 -> XS
        assert_eq!(estimate_bottom_size(&m), SizeBand::Xs);

        let large = profile(120, 100, 116, 96);
        // top metric 108 -> XL, bottom metric 108 -> XL
        assert_eq!(estimate_top_size(&large), SizeBand::Xl);
        assert_eq!(estimate_bottom_size(&large), SizeBand::Xl);
    }

    #[test]
    fn test_kids_size_bands() {
        assert_eq!(estimate_kids_size(94, AgeGroup::Kids), KidsSize::Toddler);
        assert_eq!(estimate_kids_size(95, AgeGroup::Kids), KidsSize::KidsS);
        assert_eq!(estimate_kids_size(110, AgeGroup::Kids), KidsSize::KidsS);
        assert_eq!(estimate_kids_size(111, AgeGroup::Kids), KidsSize::KidsM);
        assert_eq!(estimate_kids_size(130, AgeGroup::Kids), KidsSize::KidsM);
        assert_eq!(estimate_kids_size(131, AgeGroup::Kids), KidsSize::KidsL);
        assert_eq!(estimate_kids_size(150, AgeGroup::Kids), KidsSize::KidsL);
        assert_eq!(estimate_kids_size(151, AgeGroup::Kids), KidsSize::TeenBridge);
    }

    #[test]
    fn test_adult_bridge_labels() {
        assert_eq!(estimate_kids_size(159, AgeGroup::Adult), KidsSize::TeenPetite);
        assert_eq!(estimate_kids_size(160, AgeGroup::Adult), KidsSize::AdultRange);
    }

    #[test]
    fn test_classify_sets_kids_band_only_for_kids() {
        let adult = profile(92, 74, 96, 41);
        let (_, sizes) = classify(&adult);
        assert!(sizes.kids_band.is_none());

        let mut kid = profile(78, 66, 84, 36);
        kid.height_cm = 152;
        kid.age_group = AgeGroup::Kids;
        let (_, sizes) = classify(&kid);
        assert_eq!(sizes.kids_band, Some(KidsSize::TeenBridge));
    }
}
