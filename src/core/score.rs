use crate::core::error::ValidationError;
use crate::core::survey::{Field, SurveyRecord};

/// Normalized unhealthiness of a single answer: 0.0 for the healthiest
/// response, 1.0 for the worst, linear in between. Normalizing before
/// averaging lets the 5-point tooth brushing scale weigh the same as the
/// 7-point scales.
pub fn risk_contribution(record: &SurveyRecord, field: Field) -> Result<f64, ValidationError> {
    let value = record.value_of(field);
    let max = field.scale_max();
    if !(1..=max).contains(&value) {
        return Err(ValidationError::OutOfRange { field, value, max });
    }

    Ok(f64::from(value - 1) / f64::from(max - 1))
}

/// Lifestyle risk score in 0–100. 0 = very healthy habits, 100 = very
/// unhealthy habits.
///
/// Equal-weight mean of the eight normalized contributions, scaled to 100
/// and rounded half-up. Fails without scoring anything when any field is
/// out of its declared range.
pub fn compute_risk_score(record: &SurveyRecord) -> Result<u8, ValidationError> {
    let mut total = 0.0;
    for field in Field::ALL {
        total += risk_contribution(record, field)?;
    }

    let base_score = total / Field::ALL.len() as f64;
    // round() ties away from zero, which is round-half-up for non-negative input
    Ok((base_score * 100.0).round() as u8)
}

pub fn band_for_score(score: u8) -> &'static str {
    match score {
        0..=24 => "Low risk",
        25..=49 => "Moderate risk",
        50..=74 => "Elevated risk",
        _ => "High risk",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: [u8; 8]) -> SurveyRecord {
        SurveyRecord {
            sex: None,
            age: None,
            soft_drinks: values[0],
            sweets: values[1],
            vegetables: values[2],
            physical_activity: values[3],
            breakfast_weekdays: values[4],
            tooth_brushing: values[5],
            feel_low: values[6],
            talk_father: values[7],
        }
    }

    fn record_with(field: Field, value: u8) -> SurveyRecord {
        let mut values = [1; 8];
        let index = Field::ALL.iter().position(|&f| f == field).unwrap();
        values[index] = value;
        record(values)
    }

    #[test]
    fn all_healthiest_scores_zero() {
        let all_min = record([1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(compute_risk_score(&all_min), Ok(0));
    }

    #[test]
    fn all_worst_scores_hundred() {
        let all_max = record([7, 7, 7, 7, 7, 5, 7, 7]);
        assert_eq!(compute_risk_score(&all_max), Ok(100));
    }

    #[test]
    fn midpoint_everywhere_scores_fifty() {
        // 4 on a 1–7 scale and 3 on a 1–5 scale both contribute exactly 0.5
        let midpoints = record([4, 4, 4, 4, 4, 3, 4, 4]);
        assert_eq!(compute_risk_score(&midpoints), Ok(50));
    }

    #[test]
    fn single_worst_answer_rounds_half_up() {
        // one contribution of 1.0 over eight fields: 12.5 rounds up to 13
        let one_bad = record_with(Field::SoftDrinks, 7);
        assert_eq!(compute_risk_score(&one_bad), Ok(13));
    }

    #[test]
    fn raising_any_field_never_lowers_the_score() {
        for field in Field::ALL {
            let mut previous = 0;
            for value in 1..=field.scale_max() {
                let score = compute_risk_score(&record_with(field, value)).unwrap();
                assert!(
                    score >= previous,
                    "{field} at {value} dropped the score from {previous} to {score}"
                );
                previous = score;
            }
        }
    }

    #[test]
    fn five_point_scale_counts_as_much_as_seven_point() {
        let worst_teeth = compute_risk_score(&record_with(Field::ToothBrushing, 5)).unwrap();
        let worst_sweets = compute_risk_score(&record_with(Field::Sweets, 7)).unwrap();
        assert_eq!(worst_teeth, worst_sweets);
    }

    #[test]
    fn rejects_tooth_brushing_above_its_scale() {
        let out_of_range = record_with(Field::ToothBrushing, 6);
        assert_eq!(
            compute_risk_score(&out_of_range),
            Err(ValidationError::OutOfRange {
                field: Field::ToothBrushing,
                value: 6,
                max: 5,
            })
        );
    }

    #[test]
    fn rejects_zero_values() {
        let out_of_range = record_with(Field::FeelLow, 0);
        assert_eq!(
            compute_risk_score(&out_of_range),
            Err(ValidationError::OutOfRange {
                field: Field::FeelLow,
                value: 0,
                max: 7,
            })
        );
    }

    #[test]
    fn scores_stay_inside_the_scale_for_valid_records() {
        for seven_scale in 1..=7 {
            for five_scale in 1..=5 {
                let mixed = record([
                    seven_scale,
                    1,
                    7,
                    seven_scale,
                    4,
                    five_scale,
                    seven_scale,
                    2,
                ]);
                let score = compute_risk_score(&mixed).unwrap();
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn score_bands_cover_the_whole_range() {
        assert_eq!(band_for_score(0), "Low risk");
        assert_eq!(band_for_score(24), "Low risk");
        assert_eq!(band_for_score(25), "Moderate risk");
        assert_eq!(band_for_score(50), "Elevated risk");
        assert_eq!(band_for_score(75), "High risk");
        assert_eq!(band_for_score(100), "High risk");
    }
}
