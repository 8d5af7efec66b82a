//! Pure metabolic math: Mifflin-St Jeor BMR, TDEE, and the weight-loss
//! projection derived from the configured daily calorie target.

use crate::config::{Sex, UserProfile};

pub const LBS_PER_KG: f64 = 2.20462;

/// Approximate energy content of one kilogram of body fat.
const KCAL_PER_KG_FAT: f64 = 7700.0;

pub fn bmr(profile: &UserProfile, weight_kg: f64) -> f64 {
    let sex_term = match profile.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age) + sex_term
}

pub fn tdee(profile: &UserProfile, bmr: f64) -> f64 {
    bmr * profile.activity_multiplier
}

/// Projected (weekly, monthly) loss in lbs at the given current weight.
/// A calorie surplus relative to the target comes out negative, i.e. a
/// projected gain; callers must not clamp the sign.
pub fn project_loss(profile: &UserProfile, current_weight_kg: f64) -> (f64, f64) {
    let daily_deficit = tdee(profile, bmr(profile, current_weight_kg)) - profile.daily_calories;
    let weekly_kg = daily_deficit * 7.0 / KCAL_PER_KG_FAT;
    let weekly_lbs = weekly_kg * LBS_PER_KG;
    (weekly_lbs, weekly_lbs * 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(sex: Sex, daily_calories: f64) -> UserProfile {
        UserProfile {
            age: 26,
            height_cm: 180.0,
            sex,
            activity_multiplier: 1.2,
            daily_calories,
            start_weight_kg: 127.0,
        }
    }

    #[test]
    fn bmr_matches_mifflin_st_jeor_for_males() {
        // 127 lbs converted back to kg: 10*57.6 + 6.25*180 - 5*26 + 5.
        let weight_kg = 127.0 * 0.453592;
        let value = bmr(&profile(Sex::Male, 1500.0), weight_kg);
        assert!((value - 1576.1).abs() < 0.1, "got {value}");
    }

    #[test]
    fn bmr_female_term_is_minus_161() {
        let male = bmr(&profile(Sex::Male, 1500.0), 80.0);
        let female = bmr(&profile(Sex::Female, 1500.0), 80.0);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn tdee_scales_bmr_by_activity() {
        let p = profile(Sex::Male, 1500.0);
        assert!((tdee(&p, 2000.0) - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn deficit_projects_positive_loss_and_monthly_is_four_weeks() {
        let p = profile(Sex::Male, 1500.0);
        let (weekly, monthly) = project_loss(&p, 100.0);
        assert!(weekly > 0.0);
        assert!((monthly - weekly * 4.0).abs() < 1e-9);
    }

    #[test]
    fn surplus_projects_negative_loss() {
        let p = profile(Sex::Male, 10_000.0);
        let (weekly, monthly) = project_loss(&p, 60.0);
        assert!(weekly < 0.0);
        assert!(monthly < 0.0);
    }
}
