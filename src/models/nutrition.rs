//! Shared nutrition data structure
//!
//! Used across products, recipes, food log entries, and days.

use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};

/// Nutritional information, six fields.
///
/// Missing or `null` fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NutrientProfile {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub energy_kcal: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub proteins: f64, // grams
    #[serde(default, deserialize_with = "zero_if_null")]
    pub carbohydrates: f64, // grams
    #[serde(default, deserialize_with = "zero_if_null")]
    pub sugars: f64, // grams
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fats: f64, // grams
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fibers: f64, // grams
}

/// Deserialize an optional number, mapping an explicit `null` to 0
pub(crate) fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single field of a [`NutrientProfile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    EnergyKcal,
    Proteins,
    Carbohydrates,
    Sugars,
    Fats,
    Fibers,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::EnergyKcal,
        Nutrient::Proteins,
        Nutrient::Carbohydrates,
        Nutrient::Sugars,
        Nutrient::Fats,
        Nutrient::Fibers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::EnergyKcal => "energy_kcal",
            Nutrient::Proteins => "proteins",
            Nutrient::Carbohydrates => "carbohydrates",
            Nutrient::Sugars => "sugars",
            Nutrient::Fats => "fats",
            Nutrient::Fibers => "fibers",
        }
    }

    /// Decimal places used when the value is shown: whole kcal, tenths of a gram
    pub fn display_precision(&self) -> u32 {
        match self {
            Nutrient::EnergyKcal => 0,
            _ => 1,
        }
    }
}

impl NutrientProfile {
    /// Create a new profile with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::EnergyKcal => self.energy_kcal,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Sugars => self.sugars,
            Nutrient::Fats => self.fats,
            Nutrient::Fibers => self.fibers,
        }
    }

    /// Apply `f` to every field
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            energy_kcal: f(self.energy_kcal),
            proteins: f(self.proteins),
            carbohydrates: f(self.carbohydrates),
            sugars: f(self.sugars),
            fats: f(self.fats),
            fibers: f(self.fibers),
        }
    }

    /// Scale every field by a multiplier.
    ///
    /// The factor is not validated; NaN and infinities propagate.
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// Divide every field by `divisor` (IEEE-754, so 0 yields non-finite fields)
    pub fn divide(&self, divisor: f64) -> Self {
        self.map(|v| v / divisor)
    }

    /// Add another profile to this one
    pub fn add(&self, other: &NutrientProfile) -> Self {
        Self {
            energy_kcal: self.energy_kcal + other.energy_kcal,
            proteins: self.proteins + other.proteins,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            sugars: self.sugars + other.sugars,
            fats: self.fats + other.fats,
            fibers: self.fibers + other.fibers,
        }
    }

    pub fn is_finite(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n).is_finite())
    }

    /// Round every field to `decimals` places. Display only.
    pub fn rounded(&self, decimals: u32) -> Self {
        self.map(|v| round_to(v, decimals))
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientProfile {
    type Output = NutrientProfile;

    fn mul(self, factor: f64) -> NutrientProfile {
        self.scale(factor)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NutrientProfile {
        NutrientProfile {
            energy_kcal: 200.0,
            proteins: 10.0,
            carbohydrates: 20.0,
            sugars: 5.0,
            fats: 8.0,
            fibers: 2.0,
        }
    }

    #[test]
    fn test_scale_and_add() {
        let half = sample().scale(0.5);
        assert_eq!(half.energy_kcal, 100.0);
        assert_eq!(half.sugars, 2.5);

        let total = half + half;
        assert_eq!(total, sample());
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: NutrientProfile = Vec::<NutrientProfile>::new().into_iter().sum();
        assert_eq!(total, NutrientProfile::zero());
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        let p = sample().divide(0.0);
        assert!(p.energy_kcal.is_infinite());
        assert!(!p.is_finite());

        let z = NutrientProfile::zero().divide(0.0);
        assert!(z.proteins.is_nan());
    }

    #[test]
    fn test_missing_and_null_fields_default_to_zero() {
        let p: NutrientProfile =
            serde_json::from_value(serde_json::json!({ "energy_kcal": 90, "fats": null })).unwrap();
        assert_eq!(p.energy_kcal, 90.0);
        assert_eq!(p.fats, 0.0);
        assert_eq!(p.fibers, 0.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(2.449, 1), 2.4);
        assert_eq!(round_to(2.45001, 1), 2.5);
        assert_eq!(round_to(99.5, 0), 100.0);
        assert_eq!(sample().scale(1.0 / 3.0).rounded(1).proteins, 3.3);
    }

    #[test]
    fn test_get_by_nutrient() {
        let p = sample();
        assert_eq!(p.get(Nutrient::Carbohydrates), 20.0);
        assert_eq!(Nutrient::EnergyKcal.display_precision(), 0);
        assert_eq!(Nutrient::Fibers.display_precision(), 1);
        assert_eq!(Nutrient::Sugars.as_str(), "sugars");
    }
}
