use std::collections::BTreeMap;
use std::fmt;

use crate::error::CalculatorError;

/// Identity tag for the three plan designs.
///
/// Logic that depends on which plan is being evaluated (the flat maternity
/// amounts) keys on this tag, never on the editable display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanId {
    Hdhp3300,
    Pos250,
    Pos500,
}

impl PlanId {
    /// Flat maternity amount added when a scenario plans for pregnancy,
    /// taken from each design's SBC childbirth coverage example.
    pub fn maternity_flat_cost(self) -> f64 {
        match self {
            PlanId::Hdhp3300 => 3860.0,
            PlanId::Pos250 => 320.0,
            PlanId::Pos500 => 760.0,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanId::Hdhp3300 => "HDHP 3300",
            PlanId::Pos250 => "POS 250",
            PlanId::Pos500 => "POS 500",
        };
        write!(f, "{name}")
    }
}

/// Cost-sharing parameters for one plan design.
///
/// All monetary fields are whole-dollar amounts; `specialty_drug_coinsurance`
/// is a fraction of the assumed underlying drug cost. Field presence is
/// enforced by the type system, so `validate` only has to check ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanParameters {
    pub id: PlanId,
    pub name: String,
    pub deductible_individual: f64,
    pub deductible_family: f64,
    pub oop_max_individual: f64,
    pub oop_max_family: f64,
    pub primary_care_copay: f64,
    pub specialist_copay: f64,
    pub emergency_room_copay: f64,
    pub urgent_care_copay: f64,
    pub hospital_copay: f64,
    pub mental_health_office_copay: f64,
    pub outpatient_surgery_copay: f64,
    pub generic_drug_copay: f64,
    pub preferred_brand_drug_copay: f64,
    pub non_preferred_brand_drug_copay: f64,
    pub specialty_drug_coinsurance: f64,
    pub specialty_drug_max_copay: f64,
}

impl PlanParameters {
    /// Reject malformed plan records before any cost arithmetic runs:
    /// every parameter must be finite and non-negative, and family limits
    /// must not fall below the individual limits of the same category.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        let fields = [
            ("deductible_individual", self.deductible_individual),
            ("deductible_family", self.deductible_family),
            ("oop_max_individual", self.oop_max_individual),
            ("oop_max_family", self.oop_max_family),
            ("primary_care_copay", self.primary_care_copay),
            ("specialist_copay", self.specialist_copay),
            ("emergency_room_copay", self.emergency_room_copay),
            ("urgent_care_copay", self.urgent_care_copay),
            ("hospital_copay", self.hospital_copay),
            ("mental_health_office_copay", self.mental_health_office_copay),
            ("outpatient_surgery_copay", self.outpatient_surgery_copay),
            ("generic_drug_copay", self.generic_drug_copay),
            ("preferred_brand_drug_copay", self.preferred_brand_drug_copay),
            ("non_preferred_brand_drug_copay", self.non_preferred_brand_drug_copay),
            ("specialty_drug_coinsurance", self.specialty_drug_coinsurance),
            ("specialty_drug_max_copay", self.specialty_drug_max_copay),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CalculatorError::InvalidPlanData(format!(
                    "{}: {field} must be non-negative and finite, got {value}",
                    self.name
                )));
            }
        }

        if self.deductible_family < self.deductible_individual {
            return Err(CalculatorError::InvalidPlanData(format!(
                "{}: family deductible {} is below the individual deductible {}",
                self.name, self.deductible_family, self.deductible_individual
            )));
        }
        if self.oop_max_family < self.oop_max_individual {
            return Err(CalculatorError::InvalidPlanData(format!(
                "{}: family out-of-pocket max {} is below the individual max {}",
                self.name, self.oop_max_family, self.oop_max_individual
            )));
        }

        Ok(())
    }
}

/// The fixed three-plan catalog, keyed by plan key and iterated in key order.
///
/// Constructed once with `builtin` and passed by reference; there are no
/// mutation operations.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: BTreeMap<String, PlanParameters>,
}

impl PlanCatalog {
    /// The compiled-in catalog of the three offered designs.
    pub fn builtin() -> Self {
        let mut plans = BTreeMap::new();
        plans.insert(
            "3300".to_string(),
            PlanParameters {
                id: PlanId::Hdhp3300,
                name: "HDHP 3300".to_string(),
                deductible_individual: 3300.0,
                deductible_family: 6600.0,
                oop_max_individual: 5500.0,
                oop_max_family: 11000.0,
                primary_care_copay: 30.0,
                specialist_copay: 60.0,
                emergency_room_copay: 350.0,
                urgent_care_copay: 85.0,
                hospital_copay: 500.0,
                mental_health_office_copay: 60.0,
                outpatient_surgery_copay: 300.0,
                generic_drug_copay: 10.0,
                preferred_brand_drug_copay: 45.0,
                non_preferred_brand_drug_copay: 70.0,
                specialty_drug_coinsurance: 0.30,
                specialty_drug_max_copay: 250.0,
            },
        );
        plans.insert(
            "250".to_string(),
            PlanParameters {
                id: PlanId::Pos250,
                name: "POS 250".to_string(),
                deductible_individual: 250.0,
                deductible_family: 500.0,
                oop_max_individual: 1750.0,
                oop_max_family: 3500.0,
                primary_care_copay: 15.0,
                specialist_copay: 40.0,
                emergency_room_copay: 300.0,
                urgent_care_copay: 75.0,
                // Hospital stays and outpatient surgery are 0% coinsurance
                // after deductible on the POS designs.
                hospital_copay: 0.0,
                mental_health_office_copay: 40.0,
                outpatient_surgery_copay: 0.0,
                generic_drug_copay: 10.0,
                preferred_brand_drug_copay: 45.0,
                non_preferred_brand_drug_copay: 70.0,
                specialty_drug_coinsurance: 0.30,
                specialty_drug_max_copay: 250.0,
            },
        );
        plans.insert(
            "500".to_string(),
            PlanParameters {
                id: PlanId::Pos500,
                name: "POS 500".to_string(),
                deductible_individual: 500.0,
                deductible_family: 1000.0,
                oop_max_individual: 4000.0,
                oop_max_family: 8000.0,
                primary_care_copay: 15.0,
                specialist_copay: 50.0,
                emergency_room_copay: 350.0,
                urgent_care_copay: 50.0,
                hospital_copay: 0.0,
                mental_health_office_copay: 50.0,
                outpatient_surgery_copay: 0.0,
                generic_drug_copay: 10.0,
                preferred_brand_drug_copay: 45.0,
                non_preferred_brand_drug_copay: 70.0,
                specialty_drug_coinsurance: 0.30,
                specialty_drug_max_copay: 250.0,
            },
        );
        PlanCatalog { plans }
    }

    pub fn get(&self, key: &str) -> Option<&PlanParameters> {
        self.plans.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlanParameters)> {
        self.plans.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.plans.keys()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = PlanCatalog::builtin();
        assert_eq!(catalog.len(), 3);

        let hdhp = catalog.get("3300").expect("HDHP plan should exist");
        assert_eq!(hdhp.id, PlanId::Hdhp3300);
        assert_eq!(hdhp.name, "HDHP 3300");
        assert_eq!(hdhp.deductible_individual, 3300.0);
        assert_eq!(hdhp.deductible_family, 6600.0);
        assert_eq!(hdhp.oop_max_individual, 5500.0);
        assert_eq!(hdhp.oop_max_family, 11000.0);
        assert_eq!(hdhp.hospital_copay, 500.0);
        assert_eq!(hdhp.outpatient_surgery_copay, 300.0);

        let pos250 = catalog.get("250").expect("POS 250 plan should exist");
        assert_eq!(pos250.id, PlanId::Pos250);
        assert_eq!(pos250.oop_max_individual, 1750.0);
        assert_eq!(pos250.hospital_copay, 0.0);

        let pos500 = catalog.get("500").expect("POS 500 plan should exist");
        assert_eq!(pos500.id, PlanId::Pos500);
        assert_eq!(pos500.specialist_copay, 50.0);
        assert_eq!(pos500.urgent_care_copay, 50.0);

        assert!(catalog.get("9999").is_none());
    }

    #[test]
    fn test_catalog_iterates_in_key_order() {
        let catalog = PlanCatalog::builtin();
        let keys: Vec<&String> = catalog.keys().collect();
        assert_eq!(keys, ["250", "3300", "500"]);
    }

    #[test]
    fn test_builtin_plans_validate() {
        let catalog = PlanCatalog::builtin();
        for (_, plan) in catalog.iter() {
            plan.validate().expect("builtin plan should be valid");
        }
    }

    #[test]
    fn test_maternity_flat_costs() {
        assert_eq!(PlanId::Hdhp3300.maternity_flat_cost(), 3860.0);
        assert_eq!(PlanId::Pos250.maternity_flat_cost(), 320.0);
        assert_eq!(PlanId::Pos500.maternity_flat_cost(), 760.0);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PlanId::Hdhp3300.to_string(), "HDHP 3300");
        assert_eq!(PlanId::Pos250.to_string(), "POS 250");
        assert_eq!(PlanId::Pos500.to_string(), "POS 500");
    }

    #[test]
    fn test_validate_rejects_negative_copay() {
        let mut plan = PlanCatalog::builtin().get("500").unwrap().clone();
        plan.specialist_copay = -50.0;
        let err = plan.validate().unwrap_err();
        assert!(err.to_string().contains("specialist_copay"));
    }

    #[test]
    fn test_validate_rejects_family_limit_below_individual() {
        let mut plan = PlanCatalog::builtin().get("250").unwrap().clone();
        plan.deductible_family = 100.0;
        assert!(plan.validate().is_err());

        let mut plan = PlanCatalog::builtin().get("250").unwrap().clone();
        plan.oop_max_family = 1000.0;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_parameter() {
        let mut plan = PlanCatalog::builtin().get("3300").unwrap().clone();
        plan.specialty_drug_coinsurance = f64::NAN;
        assert!(plan.validate().is_err());
    }
}
