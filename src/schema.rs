use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Self-reported annual healthcare usage for one household.
///
/// Visit counts and surgeries are annual totals; drug counts are
/// prescriptions filled per month; lab and imaging figures are estimated
/// annual dollar totals rather than counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageInputs {
    pub primary_care_visits: i64,
    pub specialist_visits: i64,
    pub emergency_room_visits: i64,
    pub urgent_care_visits: i64,
    pub hospital_stays: i64,
    pub mental_health_therapy_sessions: i64,
    pub outpatient_surgeries: i64,
    pub physical_therapy_sessions: i64,
    pub generic_drugs_per_month: i64,
    pub preferred_brand_drugs_per_month: i64,
    pub non_preferred_brand_drugs_per_month: i64,
    pub specialty_drugs_per_month: i64,
    pub lab_tests_xrays: f64,
    pub imaging_ct_pet_mri: f64,
    pub family_members: i64,
    pub planning_pregnancy: bool,
}

impl UsageInputs {
    /// A usage record with every count and dollar estimate at zero.
    pub fn zero() -> Self {
        UsageInputs {
            primary_care_visits: 0,
            specialist_visits: 0,
            emergency_room_visits: 0,
            urgent_care_visits: 0,
            hospital_stays: 0,
            mental_health_therapy_sessions: 0,
            outpatient_surgeries: 0,
            physical_therapy_sessions: 0,
            generic_drugs_per_month: 0,
            preferred_brand_drugs_per_month: 0,
            non_preferred_brand_drugs_per_month: 0,
            specialty_drugs_per_month: 0,
            lab_tests_xrays: 0.0,
            imaging_ct_pet_mri: 0.0,
            family_members: 1,
            planning_pregnancy: false,
        }
    }

    /// Check the caller contract: counts non-negative, dollar estimates
    /// finite and non-negative, and at least 2 members on family coverage.
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self, is_family: bool) -> Result<(), CalculatorError> {
        let counts = [
            ("primary_care_visits", self.primary_care_visits),
            ("specialist_visits", self.specialist_visits),
            ("emergency_room_visits", self.emergency_room_visits),
            ("urgent_care_visits", self.urgent_care_visits),
            ("hospital_stays", self.hospital_stays),
            ("mental_health_therapy_sessions", self.mental_health_therapy_sessions),
            ("outpatient_surgeries", self.outpatient_surgeries),
            ("physical_therapy_sessions", self.physical_therapy_sessions),
            ("generic_drugs_per_month", self.generic_drugs_per_month),
            ("preferred_brand_drugs_per_month", self.preferred_brand_drugs_per_month),
            ("non_preferred_brand_drugs_per_month", self.non_preferred_brand_drugs_per_month),
            ("specialty_drugs_per_month", self.specialty_drugs_per_month),
            ("family_members", self.family_members),
        ];
        for (field, value) in counts {
            if value < 0 {
                return Err(CalculatorError::InvalidUsage(format!(
                    "{field} must be non-negative, got {value}"
                )));
            }
        }

        let dollars = [
            ("lab_tests_xrays", self.lab_tests_xrays),
            ("imaging_ct_pet_mri", self.imaging_ct_pet_mri),
        ];
        for (field, value) in dollars {
            if !value.is_finite() || value < 0.0 {
                return Err(CalculatorError::InvalidUsage(format!(
                    "{field} must be a non-negative finite amount, got {value}"
                )));
            }
        }

        if is_family && self.family_members < 2 {
            return Err(CalculatorError::InvalidUsage(format!(
                "family coverage requires at least 2 members, got {}",
                self.family_members
            )));
        }

        Ok(())
    }
}

impl Default for UsageInputs {
    /// The pre-filled usage profile shown before the user edits anything:
    /// a family of four with routine primary care and generic prescriptions.
    fn default() -> Self {
        UsageInputs {
            primary_care_visits: 4,
            specialist_visits: 2,
            emergency_room_visits: 0,
            urgent_care_visits: 1,
            hospital_stays: 0,
            mental_health_therapy_sessions: 0,
            outpatient_surgeries: 0,
            physical_therapy_sessions: 0,
            generic_drugs_per_month: 2,
            preferred_brand_drugs_per_month: 0,
            non_preferred_brand_drugs_per_month: 0,
            specialty_drugs_per_month: 0,
            lab_tests_xrays: 500.0,
            imaging_ct_pet_mri: 0.0,
            family_members: 4,
            planning_pregnancy: false,
        }
    }
}

/// The root record for one comparison run.
///
/// One scenario per line in a JSONL scenario file. Premiums and employer
/// HSA contributions are keyed by plan key ("3300", "250", "500"); a
/// missing key means zero for that plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScenario {
    pub name: String,
    pub description: String,
    pub is_family: bool,
    pub usage: UsageInputs,
    #[serde(default)]
    pub premiums: BTreeMap<String, f64>,
    #[serde(default)]
    pub hsa_contributions: BTreeMap<String, f64>,
}

/// Mock scenario for testing
pub fn mock_scenario() -> ComparisonScenario {
    ComparisonScenario {
        name: "Healthy Individual - Minimal Care".to_string(),
        description: "Annual physical and routine labs, no chronic conditions".to_string(),
        is_family: false,
        usage: UsageInputs {
            primary_care_visits: 1,
            lab_tests_xrays: 200.0,
            ..UsageInputs::zero()
        },
        premiums: BTreeMap::from([
            ("3300".to_string(), 50.0),
            ("250".to_string(), 150.0),
            ("500".to_string(), 100.0),
        ]),
        hsa_contributions: BTreeMap::from([("3300".to_string(), 500.0)]),
    }
}
