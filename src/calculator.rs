use serde::Serialize;

use crate::catalog::PlanParameters;
use crate::error::CalculatorError;
use crate::schema::UsageInputs;

/// Assumed underlying cost of one specialty prescription per month, used as
/// the base for the coinsurance calculation. The consumer cannot know the
/// true drug cost, so this calculator-wide figure stands in for claims data.
pub const ASSUMED_SPECIALTY_DRUG_COST_PER_MONTH: f64 = 3000.0;

/// Line-item result of evaluating one plan against one usage record.
///
/// Values are exact; rounding and currency formatting belong to whichever
/// layer renders the breakdown. `net_cost` may be negative when the employer
/// HSA contribution exceeds premiums plus out-of-pocket spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub annual_premiums: f64,
    pub deductible_used: f64,
    pub copays: f64,
    pub prescriptions: f64,
    pub maternity_costs: f64,
    pub other_costs: f64,
    pub total_out_of_pocket: f64,
    pub employer_hsa_contribution: f64,
    pub net_cost: f64,
}

/// Estimate the annual cost of one plan for one usage record.
///
/// Pure and deterministic: no I/O, no shared state, inputs are never
/// mutated. All validation happens before any arithmetic, so a failed call
/// returns no partial figures.
pub fn calculate_plan_cost(
    plan: &PlanParameters,
    usage: &UsageInputs,
    is_family: bool,
    monthly_premium: f64,
    employer_hsa_contribution: f64,
) -> Result<CostBreakdown, CalculatorError> {
    plan.validate()?;
    usage.validate(is_family)?;
    if !monthly_premium.is_finite() || monthly_premium < 0.0 {
        return Err(CalculatorError::InvalidPremium(format!(
            "monthly_premium must be non-negative and finite, got {monthly_premium}"
        )));
    }
    if !employer_hsa_contribution.is_finite() || employer_hsa_contribution < 0.0 {
        return Err(CalculatorError::InvalidPremium(format!(
            "employer_hsa_contribution must be non-negative and finite, got {employer_hsa_contribution}"
        )));
    }

    let annual_premiums = monthly_premium * 12.0;

    // Fixed copays across the seven copay-bearing services. Physical therapy
    // carries no copay: it is covered in full once the deductible is met.
    let copays = usage.primary_care_visits as f64 * plan.primary_care_copay
        + usage.specialist_visits as f64 * plan.specialist_copay
        + usage.emergency_room_visits as f64 * plan.emergency_room_copay
        + usage.urgent_care_visits as f64 * plan.urgent_care_copay
        + usage.hospital_stays as f64 * plan.hospital_copay
        + usage.mental_health_therapy_sessions as f64 * plan.mental_health_office_copay
        + usage.outpatient_surgeries as f64 * plan.outpatient_surgery_copay;

    let generic_costs = usage.generic_drugs_per_month as f64 * 12.0 * plan.generic_drug_copay;
    let preferred_costs =
        usage.preferred_brand_drugs_per_month as f64 * 12.0 * plan.preferred_brand_drug_copay;
    let non_preferred_costs = usage.non_preferred_brand_drugs_per_month as f64
        * 12.0
        * plan.non_preferred_brand_drug_copay;

    // Specialty drugs: coinsurance against the assumed monthly drug cost,
    // capped per prescription per month.
    let specialty_cost_per_script = (ASSUMED_SPECIALTY_DRUG_COST_PER_MONTH
        * plan.specialty_drug_coinsurance)
        .min(plan.specialty_drug_max_copay);
    let specialty_costs =
        usage.specialty_drugs_per_month as f64 * 12.0 * specialty_cost_per_script;

    let prescriptions = generic_costs + preferred_costs + non_preferred_costs + specialty_costs;

    let maternity_costs = if usage.planning_pregnancy {
        plan.id.maternity_flat_cost()
    } else {
        0.0
    };

    let other_medical_costs = usage.lab_tests_xrays + usage.imaging_ct_pet_mri;

    // Only the lab/imaging dollars run through the deductible; copays,
    // prescriptions, and maternity already reflect post-deductible sharing.
    let deductible_limit = if is_family {
        plan.deductible_family
    } else {
        plan.deductible_individual
    };
    let deductible_used = other_medical_costs.min(deductible_limit);
    let other_costs = (other_medical_costs - deductible_used).max(0.0);

    let total_before_cap =
        copays + prescriptions + deductible_used + other_costs + maternity_costs;

    let oop_max = if is_family {
        plan.oop_max_family
    } else {
        plan.oop_max_individual
    };
    let total_out_of_pocket = total_before_cap.min(oop_max);

    // No floor: a generous contribution can push the net below zero.
    let net_cost = annual_premiums + total_out_of_pocket - employer_hsa_contribution;

    Ok(CostBreakdown {
        annual_premiums,
        deductible_used,
        copays,
        prescriptions,
        maternity_costs,
        other_costs,
        total_out_of_pocket,
        employer_hsa_contribution,
        net_cost,
    })
}
