use std::collections::BTreeMap;

use crate::calculator::{calculate_plan_cost, CostBreakdown};
use crate::catalog::PlanCatalog;
use crate::error::CalculatorError;
use crate::schema::{ComparisonScenario, UsageInputs};

/// Evaluate one usage record against every plan in the catalog.
///
/// Premiums and employer HSA contributions are supplied per plan key; a
/// missing entry counts as zero. Any plan failing validation fails the whole
/// comparison — per-plan isolation is a presentation concern, not ours.
pub fn compare_plans(
    catalog: &PlanCatalog,
    usage: &UsageInputs,
    is_family: bool,
    premiums: &BTreeMap<String, f64>,
    hsa_contributions: &BTreeMap<String, f64>,
) -> Result<BTreeMap<String, CostBreakdown>, CalculatorError> {
    let mut results = BTreeMap::new();
    for (key, plan) in catalog.iter() {
        let monthly_premium = premiums.get(key).copied().unwrap_or(0.0);
        let contribution = hsa_contributions.get(key).copied().unwrap_or(0.0);
        let breakdown =
            calculate_plan_cost(plan, usage, is_family, monthly_premium, contribution)?;
        results.insert(key.clone(), breakdown);
    }
    Ok(results)
}

/// Evaluate a scenario record against the catalog.
pub fn run_scenario(
    catalog: &PlanCatalog,
    scenario: &ComparisonScenario,
) -> Result<BTreeMap<String, CostBreakdown>, CalculatorError> {
    compare_plans(
        catalog,
        &scenario.usage,
        scenario.is_family,
        &scenario.premiums,
        &scenario.hsa_contributions,
    )
}

/// Order comparison results by ascending net cost, key order breaking ties.
pub fn rank_by_net_cost(
    results: &BTreeMap<String, CostBreakdown>,
) -> Vec<(&str, &CostBreakdown)> {
    let mut ranked: Vec<(&str, &CostBreakdown)> =
        results.iter().map(|(key, breakdown)| (key.as_str(), breakdown)).collect();
    ranked.sort_by(|a, b| a.1.net_cost.total_cmp(&b.1.net_cost));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_covers_every_plan() {
        let catalog = PlanCatalog::builtin();
        let results = compare_plans(
            &catalog,
            &UsageInputs::zero(),
            false,
            &BTreeMap::new(),
            &BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(results.len(), 3);
        for key in ["3300", "250", "500"] {
            assert!(results.contains_key(key), "missing breakdown for {key}");
        }
    }

    #[test]
    fn test_missing_premium_entries_count_as_zero() {
        let catalog = PlanCatalog::builtin();
        let premiums = BTreeMap::from([("3300".to_string(), 50.0)]);
        let results = compare_plans(
            &catalog,
            &UsageInputs::zero(),
            false,
            &premiums,
            &BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(results["3300"].annual_premiums, 600.0);
        assert_eq!(results["250"].annual_premiums, 0.0);
        assert_eq!(results["500"].annual_premiums, 0.0);
    }

    #[test]
    fn test_one_bad_input_fails_the_comparison() {
        let catalog = PlanCatalog::builtin();
        let premiums = BTreeMap::from([("250".to_string(), -10.0)]);
        let result = compare_plans(
            &catalog,
            &UsageInputs::zero(),
            false,
            &premiums,
            &BTreeMap::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ranking_sorts_by_ascending_net_cost() {
        let catalog = PlanCatalog::builtin();
        // Minimal-care individual: one primary care visit, 200 in labs.
        let usage = UsageInputs {
            primary_care_visits: 1,
            lab_tests_xrays: 200.0,
            ..UsageInputs::zero()
        };
        let premiums = BTreeMap::from([
            ("3300".to_string(), 50.0),
            ("250".to_string(), 150.0),
            ("500".to_string(), 100.0),
        ]);
        let hsa = BTreeMap::from([("3300".to_string(), 500.0)]);
        let results = compare_plans(&catalog, &usage, false, &premiums, &hsa).unwrap();

        let ranked = rank_by_net_cost(&results);
        let keys: Vec<&str> = ranked.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["3300", "500", "250"]);
        assert_eq!(ranked[0].1.net_cost, 330.0);
        assert_eq!(ranked[1].1.net_cost, 1415.0);
        assert_eq!(ranked[2].1.net_cost, 2015.0);
    }

    #[test]
    fn test_ranking_ties_keep_key_order() {
        let catalog = PlanCatalog::builtin();
        // No premiums, no usage: every plan nets to zero.
        let results = compare_plans(
            &catalog,
            &UsageInputs::zero(),
            false,
            &BTreeMap::new(),
            &BTreeMap::new(),
        )
        .unwrap();
        let ranked = rank_by_net_cost(&results);
        let keys: Vec<&str> = ranked.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["250", "3300", "500"]);
    }
}
