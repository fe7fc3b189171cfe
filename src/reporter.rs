use std::collections::BTreeMap;

use colored::Colorize;
use prettytable::{row, Table};

use crate::calculator::CostBreakdown;
use crate::catalog::PlanCatalog;
use crate::compare::rank_by_net_cost;
use crate::schema::ComparisonScenario;

/// Render an exact dollar amount for display.
///
/// The calculator returns exact values; rounding to cents happens here and
/// nowhere else. Negative amounts (net savings) keep a leading minus sign.
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Print the ranked comparison table for one scenario, cheapest plan first,
/// followed by a line-item breakdown per plan.
pub fn print_comparison(
    catalog: &PlanCatalog,
    scenario: &ComparisonScenario,
    results: &BTreeMap<String, CostBreakdown>,
) {
    let ranked = rank_by_net_cost(results);

    let tier = if scenario.is_family {
        "family"
    } else {
        "individual"
    };
    println!("\n=== {} ({}) ===", scenario.name.bold(), tier);
    if !scenario.description.is_empty() {
        println!("{}", scenario.description);
    }

    let mut table = Table::new();
    table.set_titles(row![
        "Rank",
        "Plan",
        "Annual Premiums",
        "Total Out-of-Pocket",
        "HSA Contribution",
        "Net Annual Cost"
    ]);
    for (rank, (key, breakdown)) in ranked.iter().enumerate() {
        table.add_row(row![
            rank + 1,
            plan_name(catalog, key),
            format_currency(breakdown.annual_premiums),
            format_currency(breakdown.total_out_of_pocket),
            format_currency(breakdown.employer_hsa_contribution),
            format_currency(breakdown.net_cost),
        ]);
    }
    table.printstd();

    if let Some((key, breakdown)) = ranked.first() {
        println!(
            "{} {} at {}",
            "Lowest net cost:".green().bold(),
            plan_name(catalog, key),
            format_currency(breakdown.net_cost)
        );
    }

    for (key, breakdown) in &ranked {
        print_breakdown(&plan_name(catalog, key), breakdown);
    }
    println!();
}

fn plan_name(catalog: &PlanCatalog, key: &str) -> String {
    match catalog.get(key) {
        Some(plan) => plan.name.clone(),
        None => key.to_string(),
    }
}

fn print_breakdown(name: &str, breakdown: &CostBreakdown) {
    println!("\n{}", name.bold());
    println!(
        "  Annual premiums:      {}",
        format_currency(breakdown.annual_premiums)
    );
    println!(
        "  Deductible used:      {}",
        format_currency(breakdown.deductible_used)
    );
    println!(
        "  Copays:               {}",
        format_currency(breakdown.copays)
    );
    println!(
        "  Prescriptions:        {}",
        format_currency(breakdown.prescriptions)
    );
    if breakdown.maternity_costs > 0.0 {
        println!(
            "  Maternity:            {}",
            format_currency(breakdown.maternity_costs)
        );
    }
    println!(
        "  Other medical costs:  {}",
        format_currency(breakdown.other_costs)
    );
    println!(
        "  Total out-of-pocket:  {}",
        format_currency(breakdown.total_out_of_pocket)
    );
    if breakdown.employer_hsa_contribution > 0.0 {
        println!(
            "  HSA contribution:    -{}",
            format_currency(breakdown.employer_hsa_contribution)
        );
    }
    println!(
        "  Net annual cost:      {}",
        format_currency(breakdown.net_cost)
    );
}
