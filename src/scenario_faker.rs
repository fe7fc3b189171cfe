use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};

use fake::faker::name::en::LastName;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::schema::{ComparisonScenario, UsageInputs};

/// Generate a plausible random comparison scenario for simulation runs
///
/// Household label comes from a fake surname; usage counts, premiums, and
/// HSA contributions are drawn from ranges seen in real enrollment data
pub fn fake_scenario() -> ComparisonScenario {
    let mut rng = rand::rng();
    let is_family = rng.random_bool(0.5);
    let family_members = if is_family { rng.random_range(2..=6) } else { 1 };

    let usage = UsageInputs {
        primary_care_visits: rng.random_range(0..=12),
        specialist_visits: rng.random_range(0..=20),
        emergency_room_visits: rng.random_range(0..=2),
        urgent_care_visits: rng.random_range(0..=6),
        hospital_stays: rng.random_range(0..=2),
        mental_health_therapy_sessions: *[0, 0, 12, 26, 52].choose(&mut rng).unwrap(),
        outpatient_surgeries: rng.random_range(0..=2),
        physical_therapy_sessions: *[0, 0, 12, 30, 50].choose(&mut rng).unwrap(),
        generic_drugs_per_month: rng.random_range(0..=6),
        preferred_brand_drugs_per_month: rng.random_range(0..=3),
        non_preferred_brand_drugs_per_month: rng.random_range(0..=2),
        specialty_drugs_per_month: rng.random_range(0..=1),
        lab_tests_xrays: rng.random_range(0..=30) as f64 * 100.0,
        imaging_ct_pet_mri: rng.random_range(0..=20) as f64 * 250.0,
        family_members,
        planning_pregnancy: is_family && rng.random_bool(0.2),
    };

    // HDHP premiums run lowest, POS 250 highest; only the HDHP carries an
    // employer HSA contribution.
    let premiums = BTreeMap::from([
        ("3300".to_string(), rng.random_range(0..=400) as f64),
        ("250".to_string(), rng.random_range(100..=800) as f64),
        ("500".to_string(), rng.random_range(50..=600) as f64),
    ]);
    let hsa_contributions = BTreeMap::from([
        ("3300".to_string(), rng.random_range(0..=4150) as f64),
        ("250".to_string(), 0.0),
        ("500".to_string(), 0.0),
    ]);

    let last_name: String = LastName().fake();
    ComparisonScenario {
        name: format!("{} household", last_name),
        description: format!(
            "Randomly generated {} scenario",
            if is_family { "family" } else { "individual" }
        ),
        is_family,
        usage,
        premiums,
        hsa_contributions,
    }
}

/// Write multiple fake scenarios to a JSONL file for simulation
pub fn write_fake_scenarios_jsonl(path: &str, n: usize) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for _ in 0..n {
        let scenario = fake_scenario();
        let json = serde_json::to_string(&scenario).unwrap();
        writeln!(writer, "{}", json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every generated scenario must pass the calculator's usage contract,
    /// otherwise simulation runs would reject their own input.
    #[test]
    fn test_fake_scenarios_are_valid() {
        for _ in 0..50 {
            let scenario = fake_scenario();
            scenario
                .usage
                .validate(scenario.is_family)
                .expect("fake scenario should satisfy the usage contract");
            assert_eq!(scenario.premiums.len(), 3);
            assert_eq!(scenario.hsa_contributions.len(), 3);
        }
    }

    #[test]
    fn test_fake_scenario_round_trips_through_json() {
        let scenario = fake_scenario();
        let json = serde_json::to_string(&scenario).unwrap();
        let parsed: ComparisonScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scenario);
    }
}
