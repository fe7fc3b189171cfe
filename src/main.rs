use plancompare::catalog::PlanCatalog;
use plancompare::compare::run_scenario;
use plancompare::config;
use plancompare::logging::log_scenario_event;
use plancompare::reader::stream_scenarios;
use plancompare::reporter::print_comparison;
use plancompare::scenario_faker::write_fake_scenarios_jsonl;
use plancompare::schema::ComparisonScenario;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::config();

    if let Some(count) = config.generate {
        write_fake_scenarios_jsonl(&config.file_path, count)?;
        println!("Wrote {} scenarios to {}", count, config.file_path);
        return Ok(());
    }

    let catalog = PlanCatalog::builtin();
    let (scenario_tx, mut scenario_rx) = tokio::sync::mpsc::channel::<ComparisonScenario>(16);

    let file_path = config.file_path.clone();
    let reader = tokio::spawn(async move { stream_scenarios(&file_path, scenario_tx).await });

    // One explicit recomputation per scenario record; a rejected scenario is
    // logged and the stream moves on to the next line.
    while let Some(scenario) = scenario_rx.recv().await {
        if config.verbose {
            log_scenario_event("main", &scenario.name, "received", "Evaluating scenario");
        }
        match run_scenario(&catalog, &scenario) {
            Ok(results) => print_comparison(&catalog, &scenario, &results),
            Err(err) => log_scenario_event("main", &scenario.name, "rejected", &err.to_string()),
        }
    }

    reader.await??;
    Ok(())
}
