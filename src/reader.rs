use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;

use crate::schema::ComparisonScenario;

pub async fn stream_scenarios(
    path: &str,
    sender: Sender<ComparisonScenario>,
) -> anyhow::Result<()> {
    let file = File::open(path).await?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ComparisonScenario>(&line) {
            Ok(scenario) => {
                if sender.send(scenario).await.is_err() {
                    eprintln!("Scenario receiver dropped");
                    break;
                }
            }
            Err(err) => eprintln!("Invalid scenario skipped: {}", err),
        }
    }

    Ok(())
}
