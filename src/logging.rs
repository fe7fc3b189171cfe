
pub fn log_scenario_event(component: &str, scenario: &str, event: &str, message: &str) {
    println!(
        "[{}][scenario:{}][{}] {}\n",
        component,
        scenario,
        event,
        message
    );
}
