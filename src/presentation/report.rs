// Plain-text rendering of a fleet report
use crate::application::fleet_service::FleetReport;

pub fn render_report(report: &FleetReport) -> String {
    let mut out = report.summary.clone();
    if report.alerts.is_empty() {
        out.push_str("\n\nNo alerts.");
    } else {
        out.push_str("\n\nAlerts:");
        for alert in &report.alerts {
            out.push_str(&format!("\n-> {}", alert));
        }
    }
    out
}
