use std::collections::HashMap;

use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};

use crate::finding::{Severity, ValidationReport};
use crate::validators::{self, RuleInfo};

/// Formats a report as a SARIF 2.1.0 log with one run.
///
/// Every rule of the report's kind is listed in the driver, whether or not it
/// fired, so results can reference it by index.
pub fn format(report: &ValidationReport) -> String {
    let catalogue: Vec<RuleInfo> = validators::rules_for(report.kind);

    let rule_index: HashMap<&str, i64> = catalogue
        .iter()
        .enumerate()
        .map(|(i, rule)| (rule.id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = catalogue
        .iter()
        .map(|info| {
            let mut rule = ReportingDescriptor::builder().id(info.id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(info.message.to_string())
                    .build(),
            );
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(info.remediation.to_string())
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .diagnostics
        .iter()
        .map(|d| {
            let level = match d.severity {
                Severity::Blocker => ResultLevel::Error,
                Severity::Warning => ResultLevel::Warning,
                Severity::Info => ResultLevel::Note,
            };

            let text = match d.observed {
                Some(ref observed) => format!("{} ({observed})", d.message),
                None => d.message.clone(),
            };
            let mut result = SarifResult::builder()
                .message(Message::builder().text(text).build())
                .build();

            result.rule_id = Some(d.rule_id.clone());
            result.level = Some(level);
            result.rule_index = rule_index.get(d.rule_id.as_str()).copied();

            let uri = d.path.to_string_lossy().replace('\\', "/");
            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("authoring-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    let mut json = serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed");
    json.push('\n');
    json
}
