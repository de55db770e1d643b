use std::path::Path;

use authoring_lint::config::Config;
use authoring_lint::finding::ValidationReport;
use authoring_lint::lint::run_lint;
use authoring_lint::output::{self, OutputFormat};
use authoring_lint::validators::DocumentKind;

fn no_color() {
    colored::control::set_override(false);
}

fn prompts_report() -> ValidationReport {
    run_lint(DocumentKind::Prompt, Path::new("tests/fixtures/prompts"), &Config::default()).unwrap()
}

fn skills_report() -> ValidationReport {
    run_lint(DocumentKind::Skill, Path::new("tests/fixtures/skills"), &Config::default()).unwrap()
}

fn clean_report() -> ValidationReport {
    ValidationReport::new(DocumentKind::Prompt, Path::new("empty"), 0, vec![])
}

#[test]
fn text_clean_report_is_ok_line() {
    no_color();
    let text = output::format_report(&clean_report(), OutputFormat::Text);
    assert_eq!(text, "OK: no problems found\n");
}

#[test]
fn text_prints_one_line_per_diagnostic() {
    no_color();
    let text = output::format_report(&prompts_report(), OutputFormat::Text);
    assert_eq!(
        text,
        "P1 no ${input:...} variables found (hard to reuse): tests/fixtures/prompts/greet.prompt.md\n\
         P2 no explicit output format section found: tests/fixtures/prompts/greet.prompt.md\n"
    );
}

#[test]
fn text_skill_mismatch_points_at_directory() {
    no_color();
    let text = output::format_report(&skills_report(), OutputFormat::Text);
    assert_eq!(
        text,
        "P2 directory name 'foo' differs from skill name 'bar': tests/fixtures/skills/foo\n"
    );
}

#[test]
fn text_lines_match_diagnostic_display() {
    no_color();
    let dir = tempfile::tempdir().unwrap();
    let skill = dir.path().join("long");
    std::fs::create_dir(&skill).unwrap();
    std::fs::write(skill.join("SKILL.md"), "x\n".repeat(501)).unwrap();

    let report = run_lint(DocumentKind::Skill, dir.path(), &Config::default()).unwrap();
    let text = output::format_report(&report, OutputFormat::Text);
    let rendered: Vec<String> = report.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(text.lines().collect::<Vec<_>>(), rendered);
    assert!(text.contains(" (501 lines)\n"));
}

#[test]
fn json_output_is_valid() {
    let json = output::format_report(&prompts_report(), OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");

    assert_eq!(parsed["kind"], "prompt");
    assert_eq!(parsed["passed"], false);
    assert_eq!(parsed["documents_checked"], 2);
    assert_eq!(parsed["summary"]["p0"], 0);
    assert_eq!(parsed["summary"]["p1"], 1);
    assert_eq!(parsed["summary"]["p2"], 1);

    let diagnostics = parsed["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["severity"], "P1");
    assert_eq!(diagnostics[0]["rule_id"], "prompt/no-input-variables");
    assert!(diagnostics[0]["observed"].is_null());
    assert!(diagnostics[0]["line"]
        .as_str()
        .unwrap()
        .starts_with("P1 no ${input:...} variables found"));
}

#[test]
fn json_clean_report_passes() {
    let json = output::format_report(&clean_report(), OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["passed"], true);
    assert!(parsed["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn sarif_output_is_valid() {
    let sarif = output::format_report(&skills_report(), OutputFormat::Sarif);
    let parsed: serde_json::Value =
        serde_json::from_str(&sarif).expect("SARIF JSON should be valid");

    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "authoring-lint");

    let rules = parsed["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap();
    assert!(rules.iter().any(|r| r["id"] == "skill/directory-mismatch"));

    let results = parsed["runs"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["ruleId"], "skill/directory-mismatch");
    assert_eq!(results[0]["level"], "note");
    assert_eq!(
        results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
        "tests/fixtures/skills/foo"
    );
}
