use std::path::Path;

use authoring_lint::config::Config;
use authoring_lint::error::LintError;
use authoring_lint::finding::{Diagnostic, Severity};
use authoring_lint::lint::run_lint;
use authoring_lint::validators::prompt::{validate_prompt, PromptValidator};
use authoring_lint::validators::{DocumentKind, Validator};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PATH: &str = "prompts/sample.prompt.md";

fn check(text: &str) -> Vec<Diagnostic> {
    validate_prompt(Path::new(PATH), text)
}

fn rule_ids(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.rule_id.as_str()).collect()
}

/// Frontmatter plus a body that satisfies the content rules.
fn prompt(frontmatter: &str) -> String {
    format!("---\n{frontmatter}\n---\n\nReview ${{input:file}} for ${{input:focus}}.\n\n## Output\n\nA list.\n")
}

// ---------------------------------------------------------------------------
// Frontmatter guard
// ---------------------------------------------------------------------------

#[test]
fn clean_prompt_has_no_diagnostics() {
    assert!(check(&prompt("name: review-pr\ndescription: Reviews a PR")).is_empty());
}

#[test]
fn missing_frontmatter_short_circuits() {
    let diagnostics = check("# Just a body with nothing else\n");
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/missing-frontmatter"]);
    assert_eq!(diagnostics[0].severity, Severity::Blocker);
    assert_eq!(
        diagnostics[0].to_string(),
        "P0 missing/invalid YAML frontmatter: prompts/sample.prompt.md"
    );
}

#[test]
fn unterminated_frontmatter_short_circuits() {
    let diagnostics = check("---\nname: x\n\nno closing delimiter, no inputs\n");
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/missing-frontmatter"]);
}

#[test]
fn empty_frontmatter_runs_every_rule() {
    let diagnostics = check("---\n---\nbody\n");
    assert_eq!(
        rule_ids(&diagnostics),
        vec![
            "prompt/missing-name",
            "prompt/missing-description",
            "prompt/no-input-variables",
            "prompt/no-output-section",
        ]
    );
}

// ---------------------------------------------------------------------------
// name / description
// ---------------------------------------------------------------------------

#[test]
fn missing_name_is_blocker() {
    let diagnostics = check(&prompt("description: d"));
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/missing-name"]);
    assert_eq!(
        diagnostics[0].to_string(),
        "P0 missing name: prompts/sample.prompt.md"
    );
}

#[test]
fn empty_name_counts_as_missing() {
    let diagnostics = check(&prompt("name:\ndescription: d"));
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/missing-name"]);
}

#[test]
fn invalid_name_includes_value() {
    let diagnostics = check(&prompt("name: My_Prompt\ndescription: d"));
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/invalid-name"]);
    assert_eq!(
        diagnostics[0].to_string(),
        "P0 invalid name 'My_Prompt': prompts/sample.prompt.md"
    );
}

#[test]
fn quoted_name_is_unquoted_before_checking() {
    assert!(check(&prompt("name: \"review-pr\"\ndescription: 'Reviews'")).is_empty());
}

#[test]
fn missing_description_is_blocker() {
    let diagnostics = check(&prompt("name: review-pr"));
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/missing-description"]);
    assert_eq!(
        diagnostics[0].to_string(),
        "P0 missing description: prompts/sample.prompt.md"
    );
}

#[test]
fn description_of_quotes_only_counts_as_missing() {
    let diagnostics = check(&prompt("name: review-pr\ndescription: \"\""));
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/missing-description"]);
}

#[test]
fn long_description_is_not_checked_for_prompts() {
    let desc = "x".repeat(5000);
    assert!(check(&prompt(&format!("name: review-pr\ndescription: {desc}"))).is_empty());
}

// ---------------------------------------------------------------------------
// ${input:...} variables
// ---------------------------------------------------------------------------

#[test]
fn no_input_variables_is_warning() {
    let text = "---\nname: a\ndescription: d\n---\n## Output\nnothing to fill in\n";
    let diagnostics = check(text);
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/no-input-variables"]);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(
        diagnostics[0].to_string(),
        "P1 no ${input:...} variables found (hard to reuse): prompts/sample.prompt.md"
    );
}

#[test]
fn single_input_variable_is_info() {
    let text = "---\nname: a\ndescription: d\n---\nUse ${input:topic}.\n## Output\n";
    let diagnostics = check(text);
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/single-input-variable"]);
    assert_eq!(
        diagnostics[0].to_string(),
        "P2 only 1 ${input:...} variable found (consider 2+): prompts/sample.prompt.md"
    );
}

#[test]
fn input_variables_in_frontmatter_are_counted() {
    let text = "---\nname: a\ndescription: Uses ${input:x}\n---\nand ${input:y}\nOutput\n";
    assert!(check(text).is_empty());
}

#[test]
fn repeated_variable_counts_each_occurrence() {
    let text = "---\nname: a\ndescription: d\n---\n${input:x} then ${input:x}\nOutput\n";
    assert!(check(text).is_empty());
}

#[test]
fn empty_input_variable_does_not_count() {
    let text = "---\nname: a\ndescription: d\n---\n${input:} and ${input}\nOutput\n";
    assert_eq!(rule_ids(&check(text)), vec!["prompt/no-input-variables"]);
}

// ---------------------------------------------------------------------------
// Output section
// ---------------------------------------------------------------------------

#[test]
fn japanese_output_marker_is_accepted() {
    let text = "---\nname: a\ndescription: d\n---\n${input:a} ${input:b}\n## 出力\n";
    assert!(check(text).is_empty());
}

#[test]
fn output_marker_is_case_sensitive() {
    let text = "---\nname: a\ndescription: d\n---\n${input:a} ${input:b}\n## output\n";
    let diagnostics = check(text);
    assert_eq!(rule_ids(&diagnostics), vec!["prompt/no-output-section"]);
    assert_eq!(
        diagnostics[0].to_string(),
        "P2 no explicit output format section found: prompts/sample.prompt.md"
    );
}

#[test]
fn greet_scenario_reports_input_and_output_hints() {
    let text = "---\nname: greet\ndescription: \"says hi\"\n---\n\nSay hello to the user.\n";
    let diagnostics = check(text);
    let severities: Vec<Severity> = diagnostics.iter().map(|d| d.severity).collect();
    assert_eq!(severities, vec![Severity::Warning, Severity::Info]);
    assert_eq!(
        rule_ids(&diagnostics),
        vec!["prompt/no-input-variables", "prompt/no-output-section"]
    );
}

// ---------------------------------------------------------------------------
// Discovery and file reading
// ---------------------------------------------------------------------------

#[test]
fn discover_matches_suffix_at_top_level_only() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.prompt.md"), "").unwrap();
    std::fs::write(dir.path().join("a.prompt.md"), "").unwrap();
    std::fs::write(dir.path().join("notes.md"), "").unwrap();
    std::fs::write(dir.path().join("c.prompt.md.bak"), "").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested").join("d.prompt.md"), "").unwrap();
    std::fs::create_dir(dir.path().join("dir.prompt.md")).unwrap();

    let found = PromptValidator.discover(dir.path(), &Config::default());
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.prompt.md", "b.prompt.md"]);
}

#[test]
fn discover_honours_configured_suffix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.prompt.md"), "").unwrap();
    std::fs::write(dir.path().join("b.prompt.txt"), "").unwrap();

    let mut config = Config::default();
    config.prompts.suffix = ".prompt.txt".to_string();
    let found = PromptValidator.discover(dir.path(), &config);
    assert_eq!(found, vec![dir.path().join("b.prompt.txt")]);
}

#[test]
fn invalid_utf8_is_read_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bad.prompt.md");
    let mut bytes = b"---\nname: bad\ndescription: caf".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"\n---\n${input:a} ${input:b}\nOutput\n");
    std::fs::write(&file, bytes).unwrap();

    let diagnostics = PromptValidator.validate(&file, &Config::default());
    assert!(diagnostics.is_empty(), "got {diagnostics:?}");
}

#[test]
fn file_as_root_is_an_empty_passing_run() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("x.txt");
    std::fs::write(&file, "not a directory").unwrap();

    let report = run_lint(DocumentKind::Prompt, &file, &Config::default()).unwrap();
    assert_eq!(report.documents_checked, 0);
    assert!(report.passed());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn missing_root_is_still_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_lint(DocumentKind::Prompt, &dir.path().join("gone"), &Config::default())
        .unwrap_err();
    assert!(matches!(err, LintError::RootNotFound { .. }));
}
