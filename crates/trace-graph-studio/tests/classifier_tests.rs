use trace_graph_studio::parser::classifier::{
    classify_line, extract_variable_name, scan_lines, ClassifiedLine, ClassifierConfig,
    NameExtraction,
};

fn config() -> ClassifierConfig {
    ClassifierConfig::for_period("2024")
}

#[test]
fn test_classify_evaluation_line() {
    let line = "  income_tax<2024, (default)> = [1234.5]";

    assert_eq!(
        classify_line(line, &config()),
        Some(ClassifiedLine {
            variable_name: "income_tax".to_string(),
            indent_depth: 1,
        })
    );
}

#[test]
fn test_classify_requires_period_marker() {
    assert_eq!(
        classify_line("  income_tax<2023, (default)> = [1234.5]", &config()),
        None
    );
    assert_eq!(
        classify_line("  income_tax<2024-01, (default)> = [100.]", &config()),
        None
    );
}

#[test]
fn test_classify_requires_assignment_marker() {
    assert_eq!(
        classify_line("  income_tax<2024, (default)> [1234.5]", &config()),
        None
    );
}

#[test]
fn test_classify_ignores_headers() {
    assert_eq!(classify_line("Test 'Scenario':", &config()), None);
    assert_eq!(classify_line("", &config()), None);
}

#[test]
fn test_default_denylist() {
    let line = "    spm_unit_size<2024, (default)> = [3.]";
    assert_eq!(classify_line(line, &config()), None);

    let permissive = config().with_excluded(Vec::<String>::new());
    assert_eq!(
        classify_line(line, &permissive).map(|c| c.variable_name),
        Some("spm_unit_size".to_string())
    );
}

#[test]
fn test_custom_denylist_entry() {
    let config = config().exclude("state_code");
    assert_eq!(classify_line("state_code<2024, (default)> = ['CA']", &config), None);
    assert!(config.is_excluded("spm_unit_size"));
}

#[test]
fn test_name_without_default_annotation() {
    let line = "  wages<2024, > = [50000.]";
    assert_eq!(
        classify_line(line, &config()).map(|c| c.variable_name),
        Some("wages".to_string())
    );
}

#[test]
fn test_extract_strips_default_annotation_and_bracket() {
    assert_eq!(
        extract_variable_name("  tax(default)> = 5", &config()),
        Some("tax".to_string())
    );
}

#[test]
fn test_extract_empty_name() {
    assert_eq!(
        extract_variable_name("  <2024, (default)> = [1.]", &config()),
        None
    );
}

#[test]
fn test_name_rules_diverge_when_assignment_precedes_marker() {
    let line = "label = total<2024, (default)> = [1.]";

    let before_assignment = config().with_name_rule(NameExtraction::BeforeAssignment);
    let before_period = config().with_name_rule(NameExtraction::BeforePeriodMarker);

    assert_eq!(
        extract_variable_name(line, &before_assignment),
        Some("label".to_string())
    );
    assert_eq!(
        extract_variable_name(line, &before_period),
        Some("label = total".to_string())
    );
}

#[test]
fn test_name_rules_agree_on_regular_lines() {
    let line = "      household_net_income<2024, (default)> = [80000.]";

    for rule in [
        NameExtraction::BeforeAssignment,
        NameExtraction::BeforePeriodMarker,
    ] {
        let c = classify_line(line, &config().with_name_rule(rule)).unwrap();
        assert_eq!(c.variable_name, "household_net_income");
        assert_eq!(c.indent_depth, 3);
    }
}

#[test]
fn test_custom_indent_width() {
    let config = config().with_indent_width(4);
    let c = classify_line("        wages<2024, (default)> = [1.]", &config).unwrap();
    assert_eq!(c.indent_depth, 2);
}

#[test]
fn test_custom_period_marker() {
    let config = config().with_period_marker("@2024");
    let c = classify_line("  wages @2024 = 1", &config).unwrap();
    assert_eq!(c.variable_name, "wages");
}

#[test]
fn test_scan_lines_keeps_positions() {
    let trace = "a<2024, (default)> = [1]\n    note without marker\n  b<2024, (default)> = [2]";
    let lines = scan_lines(trace, &config());

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].index, 1);
    assert_eq!(lines[1].depth, 2);
    assert!(lines[1].evaluation.is_none());
    assert_eq!(
        lines[2].evaluation.as_ref().map(|e| e.variable_name.as_str()),
        Some("b")
    );
}
