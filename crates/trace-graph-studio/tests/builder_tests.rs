use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use trace_graph_studio::aggregator::Edge;
use trace_graph_studio::parser::{parse_trace, ClassifierConfig, ParsedTrace};

fn parse(trace: &str) -> ParsedTrace {
    parse_trace(trace, &ClassifierConfig::for_period("2024"))
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn edges(pairs: &[(&str, &str)]) -> BTreeSet<Edge> {
    pairs.iter().map(|(p, c)| Edge::new(*p, *c)).collect()
}

const HOUSEHOLD_TRACE: &str = "\
Test 'Scenario':
household_net_income<2024, (default)> = [48250.]
  household_market_income<2024, (default)> = [60000.]
    employment_income<2024, (default)> = [60000.]
    self_employment_income<2024, (default)> = [0.]
  household_tax<2024, (default)> = [11750.]
    income_tax<2024, (default)> = [7160.]
      taxable_income<2024, (default)> = [45400.]
        adjusted_gross_income<2024, (default)> = [60000.]
          employment_income<2024, (default)> = [60000.]
        standard_deduction<2024, (default)> = [14600.]
    payroll_tax<2024, (default)> = [4590.]
      employment_income<2024, (default)> = [60000.]
  household_benefits<2024, (default)> = [0.]
";

#[test]
fn test_siblings_under_one_parent() {
    let parsed = parse("a<2024,...> = 1\n  b<2024,...> = 2\n  c<2024,...> = 3");
    let graph = &parsed.graph;

    assert_eq!(graph.nodes(), &set(&["a", "b", "c"]));
    assert_eq!(graph.edges(), &edges(&[("a", "b"), ("a", "c")]));
    assert_eq!(graph.leaves(), &set(&["b", "c"]));
    assert_eq!(graph.non_leaves().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn test_single_line_without_lookahead() {
    let parsed = parse("    lonely<2024, (default)> = [1.]");

    assert_eq!(parsed.graph.nodes(), &set(&["lonely"]));
    assert!(parsed.graph.edges().is_empty());
    assert!(parsed.graph.is_leaf("lonely"));
}

#[test]
fn test_non_leaf_dominates_across_occurrences() {
    let trace = "\
root<2024, (default)> = [0]
  shared<2024, (default)> = [1]
  other<2024, (default)> = [2]
  shared<2024, (default)> = [1]
    input<2024, (default)> = [3]";
    let graph = parse(trace).graph;

    assert!(!graph.is_leaf("shared"));
    assert_eq!(graph.leaves(), &set(&["input", "other"]));
    assert_eq!(
        graph.edges(),
        &edges(&[("root", "shared"), ("root", "other"), ("shared", "input")])
    );
}

#[test]
fn test_self_nesting_never_creates_loop() {
    let trace = "\
employment_income<2024, (default)> = [60000.]
  employment_income<2024, (default)> = [5000.]
    wages<2024, (default)> = [5000.]";
    let graph = parse(trace).graph;

    assert!(graph.edges().iter().all(|e| e.parent != e.child));
    assert_eq!(graph.edges(), &edges(&[("employment_income", "wages")]));
    assert!(!graph.is_leaf("employment_income"));
}

#[test]
fn test_depth_delta_pop() {
    let trace = "\
a<2024, (default)> = [1]
  b<2024, (default)> = [1]
    c<2024, (default)> = [1]
      d<2024, (default)> = [1]
  e<2024, (default)> = [1]";
    let graph = parse(trace).graph;

    assert_eq!(
        graph.edges(),
        &edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "e")])
    );
}

#[test]
fn test_lookahead_uses_original_next_line() {
    // The deeper line is for another period, but still opens a's scope
    let trace = "\
a<2024, (default)> = [1]
  b<2023, (default)> = [2]
  c<2024, (default)> = [3]";
    let graph = parse(trace).graph;

    assert!(!graph.is_leaf("a"));
    assert!(!graph.contains("b"));
    assert_eq!(graph.edges(), &edges(&[("a", "c")]));
}

#[test]
fn test_excluded_variables_are_skipped() {
    let trace = "\
spm_unit_net_income<2024, (default)> = [1]
  spm_unit_size<2024, (default)> = [3]
  spm_unit_benefits<2024, (default)> = [0]";
    let parsed = parse(trace);

    assert!(!parsed.graph.contains("spm_unit_size"));
    assert_eq!(parsed.excluded_lines, 1);
    assert_eq!(parsed.relevant_lines, 2);
    assert_eq!(
        parsed.graph.edges(),
        &edges(&[("spm_unit_net_income", "spm_unit_benefits")])
    );
}

#[test]
fn test_forest_of_roots() {
    let trace = "\
a<2024, (default)> = [1]
  b<2024, (default)> = [1]
c<2024, (default)> = [1]
  d<2024, (default)> = [1]";
    let graph = parse(trace).graph;

    assert_eq!(graph.roots(), vec!["a", "c"]);
    assert_eq!(graph.edges(), &edges(&[("a", "b"), ("c", "d")]));
}

#[test]
fn test_household_trace_structure() {
    let parsed = parse(HOUSEHOLD_TRACE);
    let graph = &parsed.graph;

    assert_eq!(parsed.total_lines, 14);
    assert_eq!(parsed.relevant_lines, 13);
    assert_eq!(parsed.max_depth, 5);

    assert_eq!(graph.roots(), vec!["household_net_income"]);
    assert_eq!(
        graph.children_of("household_tax").collect::<Vec<_>>(),
        vec!["income_tax", "payroll_tax"]
    );
    assert!(graph
        .edges()
        .contains(&Edge::new("adjusted_gross_income", "employment_income")));
    assert!(graph
        .edges()
        .contains(&Edge::new("taxable_income", "standard_deduction")));
    assert!(graph.is_leaf("employment_income"));
    assert!(graph.is_leaf("household_benefits"));
    assert!(!graph.is_leaf("taxable_income"));
}

#[test]
fn test_parsing_is_idempotent() {
    assert_eq!(parse(HOUSEHOLD_TRACE), parse(HOUSEHOLD_TRACE));
}

#[test]
fn test_edge_endpoints_are_nodes() {
    let graph = parse(HOUSEHOLD_TRACE).graph;

    for edge in graph.edges() {
        assert!(graph.contains(&edge.parent), "missing {}", edge.parent);
        assert!(graph.contains(&edge.child), "missing {}", edge.child);
    }
}

#[test]
fn test_leaf_partition() {
    let graph = parse(HOUSEHOLD_TRACE).graph;
    let non_leaves: BTreeSet<String> = graph.non_leaves().map(str::to_string).collect();

    assert!(graph.leaves().is_disjoint(&non_leaves));
    assert_eq!(graph.leaves().len() + non_leaves.len(), graph.nodes().len());
}

#[test]
fn test_duplicate_edges_collapse() {
    let trace = "\
a<2024, (default)> = [1]
  b<2024, (default)> = [1]
  b<2024, (default)> = [1]
  b<2024, (default)> = [1]";
    assert_eq!(parse(trace).graph.edges().len(), 1);
}

#[test]
fn test_empty_trace() {
    let parsed = parse("");
    assert!(parsed.graph.is_empty());
    assert_eq!(parsed.total_lines, 0);
}
