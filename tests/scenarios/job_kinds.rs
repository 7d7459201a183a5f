//! Test: only step-based jobs are inspected

use crate::helpers::*;

/// Non-freestyle jobs contribute no edges, even with trigger steps declared
#[test]
fn test_unsupported_kind_yields_empty_set() {
    let yaml = r#"
jobs:
  - name: "matrix"
    kind: matrix
    builders:
      - type: trigger
        configs:
          - projects: "B"
  - name: "maven"
    kind: maven
    builders:
      - type: trigger
        configs:
          - projects: "B"
  - name: "B"
"#;

    assert!(edges_for(yaml, "matrix").is_empty());
    assert!(edges_for(yaml, "maven").is_empty());
}

/// Any kind of job can be a trigger target
#[test]
fn test_any_kind_is_a_valid_target() {
    let yaml = r#"
jobs:
  - name: "A"
    builders:
      - type: trigger
        configs:
          - projects: "M, V"
  - name: "M"
    kind: matrix
  - name: "V"
    kind: maven
"#;

    assert_edges(&edges_for(yaml, "A"), &["A -> M", "A -> V"]);
}
