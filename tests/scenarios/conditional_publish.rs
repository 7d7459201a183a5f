//! Test: trigger steps nested in conditional publish entries

use crate::helpers::*;
use trigger_graph::Capabilities;

const NESTED_ONLY: &str = r#"
jobs:
  - name: "A"
    publishers:
      - type: conditional_publish
        entries:
          - condition: always
            steps:
              - type: trigger
                configs:
                  - projects: "D"
  - name: "D"
"#;

/// Nested trigger steps count only when the capability is active
#[test]
fn test_capability_gating() {
    let (_, registry) = registry_from_yaml(NESTED_ONLY);

    let enabled = Capabilities { conditional_publish: true };
    assert_edges(&edges_with(&registry, enabled, "A"), &["A -> D"]);

    let disabled = Capabilities { conditional_publish: false };
    assert!(edges_with(&registry, disabled, "A").is_empty());
}

/// The capability is probed from the installed plugin list
#[test]
fn test_capability_from_plugins() {
    let with_plugin = format!("plugins: [flexible-publish]\n{}", NESTED_ONLY);
    assert_edges(&edges_for(&with_plugin, "A"), &["A -> D"]);

    let without_plugin = format!("plugins: [copyartifact]\n{}", NESTED_ONLY);
    assert!(edges_for(&without_plugin, "A").is_empty());
}

/// Every entry of every wrapper is scanned, alongside build steps
#[test]
fn test_multiple_wrappers_and_entries() {
    let yaml = r#"
plugins: [flexible-publish]
jobs:
  - name: "A"
    builders:
      - type: trigger
        configs:
          - projects: "B"
    publishers:
      - type: shell
        command: "archive"
      - type: conditional_publish
        entries:
          - condition: success
            steps:
              - type: trigger
                configs:
                  - projects: "C"
          - condition: failure
            steps:
              - type: shell
                command: "notify"
              - type: trigger
                configs:
                  - projects: "D, B"
      - type: conditional_publish
        entries:
          - steps:
              - type: trigger
                configs:
                  - projects: "E"
  - name: "B"
  - name: "C"
  - name: "D"
  - name: "E"
"#;

    assert_edges(&edges_for(yaml, "A"), &["A -> B", "A -> C", "A -> D", "A -> E"]);
}

/// Plain trigger steps in the publish phase are not inspected
#[test]
fn test_bare_publish_trigger_ignored() {
    let yaml = r#"
plugins: [flexible-publish]
jobs:
  - name: "A"
    publishers:
      - type: trigger
        configs:
          - projects: "B"
  - name: "B"
"#;

    assert!(edges_for(yaml, "A").is_empty());
}

/// Wrappers nested inside entries are not descended into
#[test]
fn test_nested_wrapper_not_descended() {
    let yaml = r#"
plugins: [flexible-publish]
jobs:
  - name: "A"
    publishers:
      - type: conditional_publish
        entries:
          - steps:
              - type: conditional_publish
                entries:
                  - steps:
                      - type: trigger
                        configs:
                          - projects: "B"
  - name: "B"
"#;

    assert!(edges_for(yaml, "A").is_empty());
}
