//! Test utility functions for trigger-graph

#![allow(dead_code)]

use std::collections::HashSet;
use trigger_graph::{Capabilities, Edge, EdgeDiscoverer, EdgeProvider, InMemoryRegistry, InstanceConfig};

/// Build a registry from inline YAML
pub fn registry_from_yaml(yaml: &str) -> (InstanceConfig, InMemoryRegistry) {
    let config = InstanceConfig::from_yaml(yaml).expect("Should parse YAML");
    let registry = InMemoryRegistry::from_config(&config).expect("Should build registry");
    (config, registry)
}

/// Edges of `job` with capabilities detected from the configuration
pub fn edges_for(yaml: &str, job: &str) -> HashSet<Edge> {
    let (config, registry) = registry_from_yaml(yaml);
    edges_with(&registry, Capabilities::detect(&config), job)
}

/// Edges of `job` with explicit capabilities
pub fn edges_with(registry: &InMemoryRegistry, capabilities: Capabilities, job: &str) -> HashSet<Edge> {
    let discoverer = EdgeDiscoverer::new(registry, capabilities);
    let job = registry
        .get(job)
        .unwrap_or_else(|| panic!("Job '{}' should exist", job));
    discoverer.edges_incident_with(job)
}

/// Edges rendered as sorted `source -> target` strings
pub fn edge_strings(edges: &HashSet<Edge>) -> Vec<String> {
    let mut rendered: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
    rendered.sort();
    rendered
}

/// Assert the exact edge set of a job
pub fn assert_edges(edges: &HashSet<Edge>, expected: &[&str]) {
    let actual = edge_strings(edges);
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(actual, expected, "Unexpected edge set");
}
