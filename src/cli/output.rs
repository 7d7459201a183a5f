//! CLI output formatting

use crate::graph::Edge;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");
pub static ARROW: Emoji<'_, '_> = Emoji("→", "->");

/// Format an edge for display
pub fn format_edge(edge: &Edge) -> String {
    format!(
        "{} {} {}",
        style(&edge.source).bold(),
        ARROW,
        style(&edge.target).cyan()
    )
}

/// Format an unresolved trigger target for display
pub fn format_unresolved(job: &str, target: &str) -> String {
    format!(
        "{}{} triggers unknown job {}",
        WARN,
        style(job).bold(),
        style(format!("'{}'", target)).yellow()
    )
}

/// Sort edges for stable display
pub fn sorted_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Vec<&'a Edge> {
    let mut edges: Vec<&Edge> = edges.into_iter().collect();
    edges.sort();
    edges
}
