use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use trigger_graph::cli::commands::{EdgesCommand, ValidateCommand};
use trigger_graph::cli::output::*;
use trigger_graph::cli::{Cli, Command};
use trigger_graph::{Capabilities, Edge, EdgeDiscoverer, EdgeProvider, InMemoryRegistry, InstanceConfig, Job, JobRegistry};

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Edges(cmd) => print_edges(cmd)?,
        Command::Validate(cmd) => validate_instance(cmd)?,
    }

    Ok(())
}

fn load_registry(file: &str) -> Result<(InstanceConfig, InMemoryRegistry)> {
    let config = InstanceConfig::from_file(file)
        .with_context(|| format!("Failed to load instance config from {}", file))?;
    let registry = InMemoryRegistry::from_config(&config)
        .context("Failed to build job registry")?;
    debug!(jobs = registry.len(), "loaded job registry");
    Ok((config, registry))
}

fn print_edges(cmd: &EdgesCommand) -> Result<()> {
    let (config, registry) = load_registry(&cmd.file)?;
    let capabilities = Capabilities::detect(&config);
    debug!(conditional_publish = capabilities.conditional_publish, "detected capabilities");
    let discoverer = EdgeDiscoverer::new(&registry, capabilities);

    let jobs: Vec<&Job> = match &cmd.job {
        Some(name) => {
            let job = registry
                .get(name)
                .with_context(|| format!("Job not found: {}", name))?;
            vec![job]
        }
        None => registry.jobs(),
    };

    let edges: HashSet<Edge> = jobs
        .iter()
        .flat_map(|job| discoverer.edges_incident_with(job))
        .collect();
    let edges = sorted_edges(&edges);

    if cmd.json {
        let data = serde_json::json!({ "edges": edges });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if edges.is_empty() {
        println!("{} No trigger edges found", INFO);
        return Ok(());
    }

    for edge in &edges {
        println!("  {}", format_edge(edge));
    }

    Ok(())
}

fn validate_instance(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating instance configuration...", INFO);

    let (config, registry) = match load_registry(&cmd.file) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    };

    let discoverer = EdgeDiscoverer::new(&registry, Capabilities::detect(&config));
    let unresolved: Vec<(&Job, &str)> = registry
        .jobs()
        .into_iter()
        .flat_map(|job| {
            discoverer
                .unresolved_targets(job)
                .into_iter()
                .map(move |target| (job, target))
        })
        .collect();

    println!("{} Instance configuration is valid!", CHECK);
    println!("  Jobs: {}", style(config.job_count()).cyan());
    println!("  Folders: {}", style(config.folder_count()).cyan());
    println!("  Plugins: {}", style(config.plugins.len()).cyan());

    for (job, target) in &unresolved {
        println!("  {}", format_unresolved(job.full_name(), target));
    }

    if cmd.json {
        let data = serde_json::json!({
            "jobs": config.job_count(),
            "folders": config.folder_count(),
            "plugins": config.plugins,
            "unresolved": unresolved
                .iter()
                .map(|(job, target)| serde_json::json!({ "job": job.id, "target": target }))
                .collect::<Vec<_>>(),
        });
        println!("\n{}", serde_json::to_string_pretty(&data)?);
    }

    Ok(())
}
