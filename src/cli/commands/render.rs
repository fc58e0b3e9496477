//! Render command handler
//!
//! Loads the reaction dataset, builds the network, renders it in the
//! requested format, writes the file and optionally opens it.

use crate::args::RenderArgs;
use reaction_network::config::Config;
use reaction_network::core::{
    builder::{build_graph, BuildMode, BuildReport},
    dataset::load_reactions_or_empty,
    models::ReactionGraph,
    present,
    render::{renderer_for, OutputFormat, RenderOptions},
};
use reaction_network::{error, info, verbose};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the render command.
///
/// Every failure is logged and printed; the process still exits normally.
pub fn run(args: &RenderArgs, config: &Config) {
    if let Err(err) = render_network(args, config) {
        error!("Rendering failed: {err}");
        eprintln!("{err}");
    }
}

/// Default output file name for a mode and format
fn default_file_name(mode: BuildMode, format: OutputFormat) -> String {
    let stem = match mode {
        BuildMode::Full => "reaction_network",
        BuildMode::SingleReactant => "reaction_network_simplified",
    };
    format!("{stem}.{}", format.extension())
}

/// Output path: explicit `--output`, else `out_dir/<default name>`
fn output_path(
    args: &RenderArgs,
    config: &Config,
    mode: BuildMode,
    format: OutputFormat,
) -> PathBuf {
    args.output.clone().unwrap_or_else(|| {
        let out_dir = if config.paths.out_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&config.paths.out_dir)
        };
        out_dir.join(default_file_name(mode, format))
    })
}

fn render_network(args: &RenderArgs, config: &Config) -> Result<(), String> {
    let format = args
        .format
        .as_deref()
        .map_or(Ok(OutputFormat::Html), OutputFormat::from_str)
        .map_err(|e| format!("✗ {e}. Use: html or markdown"))?;
    let mode = if args.simplified {
        BuildMode::SingleReactant
    } else {
        BuildMode::Full
    };

    let input: PathBuf = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.paths.data_file));
    verbose!("Loading reactions from {}", input.display());
    let dataset = load_reactions_or_empty(&input);
    if dataset.is_empty() {
        println!("No reaction data to process. Exiting.");
        return Ok(());
    }

    let (graph, report) = build_graph(&dataset, mode);
    info!("Built reaction network: {report}");
    if graph.is_empty() {
        println!("No reactions left to draw. Exiting.");
        return Ok(());
    }

    let options =
        RenderOptions::from_config(&config.render, mode).with_pathway_toggle(args.pathway_toggle);
    let path = output_path(args, config, mode, format);
    renderer_for(format, options)
        .generate(&graph, &path)
        .map_err(|e| format!("✗ An error occurred during {format} generation: {e}"))?;

    println!("✓ Successfully generated '{}'", path.display());
    info!("Network exported to: {}", path.display());
    print_summary(&graph, &report);

    if format == OutputFormat::Html && config.render.open_browser {
        open(&path);
    }
    Ok(())
}

fn open(path: &Path) {
    verbose!("Opening {} in the default browser", path.display());
    if !present::open_in_browser(path) {
        println!("ℹ Open {} manually to view the network.", path.display());
    }
}

fn print_summary(graph: &ReactionGraph, report: &BuildReport) {
    let intermediates = graph.intermediate_count();
    println!("\n=== Summary ===");
    println!("Reactions drawn: {}", report.processed);
    println!("Molecules: {}", graph.node_count() - intermediates);
    println!("Multi-reactant reactions: {intermediates}");
    println!("Edges: {}", graph.edge_count());
    if report.malformed > 0 {
        println!("⚠️  {} malformed reactions skipped", report.malformed);
    }
    if report.skipped_multi_reactant > 0 {
        println!(
            "⚠️  {} multi-reactant reactions skipped",
            report.skipped_multi_reactant
        );
    }
}
