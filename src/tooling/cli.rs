//! CLI Tooling
//!
//! Command-line interface over the ancestry pipeline. Items come from a
//! manifest or from walking the workspace; output is JSON, YAML, a table or an
//! indented tree.

use crate::config::{AncestryConfig, ConfigLoader};
use crate::error::{AncestryError, Result};
use crate::item::Files;
use crate::logging::LoggingConfig;
use crate::manifest::load_manifest;
use crate::pipeline::AncestryPipeline;
use crate::tree::{walk, AncestryGraph, WalkerConfig};
use crate::views::{render_json, render_table, render_tree, NodeView};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Ancestry CLI - parent, sibling and child links for path-keyed content
#[derive(Parser)]
#[command(name = "ancestry")]
#[command(about = "Deterministic parent, sibling and child links for path-keyed content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags into the loaded logging configuration.
    pub fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

/// Where items are read from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON or YAML manifest mapping paths to properties (default: walk the workspace)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Maximum directory depth when walking the workspace
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Sort in reverse order
    #[arg(long)]
    pub reverse: bool,

    /// Property to sort by (repeat for tie-breakers)
    #[arg(long = "sort-by")]
    pub sort_by: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    Tree,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute ancestry for every item and print the result
    Build {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "tree")]
        format: OutputFormat,
    },
    /// Print the ancestry node of one item
    Show {
        /// Item path
        path: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the effective configuration
    Config,
}

/// CLI context holding the workspace and the loaded configuration.
pub struct CliContext {
    workspace_root: PathBuf,
    config: AncestryConfig,
}

impl CliContext {
    /// Load configuration for the workspace (or from an explicit file).
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Context with an already-built configuration.
    pub fn with_config(workspace_root: PathBuf, config: AncestryConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &AncestryConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::Build { source, format } => {
                let (files, graph, property) = self.run(source)?;
                info!(items = graph.len(), "Build completed");
                match format {
                    OutputFormat::Json => to_json(&render_json(&graph, &files, &property)),
                    OutputFormat::Yaml => to_yaml(&render_json(&graph, &files, &property)),
                    OutputFormat::Table => Ok(render_table(&graph)),
                    OutputFormat::Tree => Ok(render_tree(&graph)),
                }
            }
            Commands::Show { path, source } => {
                let (_, graph, _) = self.run(source)?;
                let id = graph
                    .id_of(path)
                    .ok_or_else(|| AncestryError::PathNotFound(path.clone()))?;
                to_json(&NodeView::new(&graph, id))
            }
            Commands::Config => to_json(&self.config),
        }
    }

    fn run(&self, source: &SourceArgs) -> Result<(Files, AncestryGraph, String)> {
        let mut options = self.config.ancestry.clone();
        if source.reverse {
            options.reverse = true;
        }
        if !source.sort_by.is_empty() {
            options.sort_by = Some(crate::options::SortKeys::Many(source.sort_by.clone()));
        }
        let pipeline = AncestryPipeline::new(&options)?;

        let mut files = match &source.manifest {
            Some(manifest) => load_manifest(&self.resolve(manifest))?,
            None => walk(
                &self.workspace_root,
                &WalkerConfig {
                    max_depth: source.max_depth,
                    ..WalkerConfig::default()
                },
            )?,
        };

        let graph = pipeline.run(&mut files);
        Ok((files, graph, pipeline.ancestry_property().to_string()))
    }

    fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AncestryError::Render(format!("Failed to render JSON: {}", e)))
}

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value)
        .map_err(|e| AncestryError::Render(format!("Failed to render YAML: {}", e)))
}
