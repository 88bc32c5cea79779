//! Output formatting for the CLI.

use hearth_fs::Layout;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print output in the specified format.
pub fn print<T: Serialize + HumanDisplay>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", value.human_display()),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).expect("Failed to serialize to JSON")
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(value).expect("Failed to serialize to YAML")
            );
        }
    }
}

/// Print a success message.
pub fn print_success(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{message}"),
        OutputFormat::Json => {
            println!(r#"{{"status": "ok", "message": "{message}"}}"#);
        }
        OutputFormat::Yaml => {
            println!("status: ok\nmessage: {message}");
        }
    }
}

/// Trait for human-readable display.
pub trait HumanDisplay {
    fn human_display(&self) -> String;
}

/// Serializable view of the directory layout for `hearth paths`.
#[derive(Debug, Serialize)]
pub struct LayoutView {
    pub root: PathBuf,
    pub apps: PathBuf,
    pub actions: PathBuf,
    pub chains: PathBuf,
    pub chain_head: PathBuf,
    pub data: PathBuf,
    pub keys: PathBuf,
    pub keys_data: PathBuf,
    pub key_names: PathBuf,
    pub languages: PathBuf,
    pub services: PathBuf,
    pub scratch: PathBuf,
}

impl From<&Layout> for LayoutView {
    fn from(layout: &Layout) -> Self {
        Self {
            root: layout.root().to_path_buf(),
            apps: layout.apps(),
            actions: layout.actions(),
            chains: layout.chains(),
            chain_head: layout.head(),
            data: layout.data(),
            keys: layout.keys(),
            keys_data: layout.keys_data(),
            key_names: layout.key_names(),
            languages: layout.languages(),
            services: layout.services(),
            scratch: layout.scratch(),
        }
    }
}

impl HumanDisplay for LayoutView {
    fn human_display(&self) -> String {
        let mut out = String::new();

        writeln!(out, "Root:       {}", self.root.display()).unwrap();
        writeln!(out, "Apps:       {}", self.apps.display()).unwrap();
        writeln!(out, "Actions:    {}", self.actions.display()).unwrap();
        writeln!(out, "Chains:     {}", self.chains.display()).unwrap();
        writeln!(out, "Chain HEAD: {}", self.chain_head.display()).unwrap();
        writeln!(out, "Data:       {}", self.data.display()).unwrap();
        writeln!(out, "Keys:       {}", self.keys.display()).unwrap();
        writeln!(out, "Key data:   {}", self.keys_data.display()).unwrap();
        writeln!(out, "Key names:  {}", self.key_names.display()).unwrap();
        writeln!(out, "Languages:  {}", self.languages.display()).unwrap();
        writeln!(out, "Services:   {}", self.services.display()).unwrap();
        writeln!(out, "Scratch:    {}", self.scratch.display()).unwrap();

        out
    }
}
