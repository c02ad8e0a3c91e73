//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, DocumentArgs, OutputFormat};
use crate::config::{read_json_file, read_text_file, ProviderConfig};
use crate::error::{Error, Result, ResultExt};
use crate::export::{to_catalog_json, to_sdl};
use crate::provider::DynamicTypeProvider;
use crate::synth::SynthesizedType;
use crate::types::JsonValue;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        let provider = self.build_provider()?;
        match &self.cli.command {
            Commands::Shape(args) => self.shape(&provider, args),
            Commands::Instance(args) => self.instance(&provider, args),
            Commands::Catalog { files } => self.catalog(&provider, files),
        }
    }

    /// Build the provider from the config file, if any
    fn build_provider(&self) -> Result<DynamicTypeProvider> {
        match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading provider config");
                let config = ProviderConfig::from_file(path)?;
                DynamicTypeProvider::from_config(&config)
            }
            None => Ok(DynamicTypeProvider::new()),
        }
    }

    /// Synthesize a type and print it
    fn shape(&self, provider: &DynamicTypeProvider, args: &DocumentArgs) -> Result<String> {
        let name = type_name(provider, args);
        let json = read_document(args)?;
        let ty = provider.create_type(&name, json.as_str())?;
        self.render_types(&[ty])
    }

    /// Materialize an instance and print it
    fn instance(&self, provider: &DynamicTypeProvider, args: &DocumentArgs) -> Result<String> {
        if self.cli.format == OutputFormat::Sdl {
            return Err(Error::config("sdl output is only available for types"));
        }

        let name = type_name(provider, args);
        let json = read_document(args)?;
        let instance = provider.create_instance(&name, json.as_str())?;
        self.render_json(&instance.to_json())
    }

    /// Register each file and print every type
    fn catalog(
        &self,
        provider: &DynamicTypeProvider,
        files: &[(String, PathBuf)],
    ) -> Result<String> {
        for (name, path) in files {
            let document = read_json_file(path)?;
            provider
                .synthesizer()
                .create_type_from_value(name, &document)
                .with_context(|| path.display().to_string())?;
        }
        self.render_types(&provider.all_types())
    }

    fn render_types(&self, types: &[Arc<SynthesizedType>]) -> Result<String> {
        match self.cli.format {
            OutputFormat::Sdl => Ok(to_sdl(types)?.trim_end().to_string()),
            OutputFormat::Json | OutputFormat::Pretty => self.render_json(&to_catalog_json(types)?),
        }
    }

    fn render_json(&self, value: &JsonValue) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            _ => serde_json::to_string(value),
        };
        rendered.map_err(Error::Serialize)
    }
}

fn type_name(provider: &DynamicTypeProvider, args: &DocumentArgs) -> String {
    args.name
        .clone()
        .unwrap_or_else(|| provider.default_type_name().to_string())
}

/// Read the JSON text from `--json` or `--file`
fn read_document(args: &DocumentArgs) -> Result<String> {
    match (&args.json, &args.file) {
        (Some(json), _) => Ok(json.clone()),
        (None, Some(path)) => read_text_file(path),
        (None, None) => Err(Error::Input),
    }
}
