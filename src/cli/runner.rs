//! CLI runner - executes commands

use crate::automap::{AutoMapper, OverrideSpec};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::MappingSettings;
use crate::descriptor::TypeRegistry;
use crate::error::{Error, Result};
use crate::loader::load_types;
use crate::output::MappingDocument;
use crate::types::TypeName;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Overrides per type name
type OverrideFile = BTreeMap<String, OverrideSpec>;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result
    pub fn run(&self) -> Result<()> {
        let message = self.execute()?;
        self.output_message(&message);
        Ok(())
    }

    /// Run the CLI command and return its result
    pub fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::Map {
                type_names,
                max_repeat,
                overrides,
            } => self.map(type_names, *max_repeat, overrides.as_deref()),
            Commands::ListTypes => self.list_types(),
            Commands::Validate => self.validate(),
        }
    }

    /// Load type definitions
    fn load_registry(&self) -> Result<TypeRegistry> {
        let path = self
            .cli
            .types
            .as_ref()
            .ok_or_else(|| Error::config("Type definitions not specified (use -t flag)"))?;
        load_types(path)
    }

    /// Load mapping settings, or defaults when none are given
    fn load_settings(&self) -> Result<MappingSettings> {
        match &self.cli.settings {
            Some(path) => MappingSettings::from_file(path),
            None => Ok(MappingSettings::default()),
        }
    }

    /// Load an override file
    fn load_overrides(path: &Path, registry: &TypeRegistry) -> Result<OverrideFile> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let overrides: OverrideFile = serde_yaml::from_str(&content)
            .map_err(|e| Error::override_shape("<root>", e.to_string()))?;

        for (type_name, spec) in &overrides {
            if !registry.contains(type_name) {
                return Err(Error::unknown_type(type_name.as_str()));
            }
            spec.validate()?;
        }

        Ok(overrides)
    }

    /// Map the requested types into one document
    fn map(
        &self,
        type_names: &[String],
        max_repeat: Option<usize>,
        overrides: Option<&Path>,
    ) -> Result<Value> {
        let registry = self.load_registry()?;
        let settings = self.load_settings()?;
        let overrides = match overrides {
            Some(path) => Self::load_overrides(path, &registry)?,
            None => OverrideFile::new(),
        };

        let mut mapper = AutoMapper::new(&registry).with_settings(settings);
        if let Some(max_repeat) = max_repeat {
            mapper = mapper.with_max_repeat(max_repeat);
        }

        let mut document = MappingDocument::new();
        for type_name in type_names {
            let type_name = TypeName::new(type_name.as_str());
            let node = mapper.automap_with(&type_name, overrides.get(type_name.as_str()))?;
            document.insert(mapper.mapping_name(&type_name)?, node)?;
        }

        Ok(document.to_json())
    }

    /// List declared types
    fn list_types(&self) -> Result<Value> {
        let registry = self.load_registry()?;

        let types: Vec<Value> = registry
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "mapping_name": t.mapping_name,
                    "fields": t.fields.len()
                })
            })
            .collect();

        Ok(json!({ "types": types }))
    }

    /// Validate definitions and settings
    fn validate(&self) -> Result<Value> {
        let registry = self.load_registry()?;
        let settings = self.load_settings()?;
        let mapper = AutoMapper::new(&registry).with_settings(settings);

        for descriptor in registry.iter() {
            mapper.automap(&descriptor.name)?;
        }

        Ok(json!({
            "valid": true,
            "types": registry.len(),
            "message": format!("{} type(s) mapped without errors", registry.len())
        }))
    }

    /// Output a message in the selected format
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
