// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, ClientConfig};
use crate::errors::ConfigError;
use crate::models::{RawFormValues, FIELD_NAMES};

/// Predict a delivery time from form values.
#[derive(Parser, Debug)]
#[command(name = "delivery-predict", version)]
pub struct Cli {
    /// Form values as TOML, or JSON when the file ends in .json
    pub form_file: Option<PathBuf>,

    /// Set one form field, e.g. `--set distance=4.2`; wins over the form file
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE", value_parser = parse_field_override)]
    pub overrides: Vec<FieldOverride>,

    /// Client config TOML; when absent PREDICT_API_BASE and PREDICT_PATH are used
    #[arg(short, long, env = "PREDICT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldOverride {
    pub field: String,
    pub value: String,
}

fn parse_field_override(arg: &str) -> Result<FieldOverride, String> {
    let (field, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", arg))?;
    let field = field.trim();
    if !FIELD_NAMES.contains(&field) {
        return Err(format!("unknown form field '{}' (expected one of {})", field, FIELD_NAMES.join(", ")));
    }
    Ok(FieldOverride {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl Cli {
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        match &self.config {
            Some(path) => ClientConfig::from_file(path),
            None => ClientConfig::from_env(),
        }
    }

    /// Form values from the file, if any, with `--set` applied on top.
    pub fn form(&self) -> Result<RawFormValues, ConfigError> {
        let mut form = match &self.form_file {
            Some(path) => config::load_form(path)?,
            None => RawFormValues::default(),
        };
        for o in &self.overrides {
            form.set(&o.field, o.value.as_str());
        }
        Ok(form)
    }
}
