//! Static plugin registry.

use crate::config::Config;
use crate::reporter;

use super::mask_secrets::MaskSecrets;
use super::toc::TableOfContents;
use super::{Plugin, PluginError, PluginHost};

type Factory = fn(&Config) -> Result<Box<dyn Plugin>, PluginError>;

fn mask_secrets_factory(config: &Config) -> Result<Box<dyn Plugin>, PluginError> {
    Ok(Box::new(MaskSecrets::from_config(config)))
}

fn toc_factory(_config: &Config) -> Result<Box<dyn Plugin>, PluginError> {
    Ok(Box::new(TableOfContents))
}

const REGISTRY: &[(&str, Factory)] = &[
    ("mask-secrets", mask_secrets_factory),
    ("toc", toc_factory),
];

/// Identifiers accepted in the `plugins` configuration list.
pub fn available_plugins() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

fn resolve(name: &str) -> Result<Factory, PluginError> {
    REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, factory)| *factory)
        .ok_or_else(|| PluginError::Unknown(name.to_string()))
}

/// Build a host with every configured plugin applied, in order. A plugin
/// that fails to resolve or initialize is reported and skipped; the
/// remaining plugins still load.
pub fn load_plugins(names: &[String], config: &Config) -> PluginHost {
    let mut host = PluginHost::new();

    for name in names {
        let loaded = resolve(name).and_then(|factory| factory(config));
        match loaded {
            Ok(plugin) => plugin.apply(&mut host),
            Err(err) => reporter::warn(format!("Skipping plugin: {}", err)),
        }
    }

    host
}
