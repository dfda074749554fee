//! Plugin host and built-in plugins.
//!
//! Plugins are resolved through a static registry (identifier → factory)
//! rather than by runtime module loading, so an unknown name is a typed
//! error instead of an uncaught failure. A plugin registers handlers on
//! the host during `apply`; each extension point holds an ordered chain
//! of handlers invoked in registration order, each receiving the previous
//! handler's output.

mod mask_secrets;
mod registry;
mod toc;

pub use mask_secrets::MASK;
pub use registry::{available_plugins, load_plugins};

use thiserror::Error;

use crate::env_file::{AllVariables, FileVariables};

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("unknown plugin \"{0}\"")]
    Unknown(String),
    #[error("plugin \"{name}\" failed to initialize: {reason}")]
    Init { name: String, reason: String },
}

pub type BeforeParseHook = Box<dyn Fn(&str, FileVariables) -> FileVariables>;
pub type BeforeOutputHook = Box<dyn Fn(String, &AllVariables) -> String>;

/// A loadable unit of report customization.
///
/// `apply` is invoked once at startup and is where the plugin registers
/// its handlers; it consumes the plugin so handlers can take ownership of
/// any prepared state.
pub trait Plugin {
    fn apply(self: Box<Self>, host: &mut PluginHost);
}

/// The two extension points of the pipeline.
///
/// - `before_parse`: once per declaration file, right after parsing and
///   before exclusion filtering; may mutate or replace the mapping.
/// - `before_output`: once, after rendering and before the file write;
///   may replace the rendered text entirely.
#[derive(Default)]
pub struct PluginHost {
    before_parse: Vec<BeforeParseHook>,
    before_output: Vec<BeforeOutputHook>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_before_parse<F>(&mut self, hook: F)
    where
        F: Fn(&str, FileVariables) -> FileVariables + 'static,
    {
        self.before_parse.push(Box::new(hook));
    }

    pub fn on_before_output<F>(&mut self, hook: F)
    where
        F: Fn(String, &AllVariables) -> String + 'static,
    {
        self.before_output.push(Box::new(hook));
    }

    pub fn run_before_parse(&self, file: &str, variables: FileVariables) -> FileVariables {
        self.before_parse
            .iter()
            .fold(variables, |vars, hook| hook(file, vars))
    }

    pub fn run_before_output(&self, rendered: String, all: &AllVariables) -> String {
        self.before_output
            .iter()
            .fold(rendered, |text, hook| hook(text, all))
    }
}
