use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::{
    entities::EnvironmentDescriptor,
    naming::{Role, env_instance},
    value_objects::ArtifactKind,
};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder regex"));

/// Variables available to templates as `{{KEY}}`.
///
/// Built once per render from an [`EnvironmentDescriptor`]. Standard keys:
///
/// - one per [`Role`] (`IF`, `DRIVER`, `BASE_TEST`, ...) holding `<env>_<role>`
/// - one per artifact file (`IF_FILE`, `DRV_FILE`, `SEQ_LIB_FILE`, ...)
/// - `ENV_NAME`, `ENV_INST`, `DUT_FILE`, `DUT_MODULE`, `AGENT_COUNT`
///
/// Renderers add their own multi-line sections (`SIGNALS`, `DUT_INSTANCE`)
/// with [`RenderContext::with_variable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn from_descriptor(desc: &EnvironmentDescriptor) -> Self {
        let env = desc.env_name();
        let mut vars = BTreeMap::new();

        vars.insert("ENV_NAME".to_string(), env.to_string());
        for role in Role::ALL {
            vars.insert(role.key().to_string(), role.ident(env));
        }
        for kind in ArtifactKind::ALL {
            vars.insert(kind.file_key(), kind.file_name(env, desc.file_extension()));
        }
        vars.insert("ENV_INST".to_string(), env_instance(env));
        vars.insert("DUT_FILE".to_string(), desc.dut_file().to_string());
        vars.insert("DUT_MODULE".to_string(), desc.dut_module().to_string());
        vars.insert("AGENT_COUNT".to_string(), desc.agent_count().to_string());

        Self { variables: vars }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` with its value in one pass over the template.
    ///
    /// Substituted values are not scanned again. Unknown placeholders are
    /// left as they are.
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
