use std::path::Path;

use anyhow::Context as _;
use handlebars::Handlebars;

use crate::context::RenderContext;
use crate::utils;

const TEMPLATE_NAME: &str = "bulletin";

/// A compiled document template with `{{FIELD}}` placeholders. Fields absent
/// from the context render as nothing.
pub struct Template {
    registry: Handlebars<'static>,
}

impl Template {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = utils::read_to_string(path)
            .with_context(|| format!("failed to read template `{}`", path.display()))?;

        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .with_context(|| format!("failed to compile template `{}`", path.display()))?;

        Ok(Self { registry })
    }

    pub fn render(&self, context: &RenderContext) -> anyhow::Result<String> {
        Ok(self.registry.render(TEMPLATE_NAME, context)?)
    }
}
