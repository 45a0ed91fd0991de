//! MiniJinja template engine wrapper

use anyhow::Result;
use minijinja::{context, Environment, Value};

const INDEX_TEMPLATE: &str = include_str!("../../web/templates/index.html");

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_debug(cfg!(debug_assertions));

        // Templates are compiled in; no filesystem lookups at runtime
        env.add_template("index.html", INDEX_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(ctx)?)
    }

    /// Render the review page
    pub fn render_index(&self, model: &str) -> Result<String> {
        self.render("index.html", context! { model => model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_renders_with_model_name() -> Result<()> {
        let engine = TemplateEngine::new()?;
        let html = engine.render_index("gpt-oss:20b")?;

        assert!(html.contains("gpt-oss:20b"));
        assert!(html.contains("/api/review"));

        Ok(())
    }
}
