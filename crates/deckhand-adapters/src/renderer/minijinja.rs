//! MiniJinja-based template renderer.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::instrument;

use deckhand_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    error::DeckhandResult,
};

/// Renders templates with Jinja syntax: `{{ var }}`, `{% if %}`, `{% for %}`
/// and the builtin filters.
///
/// Output is never HTML-escaped, since every artifact is YAML or JSON.
/// Printing an undefined value is an error; testing one in `{% if %}` is not.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip(self, source, context))]
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &serde_json::Value,
    ) -> DeckhandResult<String> {
        let failed = |e: minijinja::Error| ApplicationError::RenderingFailed {
            template: name.to_string(),
            reason: e.to_string(),
        };

        let template = self
            .env
            .template_from_named_str(name, source)
            .map_err(failed)?;
        Ok(template.render(context).map_err(failed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_core::error::DeckhandError;
    use serde_json::json;

    fn render(source: &str, ctx: serde_json::Value) -> DeckhandResult<String> {
        MiniJinjaRenderer::new().render("test", source, &ctx)
    }

    #[test]
    fn substitutes_nested_values() {
        let out = render(
            "name: {{ config.name }}\ntype: {{ deployment.type }}\n",
            json!({"config": {"name": "AcmeProject"}, "deployment": {"type": "CF"}}),
        )
        .unwrap();
        assert_eq!(out, "name: AcmeProject\ntype: CF\n");
    }

    #[test]
    fn does_not_escape_quotes() {
        let out = render("command: {{ command }}", json!({"command": "\"'Acme'\""})).unwrap();
        assert_eq!(out, "command: \"'Acme'\"");
    }

    #[test]
    fn conditionals_and_loops() {
        let source = "{% if env %}env:\n{% for k, v in env|items %}  {{ k }}: {{ v }}\n{% endfor %}{% endif %}";
        assert_eq!(
            render(source, json!({"env": {"A": "1", "B": "2"}})).unwrap(),
            "env:\n  A: 1\n  B: 2\n"
        );
        assert_eq!(render(source, json!({})).unwrap(), "");
    }

    #[test]
    fn literal_placeholders_survive() {
        let out = render(
            "ts: {{ timestamp }}",
            json!({"timestamp": "{{timestamp}}"}),
        )
        .unwrap();
        assert_eq!(out, "ts: {{timestamp}}");
    }

    #[test]
    fn printing_missing_binding_fails() {
        let err = render("{{ missing }}", json!({})).unwrap_err();
        assert!(matches!(
            err,
            DeckhandError::Application(ApplicationError::RenderingFailed { ref template, .. })
                if template == "test"
        ));
    }

    #[test]
    fn malformed_template_fails() {
        assert!(render("{% if x %}unterminated", json!({"x": true})).is_err());
    }

    #[test]
    fn indents_multiline_scripts() {
        let out = render(
            "script: |-\n{{ script | indent(4, true) }}",
            json!({"script": "#!/bin/bash\nmake"}),
        )
        .unwrap();
        assert_eq!(out, "script: |-\n    #!/bin/bash\n    make");
    }
}
