//! HTML Pages
//!
//! Handlebars registry over the built-in templates. Handlebars escapes
//! interpolated values by default, so user input echoed back into a form
//! cannot inject markup.

use handlebars::Handlebars;
use serde_json::json;

use crate::error::AuthResult;

/// Rendered page registry
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();

        // Templates are compiled into the binary; registration only fails
        // on a malformed template, which cannot survive a test run.
        registry
            .register_template_string("index", include_str!("../../templates/index.hbs"))
            .expect("built-in index template is well-formed");
        registry
            .register_template_string("register", include_str!("../../templates/register.hbs"))
            .expect("built-in register template is well-formed");
        registry
            .register_template_string("login", include_str!("../../templates/login.hbs"))
            .expect("built-in login template is well-formed");

        Self { registry }
    }

    /// Index page, greeting `name` when a user is logged in.
    pub fn index(&self, name: Option<&str>) -> AuthResult<String> {
        Ok(self.registry.render("index", &json!({ "name": name }))?)
    }

    /// Registration form, re-populated with prior input on error.
    pub fn register(&self, error: Option<&str>, id: &str, name: &str) -> AuthResult<String> {
        Ok(self.registry.render(
            "register",
            &json!({ "error": error, "id": id, "name": name }),
        )?)
    }

    /// Login form, re-populated with prior id on error.
    pub fn login(&self, error: Option<&str>, id: &str) -> AuthResult<String> {
        Ok(self
            .registry
            .render("login", &json!({ "error": error, "id": id }))?)
    }
}

impl Default for Pages {
    fn default() -> Self {
        Self::new()
    }
}
