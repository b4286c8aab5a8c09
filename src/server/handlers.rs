//! HTTP request handlers for the demo server.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::forms::{FormField, InputType};

use super::template_structs::{ErrorTemplate, FieldRow, IndexTemplate};
use super::AppState;

/// Fields of the demo sign-up form.
const SIGNUP_FIELDS: &[(&str, &str, InputType)] = &[
    ("csrf_token", "CSRF token", InputType::Hidden),
    ("email", "Email address", InputType::Email),
    ("password", "Password", InputType::Password),
];

struct PageField {
    name: &'static str,
    label: &'static str,
    input_type: InputType,
}

impl FormField for PageField {
    fn name(&self) -> &str {
        self.name
    }

    fn input_type(&self) -> InputType {
        self.input_type
    }
}

fn input_type_attr(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Hidden => "hidden",
        InputType::Text | InputType::Other => "text",
        InputType::Password => "password",
        InputType::Email => "email",
        InputType::Checkbox => "checkbox",
        InputType::Submit => "submit",
    }
}

/// Render the demo page using the Bootstrap helpers.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let bootstrap = state.bootstrap.as_ref();

    let mut fields = Vec::with_capacity(SIGNUP_FIELDS.len());
    for &(name, label, input_type) in SIGNUP_FIELDS {
        let field = PageField {
            name,
            label,
            input_type,
        };
        let hidden = match bootstrap.is_hidden_field(&field) {
            Ok(hidden) => hidden,
            Err(e) => {
                let msg = format!("Failed to render form: {}", e);
                let template = ErrorTemplate {
                    title: "Error",
                    bootstrap,
                    message: &msg,
                };
                return Html(template.render().unwrap_or(msg));
            }
        };
        fields.push(FieldRow {
            name: field.name().to_string(),
            label: field.label.to_string(),
            input_type: input_type_attr(field.input_type).to_string(),
            value: if hidden { "demo-token".to_string() } else { String::new() },
            hidden,
        });
    }

    let template = IndexTemplate {
        title: "Bootstrap assets",
        bootstrap,
        serve_local: bootstrap.generator().serve_local(),
        fields,
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
