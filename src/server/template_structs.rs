//! Askama template structs for the demo pages.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Every page extends `base.html`, which renders the Bootstrap references
//! through the `bootstrap` field.

use askama::Template;

use crate::extension::Bootstrap;

/// Helper struct for form fields on the index page.
pub struct FieldRow {
    pub name: String,
    pub label: String,
    pub input_type: String,
    pub value: String,
    pub hidden: bool,
}

/// Sign-up demo page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub bootstrap: &'a Bootstrap,
    pub serve_local: bool,
    pub fields: Vec<FieldRow>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub bootstrap: &'a Bootstrap,
    pub message: &'a str,
}
