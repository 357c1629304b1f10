//! Templates Module
//!
//! Page identifiers and the rendering seam between handlers and HTML.
//!
//! Handlers never build markup. They assemble a context (a JSON object whose
//! keys are fixed per page) and hand it to the `Renderer` stored in
//! `AppState`. The default renderer is [`HtmlRenderer`]; tests inject their
//! own implementation to inspect the context directly.
//!
//! # Context Keys
//!
//! | Page | Keys |
//! |---|---|
//! | `index` | `data`, `user_id` |
//! | `restaurant` | `data`, `search`, `rating` |
//! | `restaurant_info` | `restaurant`, `dishes`, `reviews` |
//! | `add_restaurant` | `message` |
//! | `add_review` | `data`, `message` |
//! | `add_dish` | `restaurants`, `allergens`, `message` |
//! | `dishes` | `data`, `restaurants`, `allergens` |
//! | `login`, `register` | `message` |

/// Built-in HTML renderer
pub mod html;

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

pub use html::HtmlRenderer;

/// Pages the application can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Index,
    Restaurants,
    RestaurantInfo,
    AddRestaurant,
    AddReview,
    AddDish,
    Dishes,
    Login,
    Register,
}

impl Template {
    /// Stable template name, matching the file a file-based renderer would load
    pub fn name(self) -> &'static str {
        match self {
            Template::Index => "index",
            Template::Restaurants => "restaurant",
            Template::RestaurantInfo => "restaurant_info",
            Template::AddRestaurant => "add_restaurant",
            Template::AddReview => "add_review",
            Template::AddDish => "add_dish",
            Template::Dishes => "dishes",
            Template::Login => "login",
            Template::Register => "register",
        }
    }
}

/// Rendering failure
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template '{template}' failed to render: {message}")]
    Template {
        template: &'static str,
        message: String,
    },
}

impl RenderError {
    pub fn template(template: &'static str, message: impl Into<String>) -> Self {
        Self::Template {
            template,
            message: message.into(),
        }
    }
}

/// Turns a page context into HTML
///
/// Implementations must be shareable across request tasks.
pub trait Renderer: Send + Sync {
    fn render(&self, template: Template, context: &Value) -> Result<String, RenderError>;
}

/// Rendered page ready to be returned from a handler
#[derive(Debug, Clone)]
pub struct Page(pub String);

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        ([(CONTENT_TYPE, "text/html; charset=utf-8")], self.0).into_response()
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
