//! Greeting handler.

use axum::response::Html;

use crate::input::sanitize_input;
use crate::web::dto::HelloQuery;
use crate::web::extract::FirstQuery;

/// GET /hello?name= - Render an HTML greeting with the name escaped.
///
/// Never fails: a repeated `name` uses its first value.
pub async fn hello(FirstQuery(query): FirstQuery<HelloQuery>) -> Html<String> {
    let name = query.name.unwrap_or_else(|| "World".to_string());
    Html(render_greeting(&name))
}

fn render_greeting(name: &str) -> String {
    format!("Hello {}!", sanitize_input(Some(name)))
}
