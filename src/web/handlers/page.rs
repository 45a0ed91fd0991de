//! Review page handler

use crate::state::AppState;
use axum::{extract::State, response::Html};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let html = match state.templates.render_index(&state.config.model) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render review page: {:#}", e);
            // Fallback error page
            r#"<!DOCTYPE html>
            <html>
            <head><title>Error</title></head>
            <body>
                <h1>Error rendering review page</h1>
                <p>Check the server logs for details.</p>
            </body>
            </html>"#
                .to_string()
        }
    };

    Html(html)
}
