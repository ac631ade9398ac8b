use axum::{http::StatusCode, response::Html};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

const TITLE: &str = "Interactive Package Calculator";
const MESSAGE: &str = "Enter pack sizes (comma-separated) and the amount to calculate the optimal package distribution.";

pub async fn index_handler() -> Html<String> {
    Html(
        INDEX_TEMPLATE
            .replace("{{title}}", TITLE)
            .replace("{{message}}", MESSAGE),
    )
}

pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
