//! Landing page handler.

/// Text returned by the landing page.
pub const WELCOME: &str = "Welcome to the HomePage!";

/// `GET /`
pub async fn home_page() -> &'static str {
    tracing::info!("endpoint hit: home_page");
    WELCOME
}
