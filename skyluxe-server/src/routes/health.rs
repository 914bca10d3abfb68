//! Health check page.

use axum::response::Html;

/// The page served at `/`.
pub const HEALTH_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Skyluxe</title>
  </head>
  <body>
    <div style="font-family: sans-serif; text-align: center; padding-top: 50px;">
      <h1 style="color: green;">SERVER IS ONLINE</h1>
      <p>The Skyluxe Travel Engine is running correctly.</p>
      <p>You can now use your mobile app.</p>
    </div>
  </body>
</html>
"#;

/// Shows that the gateway is up.
///
/// Does not touch the flight provider.
pub async fn index() -> Html<&'static str> {
    Html(HEALTH_PAGE)
}
