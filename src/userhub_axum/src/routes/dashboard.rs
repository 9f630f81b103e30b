//! Post-login landing page.

use axum::{Extension, response::Html};
use userhub_adapters::SessionClaims;

use crate::pages;

pub async fn dashboard(Extension(claims): Extension<SessionClaims>) -> Html<String> {
    pages::dashboard_page(&claims.sub)
}
