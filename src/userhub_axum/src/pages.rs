//! Minimal server-rendered form pages.

use axum::response::Html;

use crate::flash::Flash;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body><h1>{title}</h1>{body}</body></html>"
    )
}

fn flash_banner(flash: Option<Flash>) -> String {
    match flash {
        Some(flash) => format!("<p class=\"flash\">{}</p>", escape(&flash.message())),
        None => String::new(),
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn login_page(flash: Option<Flash>) -> Html<String> {
    let body = format!(
        "{}<form method=\"post\" action=\"/users/login\">\
         <label>Email <input type=\"email\" name=\"email\" required></label>\
         <label>Password <input type=\"password\" name=\"password\" required></label>\
         <button type=\"submit\">Log in</button></form>",
        flash_banner(flash)
    );
    Html(layout("Log in", &body))
}

pub fn add_user_page(flash: Option<Flash>) -> Html<String> {
    let body = format!(
        "{}<form method=\"post\" action=\"/users/add\">\
         <label>Email <input type=\"email\" name=\"email\" required></label>\
         <label>Password <input type=\"password\" name=\"password\" required></label>\
         <button type=\"submit\">Create account</button></form>",
        flash_banner(flash)
    );
    Html(layout("Add user", &body))
}

pub fn edit_page(email: &str, flash: Option<Flash>) -> Html<String> {
    let body = format!(
        "{}<p>Signed in as {}</p>\
         <form method=\"post\" action=\"/users/edit\">\
         <label>New password (leave empty to keep the current one) \
         <input type=\"password\" name=\"password\"></label>\
         <button type=\"submit\">Save</button></form>",
        flash_banner(flash),
        escape(email)
    );
    Html(layout("Edit profile", &body))
}

pub fn dashboard_page(email: &str) -> Html<String> {
    let body = format!(
        "<p>Welcome back, {}.</p><p><a href=\"/users/logout\">Log out</a></p>",
        escape(email)
    );
    Html(layout("Dashboard", &body))
}
