// src/main.rs
use std::rc::Rc;

use gloo::console;

mod components;
mod config;
mod content;
mod icons;
mod page;
#[cfg(test)]
mod test_util;

use config::{ContentSource, Resolved};
use page::{App, AppProps};

fn main() {
    let year = config::current_year();

    let raw = match config::embedded_content_json() {
        Ok(raw) => raw,
        Err(e) => {
            console::error!(format!("Reading embedded content failed: {e}"));
            None
        }
    };

    let Resolved { content, source } = config::resolve_content(raw.as_deref(), year);
    if let ContentSource::Fallback(reason) = &source {
        console::error!(format!("{reason}; using built-in content"));
    }
    console::log!(format!(
        "{}: {} content, contact form {}",
        content.brand.name,
        source.label(),
        if content.contact.has_form() { "enabled" } else { "disabled" }
    ));

    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
