// src/test_util.rs
use yew::{BaseComponent, ServerRenderer};

/// Render a component to a plain HTML string (no hydration markers).
pub async fn render_with<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
