// src/config.rs
use web_sys::window;

use crate::content::SiteContent;

/// `<script id="site-content" type="application/json">` in index.html.
pub const CONTENT_ELEMENT_ID: &str = "site-content";

#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    Builtin,
    Embedded,
    /// The embedded document was present but unusable.
    Fallback(String),
}

impl ContentSource {
    pub fn label(&self) -> &'static str {
        match self {
            ContentSource::Builtin => "built-in",
            ContentSource::Embedded => "embedded JSON",
            ContentSource::Fallback(_) => "built-in (embedded JSON rejected)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub content: SiteContent,
    pub source: ContentSource,
}

/// Pick the content for this page load. Never fails: a blank document means
/// "use the built-in content", a broken one is reported and ignored.
pub fn resolve_content(raw: Option<&str>, year: i32) -> Resolved {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());

    let Some(raw) = raw else {
        return Resolved {
            content: SiteContent::idcprep360(year),
            source: ContentSource::Builtin,
        };
    };

    match SiteContent::from_json(raw, year) {
        Ok(content) => Resolved {
            content,
            source: ContentSource::Embedded,
        },
        Err(e) => Resolved {
            content: SiteContent::idcprep360(year),
            source: ContentSource::Fallback(e),
        },
    }
}

pub fn embedded_content_json() -> Result<Option<String>, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    Ok(doc
        .get_element_by_id(CONTENT_ELEMENT_ID)
        .and_then(|el| el.text_content()))
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_document_uses_builtin() {
        for raw in [None, Some(""), Some("  \n\t ")] {
            let r = resolve_content(raw, 2026);
            assert_eq!(r.source, ContentSource::Builtin);
            assert_eq!(r.content, SiteContent::idcprep360(2026));
        }
    }

    #[test]
    fn valid_document_is_used() {
        let mut custom = SiteContent::idcprep360(2026);
        custom.brand.logo_text = "Blue Hole Academy".into();
        custom.footer.note = "© {year} Blue Hole".into();
        let raw = serde_json::to_string(&custom).unwrap();

        let r = resolve_content(Some(&raw), 2030);
        assert_eq!(r.source, ContentSource::Embedded);
        assert_eq!(r.content.brand.logo_text, "Blue Hole Academy");
        assert_eq!(r.content.footer.note, "© 2030 Blue Hole");
    }

    #[test]
    fn broken_document_falls_back_with_reason() {
        let r = resolve_content(Some("{ not json"), 2026);
        assert_eq!(r.content, SiteContent::idcprep360(2026));
        match r.source {
            ContentSource::Fallback(msg) => assert!(msg.contains("Failed parsing site content")),
            other => panic!("unexpected source {other:?}"),
        }
    }
}
