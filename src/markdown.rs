//! Recipe Markdown Rendering
//!
//! Chat models answer in Markdown. Render it with pulldown-cmark, but
//! treat any raw HTML in the answer as text so it is escaped.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Render recipe text to HTML
pub fn render_recipe(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = parser.map(escape_raw_html);
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(CowStr::from(html.into_string())),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list() {
        let html = render_recipe("## 材料\n\n- にんじん\n- トマト\n");
        assert!(html.contains("<h2>材料</h2>"));
        assert!(html.contains("<li>にんじん</li>"));
        assert!(html.contains("<li>トマト</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_recipe("Recipe: <script>alert(1)</script> stir-fry.");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render_recipe("Recipe: stir-fry."), "<p>Recipe: stir-fry.</p>\n");
    }
}
