//! Storage markup vocabulary: element constructors and escaping.
//!
//! Every tag the converter emits is spelled here so the block and inline
//! code never hardcodes markup strings.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` so text is safe in element content
/// and in quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Wraps already-formatted content in `<tag>...</tag>`.
pub fn element(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

pub fn heading(level: u8, content: &str) -> String {
    element(&format!("h{level}"), content)
}

pub fn paragraph(content: &str) -> String {
    element("p", content)
}

pub fn rule() -> String {
    "<hr/>".to_string()
}

/// A list holding exactly one item. Adjacent items are not merged.
pub fn single_item_list(ordered: bool, content: &str) -> String {
    let list = if ordered { "ol" } else { "ul" };
    element(list, &element("li", content))
}

pub fn anchor(href: &str, content: &str) -> String {
    format!(r#"<a href="{}">{content}</a>"#, escape(href))
}

/// The code macro with a language parameter and a verbatim CDATA body.
///
/// A literal `]]>` in the body would end the CDATA section early, so it is
/// split across two sections; the text a reader sees is unchanged.
pub fn code_macro(language: &str, body: &str) -> String {
    format!(
        concat!(
            r#"<ac:structured-macro ac:name="code">"#,
            r#"<ac:parameter ac:name="language">{}</ac:parameter>"#,
            "<ac:plain-text-body><![CDATA[{}]]></ac:plain-text-body>",
            "</ac:structured-macro>",
        ),
        escape(language),
        body.replace("]]>", "]]]]><![CDATA[>"),
    )
}
