//! RSS item extraction.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::FetchError;
use crate::types::RawItem;

/// Only the first items of a feed are considered; the rest are dropped.
pub const MAX_ITEMS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
}

impl Field {
    fn from_tag(tag: &BytesStart<'_>) -> Option<Self> {
        match tag.name().as_ref() {
            b"title" => Some(Field::Title),
            b"description" => Some(Field::Description),
            _ => None,
        }
    }
}

/// Parse an RSS document into raw items.
///
/// Looks at the first [`MAX_ITEMS`] `<item>` elements in document order. An
/// item without a `<title>` or `<description>` is skipped but still counts
/// toward that limit. Description text is returned as-is, markup included.
///
/// # Errors
///
/// Returns [`FetchError::Xml`] if the document is not well-formed XML.
pub fn parse_feed(xml: &str) -> Result<Vec<RawItem>, FetchError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut items_seen = 0usize;

    let mut in_item = false;
    let mut field: Option<Field> = None;
    let mut nested_depth = 0usize;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"item" {
                    in_item = true;
                    field = None;
                    nested_depth = 0;
                    title = None;
                    description = None;
                } else if in_item {
                    if field.is_some() {
                        // Markup embedded unescaped inside a field.
                        nested_depth += 1;
                    } else if let Some(f) = Field::from_tag(&e) {
                        field = Some(f);
                        slot(f, &mut title, &mut description).get_or_insert_with(String::new);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if in_item && field.is_none() {
                    if let Some(f) = Field::from_tag(&e) {
                        slot(f, &mut title, &mut description).get_or_insert_with(String::new);
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                if name.as_ref() == b"item" && in_item {
                    in_item = false;
                    field = None;
                    items_seen += 1;

                    match (title.take(), description.take()) {
                        (Some(t), Some(d)) => items.push(RawItem {
                            title: t.trim().to_string(),
                            description: d,
                        }),
                        (t, d) => tracing::debug!(
                            has_title = t.is_some(),
                            has_description = d.is_some(),
                            "skipping feed item with missing field"
                        ),
                    }

                    if items_seen >= MAX_ITEMS {
                        break;
                    }
                } else if field.is_some() {
                    if nested_depth > 0 {
                        nested_depth -= 1;
                    } else {
                        field = None;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(f) = field {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        Err(err) => {
                            // HTML entities such as `&nbsp;` are not XML; decode them leniently.
                            tracing::debug!(error = %err, "falling back to HTML entity decoding");
                            let raw = String::from_utf8_lossy(e.as_ref());
                            html_escape::decode_html_entities(&raw).into_owned()
                        }
                    };
                    append(slot(f, &mut title, &mut description), &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(f) = field {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    append(slot(f, &mut title, &mut description), &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FetchError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

fn slot<'a>(
    field: Field,
    title: &'a mut Option<String>,
    description: &'a mut Option<String>,
) -> &'a mut Option<String> {
    match field {
        Field::Title => title,
        Field::Description => description,
    }
}

fn append(target: &mut Option<String>, text: &str) {
    let buf = target.get_or_insert_with(String::new);
    if !buf.is_empty() {
        buf.push(' ');
    }
    buf.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str) -> String {
        format!("<item><title>{title}</title><link>https://example.com</link><description>{description}</description></item>")
    }

    fn feed(items: &[String]) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>Feed</title>{}</channel></rss>"#,
            items.concat()
        )
    }

    #[test]
    fn parses_title_and_escaped_description() {
        let xml = feed(&[item(
            "Apple beats estimates",
            "&lt;a href=\"https://x\"&gt;Apple beats estimates&lt;/a&gt;&amp;nbsp;Reuters",
        )]);
        let items = parse_feed(&xml).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Apple beats estimates");
        assert_eq!(
            items[0].description,
            "<a href=\"https://x\">Apple beats estimates</a>&nbsp;Reuters"
        );
    }

    #[test]
    fn channel_title_is_not_an_item() {
        let xml = feed(&[]);
        let items = parse_feed(&xml).expect("should parse");
        assert!(items.is_empty());
    }

    #[test]
    fn keeps_only_first_ten_items() {
        let entries: Vec<String> = (0..12)
            .map(|i| item(&format!("Title {i}"), &format!("Body {i}")))
            .collect();
        let items = parse_feed(&feed(&entries)).expect("should parse");
        assert_eq!(items.len(), MAX_ITEMS);
        assert_eq!(items[0].title, "Title 0");
        assert_eq!(items[9].title, "Title 9");
    }

    #[test]
    fn item_missing_description_is_skipped_but_counted() {
        let mut entries = vec!["<item><title>No body</title></item>".to_string()];
        entries.extend((0..10).map(|i| item(&format!("Title {i}"), "Body")));
        let items = parse_feed(&feed(&entries)).expect("should parse");
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].title, "Title 0");
    }

    #[test]
    fn item_missing_title_is_skipped() {
        let entries = vec![
            "<item><description>Orphan</description></item>".to_string(),
            item("Kept", "Body"),
        ];
        let items = parse_feed(&feed(&entries)).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kept");
    }

    #[test]
    fn cdata_description_is_read() {
        let entries = vec![
            "<item><title>T</title><description><![CDATA[<p>Hello <b>world</b></p>]]></description></item>"
                .to_string(),
        ];
        let items = parse_feed(&feed(&entries)).expect("should parse");
        assert_eq!(items[0].description, "<p>Hello <b>world</b></p>");
    }

    #[test]
    fn empty_description_element_counts_as_present() {
        let entries = vec!["<item><title>T</title><description/></item>".to_string()];
        let items = parse_feed(&feed(&entries)).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn unescaped_nested_markup_keeps_text() {
        let entries =
            vec!["<item><title>T</title><description><p>Hello <b>world</b></p></description></item>".to_string()];
        let items = parse_feed(&feed(&entries)).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Hello world");
    }

    #[test]
    fn mismatched_tags_return_error() {
        let xml = "<rss><channel><item><title>Broken</description></item></channel></rss>";
        let result = parse_feed(xml);
        assert!(matches!(result, Err(FetchError::Xml(_))));
    }

    #[test]
    fn html_entity_in_raw_text_keeps_description() {
        let xml = feed(&[item("Acme", "Acme profits soared&nbsp;today")]);
        let items = parse_feed(&xml).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Acme profits soared\u{a0}today");
    }

    #[test]
    fn html_entity_fallback_still_decodes_xml_entities() {
        let xml = feed(&[item("T&amp;C", "Profits &amp; losses&nbsp;&lt;b&gt;up&lt;/b&gt;")]);
        let items = parse_feed(&xml).expect("should parse");
        assert_eq!(items[0].title, "T&C");
        assert_eq!(items[0].description, "Profits & losses\u{a0}<b>up</b>");
    }
}
