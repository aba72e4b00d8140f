use anyhow::Result;
use feed_rs::parser;
use url::Url;

/// One thumbnail reference attached to a feed item, one of possibly several
/// sizes/crops. The URL is absent when the feed carried an unparseable URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: Option<Url>,
}

/// One entry of the feed as consumed by the rest of the crate.
///
/// All text fields are optional; the Media RSS extension fields
/// (`media_*`) come from the entry's `<media:*>` elements. Thumbnails keep
/// feed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub media_description: Option<String>,
    pub media_text: Option<String>,
    pub media_title: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
}

/// Parse feed XML into the crate's item model.
///
/// The whole document parses as one atomic unit or not at all; there is no
/// per-entry recovery. Entries come back in document order.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedItem>> {
    let feed = parser::parse(bytes)?;

    let items = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry.title.map(|t| t.content);

            // DeviantArt emits one media group per item, but collect
            // thumbnails across all of them to preserve feed order.
            let thumbnails: Vec<Thumbnail> = entry
                .media
                .iter()
                .flat_map(|m| m.thumbnails.iter())
                .map(|t| Thumbnail {
                    url: Url::parse(&t.image.uri).ok(),
                })
                .collect();

            let media_title = entry
                .media
                .iter()
                .find_map(|m| m.title.as_ref().map(|t| t.content.clone()));
            let media_description = entry
                .media
                .iter()
                .find_map(|m| m.description.as_ref().map(|t| t.content.clone()));
            let media_text = entry
                .media
                .iter()
                .find_map(|m| m.texts.first().map(|t| t.text.content.clone()));

            FeedItem {
                title,
                media_description,
                media_text,
                media_title,
                thumbnails,
            }
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDIA_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>DeviantArt RSS</title>
    <item>
      <guid>one</guid>
      <title>First Artwork</title>
      <media:title>media title one</media:title>
      <media:description type="html">&lt;p&gt;desc one&lt;/p&gt;</media:description>
      <media:thumbnail url="https://img.example.com/one-150.jpg" width="150" height="150"/>
      <media:thumbnail url="https://img.example.com/one-300.jpg" width="300" height="300"/>
    </item>
    <item>
      <guid>two</guid>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_media_rss_fields() {
        let items = parse_feed(MEDIA_RSS.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.title.as_deref(), Some("First Artwork"));
        assert_eq!(first.media_title.as_deref(), Some("media title one"));
        assert!(first
            .media_description
            .as_deref()
            .unwrap()
            .contains("desc one"));
        assert_eq!(first.thumbnails.len(), 2);
        assert_eq!(
            first.thumbnails[1].url.as_ref().unwrap().as_str(),
            "https://img.example.com/one-300.jpg"
        );
    }

    #[test]
    fn bare_item_yields_absent_fields() {
        let items = parse_feed(MEDIA_RSS.as_bytes()).unwrap();
        let bare = &items[1];
        assert!(bare.title.is_none());
        assert!(bare.media_title.is_none());
        assert!(bare.media_description.is_none());
        assert!(bare.media_text.is_none());
        assert!(bare.thumbnails.is_empty());
    }

    #[test]
    fn thumbnails_keep_feed_order() {
        let items = parse_feed(MEDIA_RSS.as_bytes()).unwrap();
        let urls: Vec<&str> = items[0]
            .thumbnails
            .iter()
            .filter_map(|t| t.url.as_ref().map(Url::as_str))
            .collect();
        assert_eq!(
            urls,
            [
                "https://img.example.com/one-150.jpg",
                "https://img.example.com/one-300.jpg"
            ]
        );
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(parse_feed(b"<not valid xml").is_err());
    }
}
