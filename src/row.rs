//! Row display data derived from feed items.
//!
//! The list renderer asks this module, not the item itself, what to draw:
//! which of the two row layouts applies, which thumbnail backs the image
//! slot, and the title/subtitle strings with their fallbacks applied.

use url::Url;

use crate::feed::{FeedItem, Thumbnail};
use crate::text::truncate_chars;

/// Fallback shown when an item has no usable title.
pub const NO_TITLE: &str = "[No Title]";

/// Subtitle cap, in characters (not bytes, not display columns).
pub const SUBTITLE_MAX_CHARS: usize = 200;

/// The two mutually exclusive row layouts. Selected by [`has_image`]; a
/// tagged variant rather than two widget types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowVariant<'a> {
    Basic {
        title: &'a str,
        subtitle: String,
    },
    WithImage {
        title: &'a str,
        subtitle: String,
        /// URL backing the image slot; `None` leaves the slot empty.
        thumbnail: Option<&'a Url>,
    },
}

/// True iff at least one thumbnail carries a present URL.
pub fn has_image(item: &FeedItem) -> bool {
    item.thumbnails.iter().any(|t| t.url.is_some())
}

/// The thumbnail backing an image row: the second one when the feed offers
/// two or more (the first tends to be a tiny crop), otherwise the first.
pub fn display_thumbnail(item: &FeedItem) -> Option<&Thumbnail> {
    if item.thumbnails.len() >= 2 {
        item.thumbnails.get(1)
    } else {
        item.thumbnails.first()
    }
}

/// Title with the `[No Title]` fallback for absent or empty titles.
pub fn title_text(item: &FeedItem) -> &str {
    match item.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => NO_TITLE,
    }
}

/// Subtitle: first present of `media_text`, `media_description`,
/// `media_title` — in that order — capped at [`SUBTITLE_MAX_CHARS`]
/// characters. Empty when none is present.
pub fn subtitle_text(item: &FeedItem) -> String {
    let subtitle = item
        .media_text
        .as_deref()
        .or(item.media_description.as_deref())
        .or(item.media_title.as_deref())
        .unwrap_or("");
    truncate_chars(subtitle, SUBTITLE_MAX_CHARS).into_owned()
}

/// Derive the row variant for one item.
pub fn row_variant(item: &FeedItem) -> RowVariant<'_> {
    let title = title_text(item);
    let subtitle = subtitle_text(item);
    if has_image(item) {
        RowVariant::WithImage {
            title,
            subtitle,
            thumbnail: display_thumbnail(item).and_then(|t| t.url.as_ref()),
        }
    } else {
        RowVariant::Basic { title, subtitle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn thumb(url: Option<&str>) -> Thumbnail {
        Thumbnail {
            url: url.map(|u| Url::parse(u).unwrap()),
        }
    }

    fn item() -> FeedItem {
        FeedItem::default()
    }

    #[test]
    fn no_thumbnails_renders_basic_row_with_title_fallback() {
        let it = item();
        assert!(!has_image(&it));
        match row_variant(&it) {
            RowVariant::Basic { title, subtitle } => {
                assert_eq!(title, NO_TITLE);
                assert_eq!(subtitle, "");
            }
            other => panic!("expected basic row, got {:?}", other),
        }
    }

    #[test]
    fn empty_title_also_falls_back() {
        let mut it = item();
        it.title = Some(String::new());
        assert_eq!(title_text(&it), NO_TITLE);
    }

    #[test]
    fn thumbnail_without_url_does_not_count_as_image() {
        let mut it = item();
        it.thumbnails = vec![thumb(None)];
        assert!(!has_image(&it));
        assert!(matches!(row_variant(&it), RowVariant::Basic { .. }));
    }

    #[test]
    fn second_thumbnail_preferred_when_several_exist() {
        let mut it = item();
        it.thumbnails = vec![
            thumb(Some("https://img.example.com/0.jpg")),
            thumb(Some("https://img.example.com/1.jpg")),
            thumb(Some("https://img.example.com/2.jpg")),
        ];
        assert_eq!(
            display_thumbnail(&it).unwrap().url.as_ref().unwrap().as_str(),
            "https://img.example.com/1.jpg"
        );
    }

    #[test]
    fn single_thumbnail_is_used_directly() {
        let mut it = item();
        it.thumbnails = vec![thumb(Some("https://img.example.com/only.jpg"))];
        assert_eq!(
            display_thumbnail(&it).unwrap().url.as_ref().unwrap().as_str(),
            "https://img.example.com/only.jpg"
        );
    }

    #[test]
    fn image_row_with_absent_url_leaves_slot_empty() {
        // has_image is true (thumbnail 2 has a URL) but the display
        // thumbnail is index 1, which has none: slot stays empty.
        let mut it = item();
        it.thumbnails = vec![
            thumb(None),
            thumb(None),
            thumb(Some("https://img.example.com/2.jpg")),
        ];
        match row_variant(&it) {
            RowVariant::WithImage { thumbnail, .. } => assert!(thumbnail.is_none()),
            other => panic!("expected image row, got {:?}", other),
        }
    }

    #[test]
    fn subtitle_priority_order() {
        let mut it = item();
        it.media_title = Some("mtitle".into());
        assert_eq!(subtitle_text(&it), "mtitle");

        it.media_description = Some("mdesc".into());
        assert_eq!(subtitle_text(&it), "mdesc");

        it.media_text = Some("mtext".into());
        assert_eq!(subtitle_text(&it), "mtext");
    }

    #[test]
    fn subtitle_caps_at_200_characters() {
        let mut it = item();
        it.media_text = Some("x".repeat(500));
        let sub = subtitle_text(&it);
        assert_eq!(sub.chars().count(), SUBTITLE_MAX_CHARS);
    }

    proptest! {
        #[test]
        fn subtitle_never_exceeds_cap(
            mt in proptest::option::of(".{0,400}"),
            md in proptest::option::of(".{0,400}"),
            mti in proptest::option::of(".{0,400}"),
        ) {
            let mut it = item();
            it.media_text = mt;
            it.media_description = md;
            it.media_title = mti;
            prop_assert!(subtitle_text(&it).chars().count() <= SUBTITLE_MAX_CHARS);
        }
    }
}
