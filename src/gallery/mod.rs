//! Gallery rendering: hits in, display cards out.
//!
//! Pure mapping with no UI state. The caller owns insertion into the
//! visible surface and the lightbox refresh that follows.

use crate::api::Hit;

/// One display card. Field order mirrors the rendered layout: caption,
/// thumbnail, stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Caption text, taken from the hit's tag list.
    pub caption: String,
    /// Thumbnail-sized image URL.
    pub thumbnail_url: String,
    /// Full-size image URL; the lightbox target.
    pub full_url: String,
    /// Pre-formatted stats line.
    pub stats: String,
}

/// Maps hits to cards, preserving input order.
pub fn cards(hits: &[Hit]) -> Vec<Card> {
    hits.iter().map(card).collect()
}

fn card(hit: &Hit) -> Card {
    let caption = if hit.tags.is_empty() {
        "(untitled)".to_string()
    } else {
        hit.tags.clone()
    };

    Card {
        caption,
        thumbnail_url: hit.webformat_url.clone(),
        full_url: hit.large_image_url.clone(),
        stats: stats_line(hit),
    }
}

fn stats_line(hit: &Hit) -> String {
    format!(
        "likes {}  views {}  comments {}  downloads {}",
        hit.likes, hit.views, hit.comments, hit.downloads
    )
}
