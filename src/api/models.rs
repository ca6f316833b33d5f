use serde::Deserialize;

/// One page of search results.
///
/// `total_hits` counts every match the server knows about, not just this
/// page; `hits` carries at most `per_page` records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    pub hits: Vec<Hit>,
}

/// One image record as returned by the API.
///
/// Treated as an opaque display record everywhere outside the renderer:
/// the session controller never inspects these fields. Unknown wire fields
/// are ignored on decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hit {
    /// Thumbnail-sized image, shown in the gallery card.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Full-size image, the lightbox target.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Comma-separated tag list; doubles as the caption text.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_response_and_ignores_unknown_fields() {
        let body = r#"{
            "total": 500,
            "totalHits": 97,
            "hits": [{
                "id": 12345,
                "webformatURL": "https://cdn.example/web.jpg",
                "largeImageURL": "https://cdn.example/large.jpg",
                "tags": "cat, pet, animal",
                "likes": 10,
                "views": 200,
                "comments": 3,
                "downloads": 42,
                "user": "someone"
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_hits, 97);
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].tags, "cat, pet, animal");
        assert_eq!(response.hits[0].downloads, 42);
    }

    #[test]
    fn missing_stats_default_to_zero() {
        let body = r#"{
            "totalHits": 1,
            "hits": [{
                "webformatURL": "https://cdn.example/web.jpg",
                "largeImageURL": "https://cdn.example/large.jpg"
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.hits[0].likes, 0);
        assert_eq!(response.hits[0].tags, "");
    }
}
