//! Shared test utilities and the mock search API.

#![allow(dead_code)]

pub mod mock_api;

use pixelrover::api::{Hit, SearchResponse};
use pixelrover::config::ApiConfig;

/// A hit with recognizable, index-derived fields.
pub fn sample_hit(index: usize) -> Hit {
    Hit {
        webformat_url: format!("https://cdn.example/web{}.jpg", index),
        large_image_url: format!("https://cdn.example/large{}.jpg", index),
        tags: format!("tag{}", index),
        likes: index as u64,
        views: index as u64 * 10,
        comments: 0,
        downloads: 0,
    }
}

pub fn sample_hits(count: usize) -> Vec<Hit> {
    (0..count).map(sample_hit).collect()
}

/// A decoded page with `count` hits out of `total_hits` total matches.
pub fn page(total_hits: u64, count: usize) -> SearchResponse {
    SearchResponse {
        total_hits,
        hits: sample_hits(count),
    }
}

/// The JSON body the server would send for [`page`].
pub fn page_body(total_hits: u64, count: usize) -> String {
    let hits: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"webformatURL":"https://cdn.example/web{i}.jpg","largeImageURL":"https://cdn.example/large{i}.jpg","tags":"tag{i}","likes":{i},"views":{},"comments":0,"downloads":0}}"#,
                i * 10
            )
        })
        .collect();
    format!(
        r#"{{"totalHits":{},"hits":[{}]}}"#,
        total_hits,
        hits.join(",")
    )
}

/// Api config pointed at a test endpoint.
pub fn api_config(endpoint: &str) -> ApiConfig {
    ApiConfig {
        endpoint: endpoint.to_string(),
        ..ApiConfig::default()
    }
}
