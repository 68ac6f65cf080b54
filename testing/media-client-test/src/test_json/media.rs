use once_cell::sync::Lazy;
use serde_json::{json, Value as JsonValue};

/// `GET /search_images`
pub static IMAGE_SEARCH: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "result_count": 240,
        "page_count": 20,
        "page_size": 12,
        "page": 1,
        "results": [
            {
                "id": "4bc43a04-ef46-4544-a0c1-63c63f56e276",
                "title": "Tawny owl",
                "url": "https://live.staticflickr.com/4065/4459771899_07595dc42e.jpg",
                "creator": "Rob Lee",
                "license": "by",
                "license_version": "2.0",
                "provider": "flickr",
                "thumbnail": "https://api.openverse.org/v1/images/4bc43a04-ef46-4544-a0c1-63c63f56e276/thumb/",
                "tags": [{ "name": "owl" }, { "name": "bird" }]
            }
        ]
    })
});

/// `GET /image_detail/{id}`
pub static IMAGE_DETAIL: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "id": "4bc43a04-ef46-4544-a0c1-63c63f56e276",
        "title": "Tawny owl",
        "url": "https://live.staticflickr.com/4065/4459771899_07595dc42e.jpg",
        "creator": "Rob Lee",
        "license": "by",
        "width": 500,
        "height": 375
    })
});

/// `GET /search_audio`
pub static AUDIO_SEARCH: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "result_count": 1,
        "page_count": 1,
        "page_size": 20,
        "page": 1,
        "results": [
            {
                "id": "8624ba61-57f1-4f98-8a85-ece206c319cf",
                "title": "Blackbird at dawn",
                "url": "https://freesound.org/data/previews/415/415209_5121236-hq.mp3",
                "creator": "klankbeeld",
                "license": "by",
                "duration": 61500
            }
        ]
    })
});

/// `GET /rate_limit`
pub static RATE_LIMIT: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "requests_this_minute": 3,
        "requests_today": 42,
        "rate_limit_model": "standard"
    })
});

/// Any search endpoint failing upstream.
pub static SEARCH_ERROR: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "error": "Rate limit exceeded"
    })
});
