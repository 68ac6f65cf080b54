use once_cell::sync::Lazy;
use serde_json::{json, Value as JsonValue};

/// `POST /login` with the full session payload.
pub static LOGIN: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "user": {
            "username": "alice",
            "email": "alice@example.org"
        },
        "accessToken": "abc123",
        "refreshToken": "zyx987"
    })
});

/// `POST /login` as answered by servers that only send a token and the
/// username.
pub static LOGIN_LEGACY: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOjF9.c2lnbmF0dXJl",
        "user": "alice"
    })
});

/// `POST /login` with a wrong password.
pub static INVALID_CREDENTIALS: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "Invalid credentials"
    })
});

/// `POST /register`
pub static REGISTER: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "User registered"
    })
});

/// `POST /register` for a taken username.
pub static USER_ALREADY_EXISTS: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "User already exists"
    })
});

/// `POST /register_openverse`
pub static OPENVERSE_REGISTRATION: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "Application registered. Store client_id and client_secret in .env and verify email.",
        "data": {
            "client_id": "pm8GMaIXIhkjQ4iDfXLOvVUUcIKGYRnMlZYApbda",
            "client_secret": "YhVjvIBc7TuRJSvO2wIi344ez5SEreXLksV7GjalLiKDpxfbiM8qfUb5sNvcwFOh",
            "name": "My media app",
            "msg": "Check your email for a verification link."
        }
    })
});

/// `POST /get_openverse_token`
pub static OPENVERSE_TOKEN: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "Access token fetched. Update OPENVERS_ACCESS_TOKEN in .env if needed.",
        "data": {
            "access_token": "DLBYIcfnKfolaXKcmMC8RIDCavc2hW",
            "scope": "read write groups",
            "expires_in": 36000,
            "token_type": "Bearer"
        }
    })
});

/// A generic creation acknowledgement.
pub static CREATED: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "User created!"
    })
});

/// A generic 404 body.
pub static NOT_FOUND: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "message": "User not found"
    })
});

/// `GET /contacts`
pub static CONTACTS: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "contacts": [
            {
                "id": 1,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.org"
            },
            {
                "id": 2,
                "firstName": "Alan",
                "lastName": "Turing",
                "email": "alan@example.org"
            }
        ]
    })
});

/// `GET /search_history`
pub static SEARCH_HISTORY: Lazy<JsonValue> = Lazy::new(|| {
    json!({
        "history": [
            {
                "id": 7,
                "query": "birdsong",
                "timestamp": "2026-10-01T09:30:00"
            },
            {
                "id": 8,
                "query": "thunderstorm",
                "timestamp": "2026-10-02T18:05:12.123456"
            }
        ]
    })
});
