//! HTTP handlers

pub mod health;
pub mod suggestions;
pub mod weather;

pub use health::health_check;
pub use suggestions::get_suggestions;
pub use weather::get_weather;

/// Query string as ordered key/value pairs. Decoding into pairs cannot fail,
/// so repeated or unexpected keys never reject a request.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
