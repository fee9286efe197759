//! Spotify URI helpers.
//!
//! A resource URI has the shape `spotify:{type}:{id}`, e.g.
//! `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`. The link/type helpers are
//! deliberately permissive and never fail; only `validate_uri` checks shape.

/// URI types the embed widget can open.
pub const VALID_URI_TYPES: [&str; 5] = ["album", "artist", "playlist", "show", "track"];

const SPOTIFY_ID_LEN: usize = 22;

/// Borrowed view of a well-shaped `spotify:{type}:{id}` triple.
///
/// `parse` only checks the shape (three segments, `spotify` namespace); it
/// does not restrict the type or id, so `validate_uri` stays the single
/// place that decides what the widget accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotifyUri<'a> {
    pub kind: &'a str,
    pub id: &'a str,
}

impl<'a> SpotifyUri<'a> {
    pub fn parse(input: &'a str) -> Option<Self> {
        let mut segments = input.split(':');
        let namespace = segments.next()?;
        let kind = segments.next()?;
        let id = segments.next()?;

        if namespace != "spotify" || segments.next().is_some() {
            return None;
        }

        Some(Self { kind, id })
    }
}

/// Build an `https://open.spotify.com/...` link from a resource URI.
///
/// Permissive by contract: malformed input produces a best-effort link with
/// empty segments rather than an error.
pub fn spotify_link(uri: &str) -> String {
    let mut segments = uri.split(':');
    let _ = segments.next();
    let kind = segments.next().unwrap_or("");
    let id = segments.next().unwrap_or("");

    format!("https://open.spotify.com/{kind}/{id}")
}

/// The type segment of a resource URI, or `""` when there is none.
pub fn uri_type(uri: &str) -> &str {
    uri.split(':').nth(1).unwrap_or("")
}

/// Whether `input` is a well-formed Spotify URI the widget can play:
/// `spotify` namespace, a known type, and a 22-character id.
pub fn validate_uri(input: &str) -> bool {
    if input.is_empty() || !input.contains(':') {
        return false;
    }

    match SpotifyUri::parse(input) {
        Some(uri) => VALID_URI_TYPES.contains(&uri.kind) && uri.id.len() == SPOTIFY_ID_LEN,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_uri() -> String {
        format!("spotify:track:{}", "x".repeat(22))
    }

    #[test]
    fn validate_uri_accepts_well_formed_input() {
        assert!(validate_uri(&track_uri()));
        assert!(validate_uri(&format!("spotify:playlist:{}", "a".repeat(22))));
    }

    #[test]
    fn validate_uri_rejects_bad_shapes() {
        assert!(!validate_uri(""));
        assert!(!validate_uri("noseparator"));
        assert!(!validate_uri("spotify:track:short"));
        assert!(!validate_uri(&format!("deezer:track:{}", "x".repeat(22))));
        assert!(!validate_uri(&format!("spotify:episode:{}", "x".repeat(22))));
        assert!(!validate_uri(&format!("{}:extra", track_uri())));
    }

    #[test]
    fn uri_type_returns_second_segment() {
        assert_eq!(uri_type("spotify:album:abc"), "album");
        assert_eq!(uri_type("noseparator"), "");
    }

    #[test]
    fn spotify_link_builds_open_url() {
        assert_eq!(
            spotify_link("spotify:track:123"),
            "https://open.spotify.com/track/123"
        );
        // Permissive contract: missing segments become empty path pieces.
        assert_eq!(spotify_link("spotify"), "https://open.spotify.com//");
    }

    #[test]
    fn parse_checks_shape_only() {
        let uri = SpotifyUri::parse("spotify:episode:abc").unwrap();
        assert_eq!(uri.kind, "episode");
        assert_eq!(uri.id, "abc");
        assert!(SpotifyUri::parse("spotify:track").is_none());
    }
}
