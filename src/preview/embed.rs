// SPDX-License-Identifier: MPL-2.0
//! Resolution of video links into embeddable player URLs.
//!
//! Two YouTube link shapes are recognized:
//!
//! - `https://www.youtube.com/shorts/<id>[?...]`
//! - `https://www.youtube.com/watch?v=<id>[&...]`
//!
//! Both become `https://www.youtube.com/embed/<id>?autoplay=1&mute=0&loading=lazy`.
//! Anything else is returned unchanged.

use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Resolves `url` with autoplay enabled.
#[must_use]
pub fn resolve_embed_url(url: &str) -> String {
    resolve_embed_url_with(url, true)
}

/// Resolves `url`; `autoplay` controls the player's autoplay flag.
#[must_use]
pub fn resolve_embed_url_with(url: &str, autoplay: bool) -> String {
    match video_id(url) {
        Some(id) => format!(
            "{EMBED_BASE}{id}?autoplay={}&mute=0&loading=lazy",
            u8::from(autoplay)
        ),
        None => url.to_string(),
    }
}

/// Extracts the YouTube video id from a shorts or watch link.
#[must_use]
pub fn video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if host != "youtube.com" && !host.ends_with(".youtube.com") {
        return None;
    }

    let mut segments = parsed.path_segments()?;
    match segments.next()? {
        "shorts" => segments
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        "watch" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorts_link_becomes_autoplaying_embed() {
        let resolved = resolve_embed_url("https://www.youtube.com/shorts/abc123?x=1");
        assert_eq!(
            resolved,
            "https://www.youtube.com/embed/abc123?autoplay=1&mute=0&loading=lazy"
        );
    }

    #[test]
    fn watch_link_uses_v_parameter() {
        let resolved = resolve_embed_url("https://www.youtube.com/watch?v=xyz789&t=4s");
        assert!(resolved.contains("/embed/xyz789?"));
        assert!(resolved.contains("autoplay=1"));
    }

    #[test]
    fn other_urls_pass_through() {
        for url in [
            "https://cdn.example/raw.mp4",
            "https://www.youtube.com/watch?list=PL0x",
            "https://www.youtube.com/shorts/",
            "https://notyoutube.com/shorts/abc",
            "not a url",
        ] {
            assert_eq!(resolve_embed_url(url), url);
        }
    }

    #[test]
    fn mobile_host_is_recognized() {
        assert_eq!(
            video_id("https://m.youtube.com/shorts/m0b1le"),
            Some("m0b1le".to_string())
        );
    }

    #[test]
    fn autoplay_can_be_disabled() {
        let resolved = resolve_embed_url_with("https://youtube.com/shorts/abc123", false);
        assert!(resolved.contains("autoplay=0"));
    }
}
