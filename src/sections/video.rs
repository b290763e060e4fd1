//! Video section and player URL normalization.

use super::{RenderContext, section_heading, section_shell};
use crate::types::{SectionKind, VideoSection};
use maud::{Markup, html};

/// How a video URL is embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Hosted player page for an `<iframe>`.
    Player(String),
    /// Direct media file for a `<video>` element.
    File(String),
}

/// Turn a YouTube or Vimeo page URL into its embeddable player URL.
/// Anything else is treated as a media file. Empty input yields `None`.
///
/// ```text
/// https://www.youtube.com/watch?v=abc&t=3  →  Player(https://www.youtube.com/embed/abc)
/// https://youtu.be/abc                     →  Player(https://www.youtube.com/embed/abc)
/// https://vimeo.com/1234                   →  Player(https://player.vimeo.com/video/1234)
/// https://cdn.example.com/intro.mp4        →  File(...)
/// ```
pub fn video_source(url: &str) -> Option<VideoSource> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let without_www = without_scheme
        .strip_prefix("www.")
        .or_else(|| without_scheme.strip_prefix("m."))
        .unwrap_or(without_scheme);

    let youtube_id = if let Some(query) = without_www.strip_prefix("youtube.com/watch?") {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
    } else if let Some(rest) = without_www.strip_prefix("youtu.be/") {
        Some(rest)
    } else if let Some(rest) = without_www.strip_prefix("youtube.com/embed/") {
        Some(rest)
    } else {
        None
    };
    if let Some(id) = youtube_id.map(video_id).filter(|id| !id.is_empty()) {
        return Some(VideoSource::Player(format!(
            "https://www.youtube.com/embed/{id}"
        )));
    }

    if let Some(rest) = without_www.strip_prefix("vimeo.com/") {
        let id = video_id(rest);
        if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
            return Some(VideoSource::Player(format!(
                "https://player.vimeo.com/video/{id}"
            )));
        }
    }

    Some(VideoSource::File(url.to_string()))
}

/// Leading id segment, cut at the first path, query or fragment delimiter.
fn video_id(rest: &str) -> &str {
    rest.split(['?', '&', '#', '/']).next().unwrap_or("")
}

pub(super) fn render(video: &VideoSection, ctx: &RenderContext<'_>) -> Markup {
    let title = if video.title.is_empty() {
        "Video"
    } else {
        video.title.as_str()
    };
    let content = html! {
        (section_heading(ctx, &video.title, &video.description))
        div class="aspect-video overflow-hidden rounded-2xl shadow-xl" {
            @match video_source(ctx.external(&video.url).unwrap_or_default()) {
                Some(VideoSource::Player(src)) => {
                    iframe class="h-full w-full" src=(src) title=(title)
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen loading="lazy" {}
                },
                Some(VideoSource::File(src)) => {
                    video class="h-full w-full" src=(src) controls preload="metadata" {}
                },
                None => {
                    div class="pb-placeholder h-full w-full" role="img" aria-label=(title) {}
                },
            }
        }
    };
    section_shell(SectionKind::Video, true, "py-20", content)
}
