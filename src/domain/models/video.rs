#[cfg(test)]
#[path = "video_test.rs"]
mod tests;

use reqwest::Url;

const WATCH_HOST: &str = "youtube.com";
const SHORT_HOST: &str = "youtu.be";
const VIDEO_PARAM: &str = "v";

fn is_watch_host(host: &str) -> bool {
    return host == WATCH_HOST || host.ends_with(&format!(".{WATCH_HOST}"));
}

fn non_blank(video_id: String) -> Option<String> {
    if video_id.trim().is_empty() {
        return None;
    }

    return Some(video_id);
}

pub struct VideoUrl {}

impl VideoUrl {
    /// Extracts the video ID from a video page URL. Anything that isn't a
    /// recognised watch page, including strings that fail to parse, resolves to
    /// `None`.
    pub fn resolve(page_url: &str) -> Option<String> {
        let url = Url::parse(page_url.trim()).ok()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }

        let host = url.host_str()?.to_lowercase();

        if host == SHORT_HOST {
            let video_id = url.path_segments()?.next()?.to_string();
            return non_blank(video_id);
        }

        if !is_watch_host(&host) {
            return None;
        }

        if url.path().trim_end_matches('/') != "/watch" {
            return None;
        }

        let video_id = url
            .query_pairs()
            .find(|(key, _)| return key == VIDEO_PARAM)
            .map(|(_, value)| return value.to_string())?;

        return non_blank(video_id);
    }
}
