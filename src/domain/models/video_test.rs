use test_utils::watch_url_fixture;

use super::VideoUrl;

#[test]
fn it_resolves_watch_urls() {
    assert_eq!(VideoUrl::resolve(watch_url_fixture()), Some("abc123".to_string()));
}

#[test]
fn it_resolves_with_other_params() {
    let res = VideoUrl::resolve("https://www.youtube.com/watch?list=PL1&v=Gfr50f6ZBvo&t=42s");
    assert_eq!(res, Some("Gfr50f6ZBvo".to_string()));
}

#[test]
fn it_resolves_the_first_video_param() {
    let res = VideoUrl::resolve("https://www.youtube.com/watch?v=first&v=second");
    assert_eq!(res, Some("first".to_string()));
}

#[test]
fn it_url_decodes_the_video_id() {
    let res = VideoUrl::resolve("https://www.youtube.com/watch?v=a%2Db%20c");
    assert_eq!(res, Some("a-b c".to_string()));
}

#[test]
fn it_resolves_subdomains() {
    assert_eq!(
        VideoUrl::resolve("https://m.youtube.com/watch?v=abc123"),
        Some("abc123".to_string())
    );
    assert_eq!(
        VideoUrl::resolve("http://youtube.com/watch?v=abc123"),
        Some("abc123".to_string())
    );
}

#[test]
fn it_resolves_short_links() {
    assert_eq!(
        VideoUrl::resolve("https://youtu.be/X0btK9X0Xnk?si=share"),
        Some("X0btK9X0Xnk".to_string())
    );
}

#[test]
fn it_ignores_non_video_pages() {
    let urls = [
        "https://www.youtube.com/",
        "https://www.youtube.com/results?search_query=rust",
        "https://www.youtube.com/feed/subscriptions?v=abc123",
        "https://www.example.com/watch?v=abc123",
        "https://notyoutube.com/watch?v=abc123",
        "https://youtu.be/",
        "chrome://extensions",
        "file:///watch?v=abc123",
    ];

    for url in urls {
        assert_eq!(VideoUrl::resolve(url), None, "{url}");
    }
}

#[test]
fn it_ignores_missing_or_blank_ids() {
    assert_eq!(VideoUrl::resolve("https://www.youtube.com/watch"), None);
    assert_eq!(VideoUrl::resolve("https://www.youtube.com/watch?v="), None);
    assert_eq!(VideoUrl::resolve("https://www.youtube.com/watch?v=%20%20"), None);
}

#[test]
fn it_ignores_malformed_urls() {
    for url in ["", "   ", "not a url", "https://", "youtube.com/watch?v=abc123", "http://[::1"] {
        assert_eq!(VideoUrl::resolve(url), None, "{url}");
    }
}
