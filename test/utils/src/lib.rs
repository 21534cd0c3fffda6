pub fn watch_url_fixture() -> &'static str {
    return "https://www.youtube.com/watch?v=abc123";
}

pub fn answer_fixture() -> &'static str {
    return r#"
The video is about X.

It covers three points:
- The history of X, starting in the early days.
- How X is used today, with a really long explanation that pushes the boundaries of 50 characters across the screen.
- Where X is heading next.
"#
    .trim();
}
