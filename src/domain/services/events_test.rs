use tui_textarea::Input;
use tui_textarea::Key;

use super::key_event;
use crate::domain::models::Event;

fn press(key: Key, ctrl: bool) -> Event {
    return key_event(Input {
        key,
        ctrl,
        alt: false,
    });
}

#[test]
fn it_sends_on_enter() {
    assert!(matches!(press(Key::Enter, false), Event::KeyboardEnter()));
}

#[test]
fn it_quits_on_ctrl_c() {
    assert!(matches!(press(Key::Char('c'), true), Event::KeyboardCTRLC()));
}

#[test]
fn it_types_plain_characters() {
    for key in [Key::Char('c'), Key::Char('u'), Key::Char('d'), Key::Backspace] {
        assert!(matches!(press(key, false), Event::KeyboardCharInput(_)));
    }
}

#[test]
fn it_scrolls_lines() {
    assert!(matches!(press(Key::Up, false), Event::UIScrollUp()));
    assert!(matches!(press(Key::Down, false), Event::UIScrollDown()));
}

#[test]
fn it_scrolls_pages() {
    assert!(matches!(press(Key::PageUp, false), Event::UIScrollPageUp()));
    assert!(matches!(press(Key::Char('u'), true), Event::UIScrollPageUp()));
    assert!(matches!(press(Key::PageDown, false), Event::UIScrollPageDown()));
    assert!(matches!(press(Key::Char('d'), true), Event::UIScrollPageDown()));
}
