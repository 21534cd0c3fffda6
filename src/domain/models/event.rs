use tui_textarea::Input;

use super::ConnectionState;
use super::Message;
use super::Status;

pub enum Event {
    ChatReply(Message),
    ConnectionChanged(ConnectionState, Status),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
    VideoResolved(String),
}
