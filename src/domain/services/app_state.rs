#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ConnectionState;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;
use crate::domain::models::Status;
use crate::domain::models::TextArea;

pub struct AppState<'a> {
    pub bubble_list: BubbleList<'a>,
    pub connection: ConnectionState,
    pub input_enabled: bool,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub scroll: Scroll,
    pub session: Session,
    pub status: Status,
    pub textarea: tui_textarea::TextArea<'a>,
    pub video_info: Option<String>,
}

impl<'a> Default for AppState<'a> {
    fn default() -> AppState<'a> {
        return AppState::new();
    }
}

impl<'a> AppState<'a> {
    pub fn new() -> AppState<'a> {
        return AppState {
            bubble_list: BubbleList::new(),
            connection: ConnectionState::default(),
            input_enabled: false,
            last_known_height: 0,
            last_known_width: 0,
            messages: vec![],
            scroll: Scroll::default(),
            session: Session::default(),
            status: Status::default(),
            textarea: TextArea::default(),
            video_info: None,
        };
    }

    pub fn set_video_id(&mut self, video_id: &str) {
        self.session = Session::new(Some(video_id.to_string()));
    }

    pub fn handle_connection(&mut self, state: ConnectionState, status: Status) {
        match self.connection.transition(state) {
            Ok(next) => self.connection = next,
            Err(err) => {
                tracing::warn!(error = ?err, "Ignoring connection change");
                return;
            }
        }

        self.status = status;

        if self.connection == ConnectionState::Ready {
            self.session.initialized = true;
            self.video_info = self
                .session
                .video_id()
                .map(|video_id| return format!("Video ID: {video_id}"));
            self.input_enabled = true;
        }
    }

    /// What the disabled question box shows instead of the text input.
    pub fn input_placeholder(&self) -> &str {
        if self.connection == ConnectionState::Ready {
            return "Waiting for an answer...";
        }

        return "Chat opens once the video is ready.";
    }

    /// Inserts pasted text into the question box, keeping line breaks as
    /// separate lines.
    pub fn paste(&mut self, text: &str) {
        if !self.input_enabled {
            return;
        }

        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                self.textarea.insert_newline();
            }
            self.textarea.insert_str(line.trim_end_matches('\r'));
        }
    }

    /// Handles the question box being submitted. Returns true when the window
    /// should close.
    pub fn submit_input(&mut self, tx: &mpsc::UnboundedSender<Action>) -> bool {
        if !self.input_enabled {
            return false;
        }

        let input_str = self.textarea.lines().join("\n");
        if let Some(command) = SlashCommand::parse(&input_str) {
            self.textarea = TextArea::default();

            if command.is_quit() {
                return true;
            }
            if command.is_help() {
                self.add_message(Message::new(Author::Bot, &help_text()));
            }

            return false;
        }

        self.send_question(&input_str, tx);
        return false;
    }

    /// Sends a question about the current video. Does nothing at all unless
    /// the question has text, the session is ready and no other question is
    /// in flight. Returns whether the question was sent.
    pub fn send_question(&mut self, question: &str, tx: &mpsc::UnboundedSender<Action>) -> bool {
        if question.trim().is_empty() || !self.input_enabled || !self.session.can_chat() {
            return false;
        }

        let video_id = match self.session.video_id() {
            Some(video_id) => video_id.to_string(),
            None => return false,
        };

        self.add_message(Message::new(Author::User, question));
        self.textarea = TextArea::default();
        self.input_enabled = false;

        let prompt = ChatPrompt::new(&video_id, question);
        if let Err(err) = tx.send(Action::ChatRequest(prompt)) {
            tracing::error!(error = ?err, "Failed to queue chat request");
            self.handle_chat_reply(Message::new_with_type(
                Author::Bot,
                MessageType::Error,
                "Error: Failed to get response",
            ));
        }

        return true;
    }

    /// Every question ends here exactly once, answered or failed.
    pub fn handle_chat_reply(&mut self, message: Message) {
        self.add_message(message);
        self.input_enabled = true;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width as usize);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);
    }
}
