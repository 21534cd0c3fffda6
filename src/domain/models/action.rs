use super::ChatPrompt;

pub enum Action {
    ChatRequest(ChatPrompt),
}
