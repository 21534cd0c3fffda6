use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn new(kind: StatusKind, text: &str) -> Status {
        return Status {
            text: text.to_string(),
            kind,
        };
    }

    pub fn loading(text: &str) -> Status {
        return Status::new(StatusKind::Loading, text);
    }

    pub fn success(text: &str) -> Status {
        return Status::new(StatusKind::Success, text);
    }

    pub fn error(text: &str) -> Status {
        return Status::new(StatusKind::Error, text);
    }

    fn colour(&self) -> Color {
        match self.kind {
            StatusKind::Loading => return Color::Yellow,
            StatusKind::Success => return Color::Green,
            StatusKind::Error => return Color::Red,
        }
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, video_info: Option<&str>) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.colour()))
            .padding(Padding::new(1, 1, 0, 0));

        if let Some(info) = video_info {
            block = block.title(info.to_string());
        }

        frame.render_widget(
            Paragraph::new(self.text.to_string())
                .style(Style::default().fg(self.colour()))
                .block(block)
                .alignment(Alignment::Center),
            rect,
        );
    }
}
