//! One-line notice under the input bar

use polygpt_app::state::{Notice, NoticeLevel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::IconSet;
use crate::theme::{palette, styles};

pub struct NoticeLine<'a> {
    notice: Option<&'a Notice>,
    icons: IconSet,
}

impl<'a> NoticeLine<'a> {
    pub fn new(notice: Option<&'a Notice>, icons: IconSet) -> Self {
        Self { notice, icons }
    }
}

impl Widget for NoticeLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(notice) = self.notice else {
            return;
        };
        if area.height == 0 {
            return;
        }

        let (icon, color) = match notice.level {
            NoticeLevel::Info => (self.icons.info(), palette::STATUS_BLUE),
            NoticeLevel::Warning => (self.icons.alert(), palette::STATUS_YELLOW),
            NoticeLevel::Error => (self.icons.close(), palette::STATUS_RED),
        };
        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::styled(notice.text.as_str(), styles::text_secondary()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
