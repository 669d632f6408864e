//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use polygpt_app::state::{AppState, Tab};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure apart from `chat_scroll.max_offset`, which only the renderer can
/// know.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let on_chat = state.tab == Tab::Chat;
    let areas = layout::create(area, state.show_sidebar, on_chat);
    let icons = IconSet::new(state.settings.ui.icons);

    if let Some(sidebar_area) = areas.sidebar {
        let sidebar = widgets::Sidebar::new(state.tab, state.mode, icons)
            .with_wallet(state.wallet.as_ref(), state.wallet_connecting)
            .with_spinner_frame(state.spinner_frame);
        frame.render_widget(sidebar, sidebar_area);
    }

    frame.render_widget(widgets::MainHeader::new(state.mode, icons), areas.header);

    match state.tab {
        Tab::Chat => {
            let chat = widgets::ChatView::new(state.conversation.messages(), state.mode, icons)
                .with_spinner_frame(state.spinner_frame);
            frame.render_stateful_widget(chat, areas.main, &mut state.chat_scroll);
        }
        Tab::Dashboard => {
            let dashboard = widgets::Dashboard::new(state.ledger.as_ref(), state.mode, icons);
            frame.render_widget(dashboard, areas.main);
        }
    }

    if let Some(input_area) = areas.input {
        let input = widgets::InputBar::new(&state.input, state.mode, icons)
            .with_wallet_connected(state.is_wallet_connected())
            .with_busy(state.is_busy(), state.spinner_frame);
        frame.render_widget(input, input_area);
    }

    frame.render_widget(
        widgets::NoticeLine::new(state.notice.as_ref(), icons),
        areas.notice,
    );
}
