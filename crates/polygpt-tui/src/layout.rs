//! Screen layout definitions for the TUI
//!
//! A fixed-width sidebar on the left (when shown and the terminal is wide
//! enough) and a content column with header, main panel, input bar and a
//! one-line notice row.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 28;

/// Below this terminal width the sidebar is never drawn
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 72;

pub const HEADER_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
pub const NOTICE_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Option<Rect>,

    /// Network pill, engine label and key hints
    pub header: Rect,

    /// Chat history or dashboard
    pub main: Rect,

    /// Prompt input (chat tab only)
    pub input: Option<Rect>,

    /// Transient feedback line
    pub notice: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_sidebar` - User preference; ignored on narrow terminals
/// * `show_input` - Whether the input bar is part of the current tab
pub fn create(area: Rect, show_sidebar: bool, show_input: bool) -> ScreenAreas {
    let (sidebar, content) = if show_sidebar && area.width >= MIN_WIDTH_FOR_SIDEBAR {
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area);
        (Some(sidebar), content)
    } else {
        (None, area)
    };

    let input_height = if show_input { INPUT_HEIGHT } else { 0 };
    let [header, main, input, notice] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(input_height),
        Constraint::Length(NOTICE_HEIGHT),
    ])
    .areas(content);

    ScreenAreas {
        sidebar,
        header,
        main,
        input: show_input.then_some(input),
        notice,
    }
}
