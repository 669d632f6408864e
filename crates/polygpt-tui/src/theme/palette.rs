//! Color palette.
//!
//! Baseline mode uses the Polygon purple accent; quantum mode swaps in the
//! cyan and fuchsia pair.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(5, 5, 10);
pub const CARD_BG: Color = Color::Rgb(15, 12, 26);
pub const SURFACE: Color = Color::Rgb(24, 20, 40);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 40, 66);
pub const BORDER_ACTIVE: Color = Color::Rgb(130, 71, 229);

// --- Accent (baseline) ---
pub const ACCENT: Color = Color::Rgb(130, 71, 229); // Polygon purple
pub const ACCENT_DIM: Color = Color::Rgb(76, 45, 130);

// --- Accent (quantum) ---
pub const QUANTUM_ACCENT: Color = Color::Rgb(34, 211, 238); // cyan
pub const QUANTUM_GLOW: Color = Color::Rgb(217, 70, 239); // fuchsia

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(82, 90, 110);
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on top of an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_BLUE: Color = Color::Rgb(56, 189, 248);

// --- Chat bubbles ---
pub const USER_BUBBLE_BG: Color = Color::Rgb(46, 26, 86);
pub const ASSISTANT_BUBBLE_BG: Color = Color::Rgb(20, 18, 34);
pub const QUANTUM_BUBBLE_BG: Color = Color::Rgb(12, 30, 40);
