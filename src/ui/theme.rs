// logwindow - ui/theme.rs
//
// Colour scheme, the static severity colour table, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use crate::core::render::SpanRole;
use egui::Color32;

/// Colour for a given severity label.
///
/// MESSAGE renders in the default row foreground rather than a fixed hue,
/// so it stays readable in both themes.
pub fn severity_colour(severity: Severity, dark_mode: bool) -> Color32 {
    match severity {
        Severity::Fatal => Color32::from_rgb(220, 20, 60), // Crimson
        Severity::Error => {
            if dark_mode {
                Color32::from_rgb(239, 68, 68) // Red 500
            } else {
                Color32::from_rgb(185, 28, 28) // Red 800
            }
        }
        Severity::Warning => {
            if dark_mode {
                Color32::from_rgb(245, 158, 11) // Amber 500
            } else {
                Color32::from_rgb(217, 119, 6) // Amber 600
            }
        }
        Severity::Message => row_text_colour(dark_mode),
        Severity::Debug => {
            if dark_mode {
                Color32::from_rgb(34, 197, 94) // Green 500
            } else {
                Color32::from_rgb(21, 128, 61) // Green 700
            }
        }
        Severity::Trace => {
            if dark_mode {
                Color32::from_rgb(156, 163, 175) // Gray 400
            } else {
                Color32::from_rgb(107, 114, 128) // Gray 500
            }
        }
    }
}

/// Red used for the `|EXCEPTION|` label (same hue as Error).
pub fn exception_colour(dark_mode: bool) -> Color32 {
    severity_colour(Severity::Error, dark_mode)
}

/// Blue used for the sequence number.
pub fn number_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(96, 165, 250) // Blue 400
    } else {
        Color32::from_rgb(29, 78, 216) // Blue 700
    }
}

/// Purple used for the origin name.
pub fn origin_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(192, 132, 252) // Purple 400
    } else {
        Color32::from_rgb(126, 34, 206) // Purple 700
    }
}

/// High-contrast foreground for row body text: white in dark mode,
/// near-black in light mode.
pub fn row_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(229, 231, 235) // Gray 200
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Resolve a span role to its concrete colour.
pub fn span_colour(role: SpanRole, dark_mode: bool) -> Color32 {
    match role {
        SpanRole::Number => number_colour(dark_mode),
        SpanRole::Level(severity) => severity_colour(severity, dark_mode),
        SpanRole::ExceptionLevel => exception_colour(dark_mode),
        SpanRole::Origin => origin_colour(dark_mode),
        SpanRole::Plain => row_text_colour(dark_mode),
    }
}

/// Layout constants.
pub const ROW_HEIGHT: f32 = 18.0;
pub const ROW_FONT_SIZE: f32 = 12.0;
