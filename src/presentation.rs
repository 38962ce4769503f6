// src/presentation.rs

/// The rendering boundary the controller reports to.
///
/// The controller only ever writes to it. Implementations that hold state
/// need interior mutability since every call takes `&self`.
pub trait PresentationSurface: Send + Sync {
    /// Marks the submission as in flight and disables the trigger.
    fn show_loading(&self);

    /// Clears the loading indicator and re-enables the trigger.
    fn hide_loading(&self);

    /// Shows a prediction already rounded to one decimal. Hides any error.
    fn show_result(&self, minutes: f64);

    /// Shows an error message. Hides any result.
    fn show_error(&self, message: &str);

    fn hide_messages(&self);
}

/// Rounds to one decimal, halves toward positive infinity.
pub fn round_to_tenth(value: f64) -> f64 {
    // + 0.0 turns -0 into 0
    (value * 10.0 + 0.5).floor() / 10.0 + 0.0
}

/// Display text for a rounded prediction, e.g. `42.4 minutes` or `42 minutes`.
pub fn format_minutes(minutes: f64) -> String {
    format!("{} minutes", minutes)
}

/// Renders to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl PresentationSurface for ConsoleSurface {
    fn show_loading(&self) {
        println!("⏳ Predicting delivery time...");
    }

    fn hide_loading(&self) {}

    fn show_result(&self, minutes: f64) {
        println!("✅ Estimated delivery time: {}", format_minutes(minutes));
    }

    fn show_error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    fn hide_messages(&self) {}
}
