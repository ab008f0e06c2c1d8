//! Terminal palette, one `owo_colors::Style` per kind of output line.

use owo_colors::Style;

/// Styles applied to each kind of line. `Styles::default()` is all plain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styles {
    /// `✓` marks and final confirmations.
    pub success: Style,
    /// `✗` mark of a step that never finished.
    pub failure: Style,
    /// `→` marks of terraform steps.
    pub step: Style,
    /// Notes such as "No changes detected".
    pub note: Style,
    /// Labels of the outputs table.
    pub label: Style,
    /// Banner and section titles.
    pub heading: Style,
}

impl Styles {
    /// Palette for a color terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            failure: Style::new().red().bold(),
            step: Style::new().cyan(),
            note: Style::new().yellow(),
            label: Style::new().dimmed(),
            heading: Style::new().bold().cyan(),
        }
    }

    /// Colored palette when `colors` is set, plain otherwise.
    #[must_use]
    pub fn new(colors: bool) -> Self {
        if colors {
            Self::colored()
        } else {
            Self::default()
        }
    }
}
