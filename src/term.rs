use inksac::prelude::*;

/// Color-support-gated painter for terminal output, shared by the
/// utility binaries.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color_support: ColorSupport,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A painter that never emits escape codes, for piped output and
    /// tests.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let mut builder = Style::builder();
        let mut style = builder.foreground(color);
        if bold {
            style = style.bold();
        }
        text.to_string().style(style.build()).to_string()
    }
}
