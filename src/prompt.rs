use inksac::prelude::*;

const PROMPT: &str = "$";

#[derive(Debug, Clone, Copy)]
pub struct PromptRenderer {
    quiet: bool,
    color_support: ColorSupport,
}

impl PromptRenderer {
    pub fn new(quiet: bool, monochrome: bool) -> Self {
        let color_support = if monochrome {
            ColorSupport::NoColor
        } else {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        };
        Self {
            quiet,
            color_support,
        }
    }

    pub fn render(&self) -> String {
        if self.quiet {
            return String::new();
        }
        if matches!(self.color_support, ColorSupport::NoColor) {
            return format!("{} ", PROMPT);
        }

        let prompt_style = Style::builder().foreground(Color::Red).build();
        format!("{} ", PROMPT.style(prompt_style))
    }
}
