use inksac::prelude::*;

/// Renders the interactive prompt: `<user>@<host>:<path>$ `, identity in
/// bold magenta, path in bold cyan, and `#` instead of `$` for the
/// superuser.
#[derive(Debug, Clone, Copy)]
pub struct PromptRenderer {
    color_support: ColorSupport,
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn render(&self, user: &str, host: &str, path: &str) -> String {
        let marker = if user == "root" { "# " } else { "$ " };

        if matches!(self.color_support, ColorSupport::NoColor) {
            return format!("{}@{}:{}{}", user, host, path, marker);
        }

        let identity_style = Style::builder()
            .foreground(Color::Magenta)
            .bold()
            .build();
        let path_style = Style::builder().foreground(Color::Cyan).bold().build();

        let identity = format!("{}@{}", user, host).style(identity_style).to_string();
        let path = path.to_string().style(path_style).to_string();
        format!("{}:{}{}", identity, path, marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_renderer() -> PromptRenderer {
        PromptRenderer {
            color_support: ColorSupport::NoColor,
        }
    }

    #[test]
    fn test_plain_prompt_shape() {
        let prompt = plain_renderer().render("alice", "workstation", "~/projects");
        assert_eq!(prompt, "alice@workstation:~/projects$ ");
    }

    #[test]
    fn test_root_gets_hash_marker() {
        let prompt = plain_renderer().render("root", "workstation", "~");
        assert!(prompt.ends_with("# "));
    }

    #[test]
    fn test_colored_prompt_keeps_content() {
        let renderer = PromptRenderer::new();
        let prompt = renderer.render("alice", "box", "/etc");
        assert!(prompt.contains("alice@box"));
        assert!(prompt.contains("/etc"));
    }
}
