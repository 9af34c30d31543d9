/// A single input line split into a command invocation.
///
/// Splitting is on runs of whitespace only; there is no quoting, escaping
/// or variable substitution. A trailing `&` token is consumed here and
/// recorded as the background flag rather than passed on as an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
    pub background: bool,
}

/// Tokenize one raw input line (without its trailing newline).
///
/// Returns `None` when nothing remains after splitting, including a line
/// that consists of a lone `&`; the caller re-prompts without dispatching.
pub fn parse_line(line: &str) -> Option<ParsedCommand> {
    let mut tokens: Vec<String> = line.split_whitespace().map(String::from).collect();

    let background = match tokens.last() {
        Some(last) if last == "&" => {
            tokens.pop();
            true
        }
        _ => false,
    };

    if tokens.is_empty() {
        return None;
    }

    let name = tokens.remove(0);
    Some(ParsedCommand {
        name,
        args: tokens,
        background,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("\t \t"), None);
    }

    #[test]
    fn test_lone_ampersand() {
        assert_eq!(parse_line("&"), None);
        assert_eq!(parse_line("  &  "), None);
    }

    #[test]
    fn test_simple_command() {
        let cmd = parse_line("ls").expect("command");
        assert_eq!(cmd.name, "ls");
        assert!(cmd.args.is_empty());
        assert!(!cmd.background);
    }

    #[test]
    fn test_arguments_keep_order() {
        let cmd = parse_line("cp -r src dest").expect("command");
        assert_eq!(cmd.name, "cp");
        assert_eq!(cmd.args, vec!["-r", "src", "dest"]);
        assert!(!cmd.background);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let cmd = parse_line("  grep   pattern\tfile.txt ").expect("command");
        assert_eq!(cmd.name, "grep");
        assert_eq!(cmd.args, vec!["pattern", "file.txt"]);
    }

    #[test]
    fn test_background_marker_stripped() {
        let cmd = parse_line("sleep 10 &").expect("command");
        assert_eq!(cmd.name, "sleep");
        assert_eq!(cmd.args, vec!["10"]);
        assert!(cmd.background);
    }

    #[test]
    fn test_background_marker_without_args() {
        let cmd = parse_line("frobnicate &").expect("command");
        assert_eq!(cmd.name, "frobnicate");
        assert!(cmd.args.is_empty());
        assert!(cmd.background);
    }

    #[test]
    fn test_ampersand_only_recognized_trailing() {
        // An `&` glued to another token is an ordinary argument character.
        let cmd = parse_line("echo a&b").expect("command");
        assert_eq!(cmd.args, vec!["a&b"]);
        assert!(!cmd.background);

        // Only the final token counts as the background marker.
        let cmd = parse_line("echo & b").expect("command");
        assert_eq!(cmd.args, vec!["&", "b"]);
        assert!(!cmd.background);
    }

    #[test]
    fn test_many_tokens_accepted() {
        let line = (0..64).map(|i| format!("arg{}", i)).collect::<Vec<_>>().join(" ");
        let cmd = parse_line(&format!("cmd {} &", line)).expect("command");
        assert_eq!(cmd.args.len(), 64);
        assert!(cmd.background);
    }
}
