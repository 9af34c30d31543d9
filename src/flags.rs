use crate::error::ShellError;
use std::collections::HashMap;

/// Hand-rolled CLI flag table; the interpreter takes only mode switches,
/// never values.
#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                set: false,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                set: false,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress warnings and diagnostics".to_string(),
                set: false,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let mut known = false;
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.set = true;
                    known = true;
                }
            }
            if !known {
                return Err(ShellError::FlagError(format!("unknown option: {}", arg)));
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).map(|f| f.set).unwrap_or(false)
    }

    pub fn print_help(&self) {
        println!("Usage: neosh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
