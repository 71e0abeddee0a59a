use chrono::Utc;

const RULE_WIDTH: usize = 60;

pub(crate) fn timestamp() -> String {
    Utc::now().format("[%H:%M:%S]").to_string()
}

/// Operator-facing console output. Silent in quiet mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Progress {
    quiet: bool,
}

impl Progress {
    pub fn new(quiet: bool) -> Self { Self { quiet } }

    pub fn quiet() -> Self { Self { quiet: true } }

    #[cfg(test)]
    fn is_quiet(&self) -> bool { self.quiet }

    pub fn line(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", timestamp(), message.as_ref());
        }
    }

    pub fn item(&self, message: impl AsRef<str>) {
        self.line(format!("  ✅ {}", message.as_ref()));
    }

    pub fn banner(&self, title: impl AsRef<str>) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&rule);
        self.line(format!("  {}", title.as_ref()));
        self.line(&rule);
    }
}

/// First `max` characters of `text`, with an ellipsis when something was cut.
pub fn truncate_title(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}...")
    }
    else {
        head
    }
}
