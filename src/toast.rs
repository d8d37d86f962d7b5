use colored::*;

/// Severity of a toast, mapped to the web UI's color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
    Success,
}

impl ToastKind {
    fn glyph(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
            ToastKind::Error => "✖",
            ToastKind::Success => "✔",
        }
    }
}

/// Terminal stand-in for the web app's toast notifications: one transient
/// colored line on stderr, never on stdout so piped output stays clean.
pub fn toast(kind: ToastKind, message: &str) {
    let line = format!("  {} {}", kind.glyph(), message);
    let colored_line = match kind {
        ToastKind::Info => line.bright_cyan(),
        ToastKind::Warning => line.bright_yellow(),
        ToastKind::Error => line.bright_red(),
        ToastKind::Success => line.bright_green(),
    };
    eprintln!("{colored_line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_distinct() {
        let glyphs = [
            ToastKind::Info.glyph(),
            ToastKind::Warning.glyph(),
            ToastKind::Error.glyph(),
            ToastKind::Success.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_toast_does_not_panic() {
        toast(ToastKind::Info, "ISS location updated!");
        toast(ToastKind::Warning, "Please wait 2 second(s)...");
    }
}
