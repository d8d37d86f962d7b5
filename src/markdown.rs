use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Substitution rules
// ---------------------------------------------------------------------------

/// One substitution rule of the renderer.
///
/// The renderer is not a parser: it is a fixed, ordered chain of independent
/// passes over the whole text, and the order of `RULES` is load-bearing.
/// Triple emphasis must run before double, double before single, and the
/// five-star run before the four-star run, or a longer marker gets eaten
/// piecemeal by a shorter rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Replaces a whole line carrying `marker` as its prefix.
    LinePrefix {
        marker: &'static str,
        open: &'static str,
        close: &'static str,
    },
    /// Replaces a line starting with `<digits>. ` — the marker is dropped,
    /// the literal text after it is kept (no renumbering).
    NumberedLine {
        open: &'static str,
        close: &'static str,
    },
    /// Replaces a line that is exactly `line`.
    LineExact {
        line: &'static str,
        html: &'static str,
    },
    /// Replaces non-greedy `delim…delim` pairs; a span never crosses a newline.
    Inline {
        delim: &'static str,
        open: &'static str,
        close: &'static str,
    },
    /// Plain literal substitution, all occurrences.
    Literal {
        from: &'static str,
        to: &'static str,
    },
}

impl Rule {
    /// Apply this rule as one full pass over `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Rule::LinePrefix {
                marker,
                open,
                close,
            } => each_line(text, |line| {
                line.strip_prefix(marker)
                    .map(|rest| format!("{open}{rest}{close}"))
            }),
            Rule::NumberedLine { open, close } => each_line(text, |line| {
                let digits = line.chars().take_while(char::is_ascii_digit).count();
                if digits == 0 {
                    return None;
                }
                line[digits..]
                    .strip_prefix(". ")
                    .map(|rest| format!("{open}{rest}{close}"))
            }),
            Rule::LineExact { line: wanted, html } => {
                each_line(text, |line| (line == *wanted).then(|| (*html).to_string()))
            }
            Rule::Inline { delim, open, close } => replace_inline(text, delim, open, close),
            Rule::Literal { from, to } => text.replace(from, to),
        }
    }
}

/// The renderer's rule chain, in application order.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Headers, deepest marker first
        Rule::LinePrefix {
            marker: "#### ",
            open: r#"<h6 class="text-info mt-3 mb-2">"#,
            close: "</h6>",
        },
        Rule::LinePrefix {
            marker: "### ",
            open: r#"<h5 class="text-star-blue mt-4 mb-2">"#,
            close: "</h5>",
        },
        Rule::LinePrefix {
            marker: "## ",
            open: r#"<h4 class="text-gold mt-4 mb-3">"#,
            close: "</h4>",
        },
        Rule::LinePrefix {
            marker: "# ",
            open: r#"<h3 class="text-light mt-4 mb-3">"#,
            close: "</h3>",
        },
        // Bold and italic, longest marker first
        Rule::Inline {
            delim: "***",
            open: "<strong><em>",
            close: "</em></strong>",
        },
        Rule::Inline {
            delim: "**",
            open: r#"<strong class="text-light">"#,
            close: "</strong>",
        },
        Rule::Inline {
            delim: "*",
            open: "<em>",
            close: "</em>",
        },
        // Lists
        Rule::LinePrefix {
            marker: "- ",
            open: r#"<div class="ms-3 mb-1">• "#,
            close: "</div>",
        },
        Rule::NumberedLine {
            open: r#"<div class="ms-3 mb-1">"#,
            close: "</div>",
        },
        // Horizontal rules
        Rule::LineExact {
            line: "---",
            html: r#"<hr class="border-secondary my-4">"#,
        },
        Rule::LineExact {
            line: "___",
            html: r#"<hr class="border-secondary my-4">"#,
        },
        // Star ratings (custom), longest run first
        Rule::Literal {
            from: "⭐⭐⭐⭐⭐",
            to: r#"<span class="text-warning">★★★★★</span>"#,
        },
        Rule::Literal {
            from: "⭐⭐⭐⭐",
            to: r#"<span class="text-warning">★★★★☆</span>"#,
        },
        Rule::Literal {
            from: "⭐⭐⭐",
            to: r#"<span class="text-warning">★★★☆☆</span>"#,
        },
        Rule::Literal {
            from: "⭐⭐",
            to: r#"<span class="text-warning">★★☆☆☆</span>"#,
        },
        Rule::Literal {
            from: "⭐",
            to: r#"<span class="text-warning">★☆☆☆☆</span>"#,
        },
        // Line breaks
        Rule::Literal {
            from: "\n\n",
            to: r#"</p><p class="mb-2">"#,
        },
        Rule::Literal {
            from: "\n",
            to: "<br>",
        },
    ]
});

// ---------------------------------------------------------------------------
// Rendering entry points
// ---------------------------------------------------------------------------

/// Render a constrained markdown subset (plus star-rating emoji) to HTML.
///
/// Pure function: no side effects, empty in → empty out. Does NOT escape
/// HTML already present in the input; callers embedding untrusted text
/// verbatim must run it through [`escape_html`] first.
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// [`render`] for optional backend fields; absent input renders as `""`.
pub fn render_opt(text: Option<&str>) -> String {
    text.map(render).unwrap_or_default()
}

/// Minimal HTML escape for embedding raw user text in a fragment.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Rewrite each line of `text` independently, keeping the newline structure.
fn each_line(text: &str, f: impl Fn(&str) -> Option<String>) -> String {
    text.split('\n')
        .map(|line| f(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace non-greedy `delim…delim` pairs left to right. An opening marker
/// with no closing marker before the next newline stays literal, and the
/// scan resumes after it.
fn replace_inline(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match after.find(delim) {
            Some(end) if !after[..end].contains('\n') => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&after[..end]);
                out.push_str(close);
                rest = &after[end + delim.len()..];
            }
            _ => {
                out.push_str(&rest[..start + delim.len()]);
                rest = &rest[start + delim.len()..];
            }
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
