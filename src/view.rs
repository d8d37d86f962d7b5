//! HTML report builders: the adapter between pure rendering and what the
//! user actually sees. Mirrors the result-area fragments of the CosmosAI
//! web UI; written to disk only when `--html` is given.

use crate::client::IssStatus;
use crate::events::AstronomyEvent;
use crate::markdown::{escape_html, render};

/// Stylesheet embedded in every report, so a report is one self-contained
/// file.
const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:#0d1117;color:#c9d1d9;font-family:'Segoe UI',sans-serif;padding:32px;max-width:840px;margin:0 auto}
h1{color:#58a6ff;font-size:1.4rem;margin-bottom:20px}
.text-light{color:#f0f6fc}.text-info{color:#58a6ff}.text-star-blue{color:#79c0ff}
.text-gold{color:#e3b341}.text-warning{color:#e3b341}
.text-success{color:#3fb950}.text-danger{color:#f85149}.text-secondary{color:#8b949e}
.ms-3{margin-left:1rem}.mb-1{margin-bottom:.25rem}.mb-2{margin-bottom:.5rem}.mb-3{margin-bottom:1rem}
.mt-3{margin-top:1rem}.mt-4{margin-top:1.5rem}.my-4{margin:1.5rem 0}
.border-secondary{border-color:#30363d}
hr{border:none;border-top:1px solid #30363d}
.card{border:1px solid #30363d;border-radius:8px;padding:16px;margin-bottom:16px}
.card.visible{border-color:#3fb950}.card.hidden{border-color:#e3b341}
.stat{display:inline-block;border:1px solid #30363d;border-radius:8px;padding:10px 18px;margin:4px 8px 4px 0;text-align:center}
.stat .val{font-size:1.1rem;color:#f0f6fc}.stat .lbl{font-size:.75rem;color:#8b949e}
.chat-user{background:#1f6feb;color:#fff;border-radius:10px;padding:10px 14px;margin:8px 0 8px auto;max-width:75%}
.chat-bot{background:#161b22;border:1px solid #30363d;border-radius:10px;padding:10px 14px;margin:8px auto 8px 0;max-width:85%}
table{border-collapse:collapse;width:100%}
td,th{border:1px solid #30363d;padding:6px 10px;text-align:left;font-size:.9rem}
th{color:#58a6ff}
"#;

/// Wrap a body fragment in a standalone dark-theme document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<h1>{}</h1>\n{}\n</body>\n</html>\n",
        escape_html(title),
        PAGE_CSS,
        escape_html(title),
        body
    )
}

/// ISS status card: headline, distance, and ISS coordinates.
pub fn iss_result(status: &IssStatus) -> String {
    let (card_class, text_class) = if status.visible {
        ("visible", "text-success")
    } else {
        ("hidden", "text-warning")
    };
    format!(
        r#"<div class="card {card}"><h3 class="{text}">{headline}</h3></div>
<div class="stat"><div class="val">{dist:.1} km</div><div class="lbl">Distance</div></div>
<div class="stat"><div class="val">{lat:.2}°</div><div class="lbl">ISS Latitude</div></div>
<div class="stat"><div class="val">{lon:.2}°</div><div class="lbl">ISS Longitude</div></div>
<p class="text-secondary">ISS is visible when within ~1500km, in darkness, and weather permits</p>"#,
        card = card_class,
        text = text_class,
        headline = escape_html(&status.status_text),
        dist = status.distance_km,
        lat = status.iss_coords.latitude,
        lon = status.iss_coords.longitude,
    )
}

/// Markdown body (analysis or dark-sky suggestion) rendered to a fragment.
pub fn markdown_section(content: &str) -> String {
    format!(r#"<div class="text-light"><p class="mb-2">{}</p></div>"#, render(content))
}

/// One chat exchange. The user line is raw text and gets escaped; the bot
/// reply is backend markdown and goes through the renderer unescaped.
pub fn chat_exchange(user_message: &str, reply: &str) -> String {
    format!(
        "<div class=\"chat-user\">{}</div>\n<div class=\"chat-bot\">{}</div>",
        escape_html(user_message),
        render(reply)
    )
}

/// Inline error block, the analog of the original's red result areas.
pub fn error_block(message: &str) -> String {
    format!(r#"<p class="text-danger">{}</p>"#, escape_html(message))
}

/// Calendar table for the `events` subcommand.
pub fn events_table(events: &[AstronomyEvent]) -> String {
    let mut rows = String::new();
    for ev in events {
        rows.push_str(&format!(
            "<tr><td>{}</td><td class=\"text-light\">{}</td><td>{}</td></tr>\n",
            escape_html(ev.date),
            escape_html(ev.name),
            escape_html(ev.desc)
        ));
    }
    format!(
        "<table><tr><th>Date</th><th>Event</th><th>Details</th></tr>\n{rows}</table>"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::IssCoords;

    fn sample_status(visible: bool) -> IssStatus {
        IssStatus {
            visible,
            status_text: if visible { "VISIBLE NOW" } else { "NOT VISIBLE" }.to_string(),
            distance_km: 1234.5,
            iss_coords: IssCoords {
                latitude: 12.34,
                longitude: -67.89,
            },
        }
    }

    #[test]
    fn test_page_is_standalone_document() {
        let html = page("ISS Tracker", "<p>x</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn test_page_escapes_title() {
        let html = page("<Oslo>", "");
        assert!(html.contains("&lt;Oslo&gt;"));
        assert!(!html.contains("<title><Oslo>"));
    }

    #[test]
    fn test_iss_result_visible_styling() {
        let html = iss_result(&sample_status(true));
        assert!(html.contains("card visible"));
        assert!(html.contains("text-success"));
        assert!(html.contains("VISIBLE NOW"));
    }

    #[test]
    fn test_iss_result_not_visible_styling() {
        let html = iss_result(&sample_status(false));
        assert!(html.contains("card hidden"));
        assert!(html.contains("text-warning"));
    }

    #[test]
    fn test_iss_result_rounds_coordinates() {
        let html = iss_result(&sample_status(true));
        assert!(html.contains("1234.5 km"));
        assert!(html.contains("12.34°"));
        assert!(html.contains("-67.89°"));
    }

    #[test]
    fn test_chat_exchange_escapes_user_not_bot() {
        let html = chat_exchange("<i>hi</i>", "**hello**");
        assert!(html.contains("&lt;i&gt;hi&lt;/i&gt;"));
        assert!(html.contains(r#"<strong class="text-light">hello</strong>"#));
    }

    #[test]
    fn test_markdown_section_renders_content() {
        let html = markdown_section("# Orion");
        assert!(html.contains(r#"<h3 class="text-light mt-4 mb-3">Orion</h3>"#));
    }

    #[test]
    fn test_error_block_escaped() {
        assert_eq!(
            error_block("City not found."),
            r#"<p class="text-danger">City not found.</p>"#
        );
    }

    #[test]
    fn test_events_table_row_per_event() {
        let html = events_table(crate::events::EVENTS_2026);
        assert_eq!(
            html.matches("<tr>").count(),
            crate::events::EVENTS_2026.len() + 1
        );
    }
}
