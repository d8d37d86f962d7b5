//! External tests for the markdown renderer — the fixed ordered-pass
//! contract, star ratings, and robustness properties.

use cosmos_sky::markdown::{escape_html, render, render_opt};
use proptest::prelude::*;
use rstest::rstest;

// -- Core contract --------------------------------------------------------

#[test]
fn test_title_renders_as_h3_fragment() {
    let html = render("# Title");
    assert!(html.starts_with("<h3"));
    assert!(html.contains("Title"));
    assert!(html.ends_with("</h3>"));
}

#[test]
fn test_bold_renders_as_strong_fragment() {
    let html = render("**bold**");
    assert!(html.starts_with("<strong"));
    assert!(html.contains("bold"));
    assert!(html.ends_with("</strong>"));
}

#[test]
fn test_empty_and_absent_input_render_empty() {
    assert_eq!(render(""), "");
    assert_eq!(render_opt(None), "");
}

// -- Star ratings ---------------------------------------------------------

#[rstest]
#[case(1, "★☆☆☆☆")]
#[case(2, "★★☆☆☆")]
#[case(3, "★★★☆☆")]
#[case(4, "★★★★☆")]
#[case(5, "★★★★★")]
fn test_star_run_fills_five_slot_display(#[case] run: usize, #[case] slots: &str) {
    let input = "⭐".repeat(run);
    assert_eq!(
        render(&input),
        format!(r#"<span class="text-warning">{slots}</span>"#)
    );
}

#[test]
fn test_three_star_run_is_one_fragment_not_three() {
    let html = render("⭐⭐⭐");
    assert_eq!(html.matches("<span").count(), 1);
    assert!(html.contains("★★★☆☆"));
}

// -- Ordered-pass behavior, not idempotence -------------------------------

#[test]
fn test_later_rules_see_earlier_rule_output() {
    // The header pass runs before the emphasis pass, so markers inside an
    // already-built heading fragment are still transformed.
    let html = render("# A **big** night");
    assert!(html.contains(r#"<strong class="text-light">big</strong>"#));
    assert!(html.starts_with("<h3"));
}

#[test]
fn test_star_emoji_inside_emphasis_still_replaced() {
    assert_eq!(
        render("*⭐*"),
        r#"<em><span class="text-warning">★☆☆☆☆</span></em>"#
    );
}

#[test]
fn test_rendering_is_a_fixed_pass_chain_not_a_parser() {
    // A multi-feature document flows through every pass in order; the
    // paragraph pass runs last and sees no remaining markdown markers.
    let html = render("## Report\n\n- score: ⭐⭐\n---\ndone");
    assert!(html.contains("<h4"));
    assert!(html.contains("• score: "));
    assert!(html.contains("★★☆☆☆"));
    assert!(html.contains("<hr"));
    assert!(html.contains(r#"</p><p class="mb-2">"#));
    assert!(html.contains("<br>"));
    assert!(!html.contains('\n'));
}

// -- Escaping is the caller's job -----------------------------------------

#[test]
fn test_render_passes_html_through_unescaped() {
    assert_eq!(render("<img src=x>"), "<img src=x>");
}

#[test]
fn test_escape_helper_neutralizes_tags() {
    assert_eq!(escape_html("<img src=x>"), "&lt;img src=x&gt;");
}

// -- Properties -----------------------------------------------------------

proptest! {
    #[test]
    fn test_render_never_panics(s in "\\PC*") {
        let _ = render(&s);
    }

    #[test]
    fn test_text_without_markers_is_untouched(s in "[a-z ]{0,64}") {
        prop_assert_eq!(render(&s), s);
    }

    #[test]
    fn test_output_empty_only_for_empty_input(s in "[a-z]{1,16}") {
        prop_assert!(!render(&s).is_empty());
    }
}
