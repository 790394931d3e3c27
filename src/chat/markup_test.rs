use super::*;

// =============================================================
// format_reply
// =============================================================

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(format_reply("Hello there"), "Hello there");
}

#[test]
fn double_asterisks_become_bold() {
    assert_eq!(format_reply("Hi **there**"), "Hi <strong>there</strong>");
}

#[test]
fn single_asterisks_become_italic() {
    assert_eq!(format_reply("an *option*"), "an <em>option</em>");
}

#[test]
fn substitution_is_global_and_lazy() {
    assert_eq!(
        format_reply("**a** and **b**, *c* or *d*"),
        "<strong>a</strong> and <strong>b</strong>, <em>c</em> or <em>d</em>"
    );
}

#[test]
fn bold_claims_its_asterisks_before_italic() {
    assert_eq!(format_reply("**a*b**"), "<strong>a*b</strong>");
}

#[test]
fn empty_bold_span_is_kept_as_empty_element() {
    assert_eq!(format_reply("****"), "<strong></strong>");
}

#[test]
fn unmatched_asterisk_is_left_alone() {
    assert_eq!(format_reply("2 * 3 = 6"), "2 * 3 = 6");
}

#[test]
fn spans_do_not_cross_newlines() {
    assert_eq!(format_reply("*a\nb*"), "*a\nb*");
}

#[test]
fn spans_do_not_cross_other_line_terminators() {
    assert_eq!(format_reply("*a\rb*"), "*a\rb*");
    assert_eq!(format_reply("*c\u{2028}d*"), "*c\u{2028}d*");
    assert_eq!(format_reply("*e\u{2029}f*"), "*e\u{2029}f*");
    assert!(!format_reply("**a\rb**").contains("<strong>"));
    assert!(!format_reply("**c\u{2028}d**").contains("<strong>"));
}

#[test]
fn multiline_replies_format_each_line() {
    assert_eq!(
        format_reply("Based on those skills, consider:\n- **Data Analyst**\n- *Engineer*"),
        "Based on those skills, consider:\n- <strong>Data Analyst</strong>\n- <em>Engineer</em>"
    );
}

#[test]
fn html_in_reply_is_escaped_before_formatting() {
    assert_eq!(
        format_reply("<script>**x**</script>"),
        "&lt;script&gt;<strong>x</strong>&lt;/script&gt;"
    );
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"a&b<c>"d"'e"#), "a&amp;b&lt;c&gt;&quot;d&quot;&#39;e");
}
