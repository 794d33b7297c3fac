//! Conditional block tests

use super::helpers::simple_record;
use super::*;
use crate::record::DataRecord;

#[test]
fn test_conditional_truthy_string() {
    let mut record = DataRecord::new();
    record.set("x", "a");
    assert_eq!(render("{{#if x}}YES{{/if}}", &record), "YES");
}

#[test]
fn test_conditional_falsy_missing_key() {
    let record = DataRecord::new();
    assert_eq!(render("{{#if x}}YES{{/if}}", &record), "");
}

#[test]
fn test_conditional_falsy_empty_string() {
    let mut record = DataRecord::new();
    record.set("x", "");
    assert_eq!(render("{{#if x}}YES{{/if}}", &record), "");
}

#[test]
fn test_conditional_falsy_blank_string() {
    let mut record = DataRecord::new();
    record.set("x", "   ");
    assert_eq!(render("{{#if x}}YES{{/if}}", &record), "");
}

#[test]
fn test_conditional_falsy_empty_list() {
    let mut record = DataRecord::new();
    record.set("x", Vec::<String>::new());
    assert_eq!(render("{{#if x}}YES{{/if}}", &record), "");
}

#[test]
fn test_conditional_truthy_list() {
    let mut record = DataRecord::new();
    record.set("x", vec!["step".to_string()]);
    assert_eq!(render("{{#if x}}YES{{/if}}", &record), "YES");
}

#[test]
fn test_conditional_numbers_and_booleans() {
    let mut record = DataRecord::new();
    record.set("on", true).set("off", false).set("n", 3i64).set("z", 0i64);

    assert_eq!(render("{{#if on}}A{{/if}}", &record), "A");
    assert_eq!(render("{{#if off}}A{{/if}}", &record), "");
    assert_eq!(render("{{#if n}}A{{/if}}", &record), "A");
    assert_eq!(render("{{#if z}}A{{/if}}", &record), "");
}

#[test]
fn test_conditional_body_placeholders_resolved() {
    let mut record = DataRecord::new();
    record.set("notes", "check daily");
    assert_eq!(
        render("{{#if notes}}<p>{{notes}}</p>{{/if}}", &record),
        "<p>check daily</p>"
    );
}

#[test]
fn test_conditional_tags_never_leak() {
    let record = simple_record();
    let out = render("a{{#if title}}b{{/if}}c{{#if missing}}d{{/if}}e", &record);
    assert_eq!(out, "abce");
    assert!(!out.contains("{{"));
}

#[test]
fn test_conditional_multiple_blocks() {
    let mut record = DataRecord::new();
    record.set("a", "1").set("b", "");
    assert_eq!(
        render("{{#if a}}A{{/if}}-{{#if b}}B{{/if}}-{{#if a}}C{{/if}}", &record),
        "A--C"
    );
}

#[test]
fn test_conditional_nested_if_closes_on_first_end() {
    // Nesting is not supported: the inner {{/if}} closes the outer block,
    // and the trailing close is dropped by cleanup
    let mut record = DataRecord::new();
    record.set("a", "1").set("b", "1");
    let out = render("{{#if a}}X{{#if b}}Y{{/if}}Z{{/if}}", &record);
    assert_eq!(out, "XYZ");
}

#[test]
fn test_conditional_unterminated_block_degrades() {
    // The opener is cleaned up; the body was never isolated and stays
    let mut record = DataRecord::new();
    record.set("x", "1");
    assert_eq!(render("before {{#if x}}body", &record), "before body");
}

#[test]
fn test_conditional_dangling_end_removed() {
    let record = simple_record();
    assert_eq!(render("text {{/if}} more", &record), "text  more");
}

#[test]
fn test_render_is_deterministic() {
    let record = simple_record();
    let template = "<h1>{{title}}</h1>{{#if enabled}}on{{/if}}{{unknown}}";
    assert_eq!(render(template, &record), render(template, &record));
}
