//! Integration test: document merger behaviour on whole documents.
//!
//! ## Scenarios
//! 1. Empty document: section appended after a blank line, no index created.
//! 2. Existing index + older section: new date listed first, older section untouched.
//! 3. Re-running the same date replaces the section exactly once.
//! 4. Index rewrite is idempotent for the same date.
//! 5. Rendered sections read back into the same answers.
//! 6. A document without a final newline still gets a blank line before the new section.

use chrono::NaiveDate;
use worklog_core::merger::{extract_section, index_dates, rewrite_index};
use worklog_core::{merge_entry, render_section, AnswerSet, SectionChange};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn answers(did: &[&str], next: &[&str], block: &[&str], score: &str) -> AnswerSet {
    let own = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    AnswerSet {
        what_i_did: own(did),
        whats_next: own(next),
        what_block: own(block),
        productivity_score: score.parse().unwrap(),
    }
}

fn sample_answers() -> AnswerSet {
    answers(&["Wrote spec"], &["Review"], &["None"], "4")
}

#[test]
fn empty_document_gets_one_appended_section_and_no_index() {
    let out = merge_entry("", date("2024-01-10"), &sample_answers());
    assert_eq!(
        out.document,
        "\n## 2024-01-10\n1. What I did:\n    - Wrote spec\n2. What's next:\n    - Review\n3. What Block:\n    - None\n4. Productivity Score (1-5): 4\n"
    );
    assert_eq!(out.change, SectionChange::Appended);
    assert!(!out.index_present);
}

#[test]
fn new_date_goes_first_in_index_and_leaves_older_section_alone() {
    let older = render_section("2024-01-09", &answers(&["Old work"], &["More"], &["Waiting"], "3"));
    let doc = format!("## Index\n[2024-01-09](#2024-01-09)\n\n{}", older);

    let out = merge_entry(&doc, date("2024-01-10"), &sample_answers());

    assert!(out.index_present);
    assert_eq!(index_dates(&out.document), vec!["2024-01-10", "2024-01-09"]);
    assert!(out.document.starts_with(
        "## Index\n[2024-01-10](#2024-01-10)\n[2024-01-09](#2024-01-09)\n\n## 2024-01-09\n"
    ));
    assert!(out.document.contains(&older));
    assert_eq!(
        extract_section(&out.document, date("2024-01-09")).unwrap().what_i_did,
        vec!["Old work"]
    );
    // appended after the older section, separated by a blank line
    assert!(out.document.ends_with(&format!("\n\n{}", render_section("2024-01-10", &sample_answers()))));
}

#[test]
fn rerun_for_same_date_replaces_in_place() {
    let first = merge_entry("## Index\n", date("2024-01-10"), &sample_answers());
    let first = merge_entry(&first.document, date("2024-01-11"), &sample_answers()).document;

    let revised = answers(&["Rewrote spec", "Shipped"], &["Rest"], &["Nothing"], "5");
    let second = merge_entry(&first, date("2024-01-10"), &revised);

    assert_eq!(second.change, SectionChange::Replaced);
    assert_eq!(second.document.matches("\n## 2024-01-10\n").count(), 1);
    assert_eq!(second.document.matches("[2024-01-10]").count(), 1);
    assert_eq!(extract_section(&second.document, date("2024-01-10")), Some(revised));
    assert_eq!(
        extract_section(&second.document, date("2024-01-11")),
        extract_section(&first, date("2024-01-11"))
    );
    assert_eq!(index_dates(&second.document), vec!["2024-01-11", "2024-01-10"]);
}

#[test]
fn replacing_keeps_sections_for_other_dates_byte_identical() {
    let a = render_section("2024-01-08", &answers(&["a"], &["b"], &["c"], "1"));
    let c = render_section("2024-01-12", &answers(&["x"], &["y"], &["z"], "2"));
    let doc = format!(
        "{}\n{}\n{}",
        a,
        render_section("2024-01-10", &sample_answers()),
        c
    );
    let revised = answers(&["new"], &["n"], &["b"], "3");
    let out = merge_entry(&doc, date("2024-01-10"), &revised);
    assert_eq!(
        out.document,
        format!("{}\n{}\n{}", a, render_section("2024-01-10", &revised), c)
    );
}

#[test]
fn index_rewrite_is_idempotent() {
    let doc = "## Index\n[2024-01-05](#2024-01-05)\n[2024-01-07](#2024-01-07)\n## 2024-01-05\n";
    let once = rewrite_index(doc, "2024-01-07").unwrap();
    let twice = rewrite_index(&once, "2024-01-07").unwrap();
    assert_eq!(once, twice);
    assert_eq!(index_dates(&twice), vec!["2024-01-07", "2024-01-05"]);
}

#[test]
fn index_at_end_of_document_is_rewritten() {
    let out = merge_entry("## Index\n[2024-01-09](#2024-01-09)", date("2024-01-10"), &sample_answers());
    assert!(out.document.starts_with(
        "## Index\n[2024-01-10](#2024-01-10)\n[2024-01-09](#2024-01-09)\n\n## 2024-01-10\n"
    ));
}

#[test]
fn append_adds_blank_line_when_document_lacks_final_newline() {
    let out = merge_entry("## 2024-01-09\nold", date("2024-01-10"), &sample_answers());
    assert_eq!(out.change, SectionChange::Appended);
    assert_eq!(
        out.document,
        format!("## 2024-01-09\nold\n\n{}", render_section("2024-01-10", &sample_answers()))
    );
    assert_eq!(
        extract_section(&out.document, date("2024-01-10")),
        Some(sample_answers())
    );
}

#[test]
fn round_trip_preserves_strings_and_score() {
    let a = answers(
        &["Fixed `merge` bug", "Paired on #42", "  inner spaces kept  "],
        &["Write tests"],
        &["Waiting on review", "CI flaky"],
        "5",
    );
    let doc = format!("\n{}", render_section("2024-02-29", &a));
    assert_eq!(extract_section(&doc, date("2024-02-29")), Some(a));
}
