//! Document merger: folds one day's answers into the Markdown log.
//!
//! The document has two kinds of level-2 regions, located by the same rule: a region starts at
//! a line `## <title>` and runs up to (not including) the newline in front of the next line
//! starting with `## `, or to the end of the text.
//!
//! - `## Index` holds one `[YYYY-MM-DD](#YYYY-MM-DD)` line per date, newest first.
//! - `## YYYY-MM-DD` holds that day's four answer groups.
//!
//! Merging rewrites the index (if there is one; a missing index is left missing) and then
//! replaces the date's section in place or appends it at the end. Everything here is pure.

use crate::answers::{AnswerSet, ProductivityScore};
use crate::DATE_FORMAT;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::Range;

pub const INDEX_TITLE: &str = "Index";

const LABEL_DID: &str = "1. What I did:";
const LABEL_NEXT: &str = "2. What's next:";
const LABEL_BLOCK: &str = "3. What Block:";
const LABEL_SCORE: &str = "4. Productivity Score (1-5):";
const BULLET: &str = "    - ";
const NEXT_HEADING: &str = "\n## ";

static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{4}-\d{2}-\d{2})\]").expect("date token pattern"));

/// What happened to the date section during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionChange {
    Replaced,
    Appended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub document: String,
    pub change: SectionChange,
    /// Whether an `## Index` region existed (and was rewritten).
    pub index_present: bool,
}

/// Start and end of the `## <title>` heading line, excluding its newline.
fn find_heading(doc: &str, title: &str) -> Option<Range<usize>> {
    let mut offset = 0;
    for line in doc.split_inclusive('\n') {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if let Some(rest) = text.strip_prefix("## ") {
            if rest.trim_end() == title {
                return Some(offset..offset + text.len());
            }
        }
        offset += line.len();
    }
    None
}

/// Byte range of the region headed `## <title>`.
fn find_region(doc: &str, title: &str) -> Option<Range<usize>> {
    let heading = find_heading(doc, title)?;
    let end = doc[heading.end..]
        .find(NEXT_HEADING)
        .map(|p| heading.end + p)
        .unwrap_or(doc.len());
    Some(heading.start..end)
}

/// Dates listed in the index region, in document order. Empty when there is no index.
pub fn index_dates(doc: &str) -> Vec<String> {
    match find_region(doc, INDEX_TITLE) {
        Some(r) => DATE_TOKEN
            .captures_iter(&doc[r])
            .map(|c| c[1].to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Render the index block for a set of dates: newest first, each on its own line.
pub fn render_index<'a, I>(dates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let set: BTreeSet<&str> = dates.into_iter().collect();
    let mut out = format!("## {}\n", INDEX_TITLE);
    for d in set.iter().rev() {
        out.push_str(&format!("[{d}](#{d})\n"));
    }
    out
}

/// Rewrite the index with `date` included. `None` when the document has no index region.
///
/// The rebuilt block ends with a newline and the region boundary excludes the newline before
/// the next heading, so exactly one blank line separates the index from what follows.
pub fn rewrite_index(doc: &str, date: &str) -> Option<String> {
    let region = find_region(doc, INDEX_TITLE)?;
    let existing = &doc[region.clone()];
    let mut dates: BTreeSet<&str> = DATE_TOKEN
        .captures_iter(existing)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    dates.insert(date);

    let mut out = String::with_capacity(doc.len() + 32);
    out.push_str(&doc[..region.start]);
    out.push_str(&render_index(dates));
    out.push_str(&doc[region.end..]);
    Some(out)
}

/// Render one date section, heading included, ending with a newline.
pub fn render_section(date: &str, answers: &AnswerSet) -> String {
    let mut out = format!("## {}\n", date);
    for (label, items) in [
        (LABEL_DID, &answers.what_i_did),
        (LABEL_NEXT, &answers.whats_next),
        (LABEL_BLOCK, &answers.what_block),
    ] {
        out.push_str(label);
        out.push('\n');
        for item in items {
            out.push_str(BULLET);
            out.push_str(item);
            out.push('\n');
        }
    }
    out.push_str(&format!("{} {}\n", LABEL_SCORE, answers.productivity_score));
    out
}

/// Replace the section for `date` or append it after a blank line.
pub fn upsert_section(doc: &str, date: &str, answers: &AnswerSet) -> (String, SectionChange) {
    let section = render_section(date, answers);
    match find_region(doc, date) {
        Some(region) => {
            let mut out = String::with_capacity(doc.len() + section.len());
            out.push_str(&doc[..region.start]);
            out.push_str(&section);
            out.push_str(&doc[region.end..]);
            (out, SectionChange::Replaced)
        }
        None => {
            let mut out = String::with_capacity(doc.len() + section.len() + 2);
            out.push_str(doc);
            // a document saved without a final newline still gets a blank line before the heading
            if !doc.is_empty() && !doc.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&section);
            (out, SectionChange::Appended)
        }
    }
}

/// Merge one day's answers into the document: index first, then the date section.
pub fn merge_entry(previous: &str, date: NaiveDate, answers: &AnswerSet) -> MergeOutcome {
    let date = date.format(DATE_FORMAT).to_string();

    let (indexed, index_present) = match rewrite_index(previous, &date) {
        Some(doc) => (doc, true),
        None => {
            tracing::debug!("no index region; index left untouched");
            (previous.to_string(), false)
        }
    };

    let (document, change) = upsert_section(&indexed, &date, answers);
    tracing::debug!(date = %date, ?change, index_present, "entry merged");

    MergeOutcome {
        document,
        change,
        index_present,
    }
}

/// Read a rendered date section back into an answer set.
pub fn extract_section(doc: &str, date: NaiveDate) -> Option<AnswerSet> {
    let date = date.format(DATE_FORMAT).to_string();
    let region = find_region(doc, &date)?;

    let mut groups: [Vec<String>; 3] = Default::default();
    let mut current: Option<usize> = None;
    let mut score: Option<ProductivityScore> = None;

    for line in doc[region].lines().skip(1) {
        if line == LABEL_DID {
            current = Some(0);
        } else if line == LABEL_NEXT {
            current = Some(1);
        } else if line == LABEL_BLOCK {
            current = Some(2);
        } else if let Some(rest) = line.strip_prefix(LABEL_SCORE) {
            score = rest.trim().parse().ok();
            current = None;
        } else if let (Some(i), Some(item)) = (current, line.strip_prefix(BULLET)) {
            groups[i].push(item.to_string());
        }
    }

    let [what_i_did, whats_next, what_block] = groups;
    Some(AnswerSet {
        what_i_did,
        whats_next,
        what_block,
        productivity_score: score?,
    })
}
