//! Day-based grouping of archive documents
//!
//! Takes the flat document list a successful fetch produces and arranges it
//! into the labeled, day-ordered sections a list view renders.

use crate::types::{DaySection, Document};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Section label for documents with no publication date
const UNKNOWN_DAY_LABEL: &str = "?";

/// Bucket reserved for documents with no publication date; sorts before day 1
const UNKNOWN_DAY: u32 = 0;

/// Partition documents into day sections sorted ascending by day of month
///
/// Days are computed on the fixed UTC calendar, never the host time zone, so
/// an article published near midnight does not drift into the neighbouring
/// day for readers elsewhere. Documents with no publication date land in a
/// single leading section labeled `"?"`; all other sections are labeled with
/// the decimal day number. Relative input order is preserved inside each
/// section, and no document is dropped or deduplicated.
#[must_use]
pub fn group(documents: Vec<Document>) -> Vec<DaySection> {
    let mut buckets: BTreeMap<u32, Vec<Document>> = BTreeMap::new();
    for doc in documents {
        let day = doc.pub_date.map_or(UNKNOWN_DAY, |date| date.day());
        buckets.entry(day).or_default().push(doc);
    }

    buckets
        .into_iter()
        .map(|(day, documents)| DaySection {
            label: if day == UNKNOWN_DAY {
                UNKNOWN_DAY_LABEL.to_string()
            } else {
                day.to_string()
            },
            documents,
        })
        .collect()
}
