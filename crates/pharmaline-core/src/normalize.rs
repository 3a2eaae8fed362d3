//! Raw-record validation and canonicalization
//!
//! The only place where duck-shaped input rows become typed records. Rows
//! missing a required field or carrying an unparseable date are dropped and
//! counted; exact duplicates collapse to one canonical record so re-ingesting
//! the same file is idempotent.

use chrono::NaiveDate;
use rustc_hash::FxHashSet;

use crate::date;
use crate::quality::{DropReason, QualityReport};
use crate::record::{Drug, Publication, RawDrugRecord, RawPublicationRecord, SourceType};

fn trimmed(field: Option<&str>) -> &str {
    field.map(str::trim).unwrap_or("")
}

/// Validate and canonicalize raw drug rows.
///
/// Requires a non-empty name; tolerates an empty ATC code. Duplicate rows
/// (same lowercased name and code) collapse to the first occurrence.
pub fn normalize_drugs(raw: &[RawDrugRecord], report: &mut QualityReport) -> Vec<Drug> {
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    let mut drugs = Vec::new();

    for row in raw {
        report.rows_seen += 1;
        let name = trimmed(row.name.as_deref());
        if name.is_empty() {
            report.record_drop(DropReason::MissingName);
            continue;
        }
        let atccode = trimmed(row.atccode.as_deref()).to_string();
        if !seen.insert((name.to_lowercase(), atccode.clone())) {
            report.duplicates += 1;
            continue;
        }
        report.rows_kept += 1;
        drugs.push(Drug {
            atccode,
            name: name.to_string(),
        });
    }

    log::info!("Normalized {} drugs from {} raw rows", drugs.len(), raw.len());
    drugs
}

/// Identity of a fully-normalized publication row, for duplicate collapse.
type PublicationKey = (String, String, NaiveDate, String, SourceType);

/// Validate and canonicalize raw publication rows.
///
/// Requires id, title, a non-empty journal and a date in one of the accepted
/// formats. Rows identical on every field after trimming collapse to one.
pub fn normalize_publications(
    raw: &[RawPublicationRecord],
    report: &mut QualityReport,
) -> Vec<Publication> {
    let mut seen: FxHashSet<PublicationKey> = FxHashSet::default();
    let mut publications = Vec::new();

    for row in raw {
        report.rows_seen += 1;

        let id = trimmed(row.id.as_deref());
        if id.is_empty() {
            report.record_drop(DropReason::MissingId);
            continue;
        }
        let title = trimmed(row.title.as_deref());
        if title.is_empty() {
            report.record_drop(DropReason::MissingTitle);
            continue;
        }
        let journal = trimmed(row.journal.as_deref());
        if journal.is_empty() {
            report.record_drop(DropReason::MissingJournal);
            continue;
        }
        let Some(parsed) = date::parse_date(trimmed(row.date.as_deref())) else {
            report.record_drop(DropReason::UnparseableDate);
            continue;
        };

        let key = (
            id.to_string(),
            title.to_string(),
            parsed,
            journal.to_string(),
            row.source_type,
        );
        if !seen.insert(key) {
            report.duplicates += 1;
            continue;
        }

        report.rows_kept += 1;
        publications.push(Publication {
            id: id.to_string(),
            title: title.to_string(),
            date: parsed,
            journal: journal.to_string(),
            source_type: row.source_type,
        });
    }

    log::info!(
        "Normalized {} publications from {} raw rows",
        publications.len(),
        raw.len()
    );
    publications
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_drug(atccode: &str, name: &str) -> RawDrugRecord {
        RawDrugRecord {
            atccode: Some(atccode.to_string()),
            name: Some(name.to_string()),
        }
    }

    fn raw_pub(id: &str, title: &str, date: &str, journal: &str) -> RawPublicationRecord {
        RawPublicationRecord {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            journal: Some(journal.to_string()),
            source_type: SourceType::Pubmed,
        }
    }

    #[test]
    fn drugs_trim_and_keep() {
        let mut report = QualityReport::default();
        let drugs = normalize_drugs(&[raw_drug("A04AD", "  Diphenhydramine ")], &mut report);
        assert_eq!(drugs.len(), 1);
        assert_eq!(drugs[0].name, "Diphenhydramine");
        assert_eq!(drugs[0].atccode, "A04AD");
        assert_eq!(report.rows_kept, 1);
    }

    #[test]
    fn drugs_missing_name_dropped_and_counted() {
        let mut report = QualityReport::default();
        let rows = [
            RawDrugRecord {
                atccode: Some("X".to_string()),
                name: None,
            },
            raw_drug("Y", "   "),
            raw_drug("A01", "ethanol"),
        ];
        let drugs = normalize_drugs(&rows, &mut report);
        assert_eq!(drugs.len(), 1);
        assert_eq!(report.dropped(DropReason::MissingName), 2);
    }

    #[test]
    fn drugs_empty_atccode_tolerated() {
        let mut report = QualityReport::default();
        let rows = [RawDrugRecord {
            atccode: None,
            name: Some("atropine".to_string()),
        }];
        let drugs = normalize_drugs(&rows, &mut report);
        assert_eq!(drugs.len(), 1);
        assert_eq!(drugs[0].atccode, "");
    }

    #[test]
    fn drugs_case_variants_collapse() {
        let mut report = QualityReport::default();
        let rows = [raw_drug("A04AD", "Diphenhydramine"), raw_drug("A04AD", "DIPHENHYDRAMINE")];
        let drugs = normalize_drugs(&rows, &mut report);
        assert_eq!(drugs.len(), 1);
        // first spelling wins
        assert_eq!(drugs[0].name, "Diphenhydramine");
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn drugs_same_name_different_code_kept_apart() {
        let mut report = QualityReport::default();
        let rows = [raw_drug("A01", "paracetamol"), raw_drug("B02", "paracetamol")];
        let drugs = normalize_drugs(&rows, &mut report);
        assert_eq!(drugs.len(), 2);
    }

    #[test]
    fn publications_valid_row_kept() {
        let mut report = QualityReport::default();
        let pubs = normalize_publications(
            &[raw_pub("1", " A study of ethanol ", "2020-01-01", " The Lancet ")],
            &mut report,
        );
        assert_eq!(pubs.len(), 1);
        assert_eq!(pubs[0].title, "A study of ethanol");
        assert_eq!(pubs[0].journal, "The Lancet");
        assert_eq!(pubs[0].date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn publications_drop_reasons_counted() {
        let mut report = QualityReport::default();
        let rows = [
            RawPublicationRecord {
                id: None,
                title: Some("t".to_string()),
                date: Some("2020-01-01".to_string()),
                journal: Some("j".to_string()),
                source_type: SourceType::Pubmed,
            },
            raw_pub("2", "", "2020-01-01", "j"),
            raw_pub("3", "t", "2020-01-01", "  "),
            raw_pub("4", "t", "someday in 2020", "j"),
            raw_pub("5", "t", "2020-01-01", "j"),
        ];
        let pubs = normalize_publications(&rows, &mut report);
        assert_eq!(pubs.len(), 1);
        assert_eq!(report.dropped(DropReason::MissingId), 1);
        assert_eq!(report.dropped(DropReason::MissingTitle), 1);
        assert_eq!(report.dropped(DropReason::MissingJournal), 1);
        assert_eq!(report.dropped(DropReason::UnparseableDate), 1);
        assert_eq!(report.total_dropped(), 4);
    }

    #[test]
    fn publications_mixed_date_formats_canonicalize() {
        let mut report = QualityReport::default();
        let rows = [
            raw_pub("1", "a", "2020-01-01", "j"),
            raw_pub("2", "b", "01/01/2020", "j"),
            raw_pub("3", "c", "1 January 2020", "j"),
        ];
        let pubs = normalize_publications(&rows, &mut report);
        let expected = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(pubs.iter().all(|p| p.date == expected));
    }

    #[test]
    fn publications_exact_duplicates_collapse() {
        let mut report = QualityReport::default();
        let rows = [
            raw_pub("1", "Tetracycline trial", "2020-01-01", "J"),
            raw_pub("1", "  Tetracycline trial ", "2020-01-01", " J "),
        ];
        let pubs = normalize_publications(&rows, &mut report);
        assert_eq!(pubs.len(), 1);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn normalize_is_idempotent_over_repeated_input() {
        let rows = [
            raw_pub("1", "a", "2020-01-01", "j"),
            raw_pub("2", "b", "2020-02-01", "j"),
        ];
        let mut doubled: Vec<_> = rows.to_vec();
        doubled.extend(rows.to_vec());

        let mut r1 = QualityReport::default();
        let once = normalize_publications(&rows, &mut r1);
        let mut r2 = QualityReport::default();
        let twice = normalize_publications(&doubled, &mut r2);

        assert_eq!(once, twice);
        assert_eq!(r2.duplicates, 2);
    }
}
