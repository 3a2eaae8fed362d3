//! Drug-name mention extraction over publication titles
//!
//! Matching is case-insensitive and whole-token: a drug name counts as
//! mentioned only when its tokens appear as a contiguous run in the title.
//! "aspirin" never matches inside "aspirinate".

use pharmaline_core::{Drug, Publication};

/// A candidate (drug, publication) pair produced by the extractor.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub drug: &'a Drug,
    pub publication: &'a Publication,
}

/// Lowercased maximal alphanumeric runs of `text`.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when `needle` occurs as a contiguous run within `haystack`.
fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Find every drug mentioned in every publication title.
///
/// Pure computation: empty inputs yield an empty result. Pairs come out in
/// (publication, drug) input order, but nothing downstream depends on it.
pub fn extract_mentions<'a>(
    drugs: &'a [Drug],
    publications: &'a [Publication],
) -> Vec<Candidate<'a>> {
    let needles: Vec<(&Drug, Vec<String>)> = drugs
        .iter()
        .map(|d| (d, tokenize(&d.name)))
        .filter(|(_, tokens)| !tokens.is_empty())
        .collect();

    let mut pairs = Vec::new();
    for publication in publications {
        let title_tokens = tokenize(&publication.title);
        for &(drug, ref needle) in &needles {
            if contains_run(&title_tokens, needle) {
                pairs.push(Candidate { drug, publication });
            }
        }
    }

    log::debug!(
        "Extracted {} candidate pairs from {} drugs x {} publications",
        pairs.len(),
        drugs.len(),
        publications.len()
    );
    pairs
}
