//! Keyword scoring and ordering of scored papers.

use crate::model::{Paper, ScoredPaper};
use std::cmp::Ordering;

/// Sums case-insensitive, non-overlapping occurrence counts of every keyword.
///
/// Keywords are trimmed; blank keywords are ignored.
pub fn score_text<S: AsRef<str>>(text: &str, keywords: &[S]) -> u32 {
    if keywords.is_empty() {
        return 0;
    }

    let content = text.to_lowercase();
    keywords
        .iter()
        .map(|keyword| keyword.as_ref().trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .map(|keyword| content.matches(keyword.as_str()).count() as u32)
        .sum()
}

/// Scores a paper's title and summary together.
pub fn score_paper<S: AsRef<str>>(paper: &Paper, keywords: &[S]) -> u32 {
    score_text(&format!("{} {}", paper.title, paper.summary), keywords)
}

/// Keeps papers scoring at least `min_score`.
pub fn filter_min_score(papers: Vec<ScoredPaper>, min_score: u32) -> Vec<ScoredPaper> {
    papers
        .into_iter()
        .filter(|paper| paper.score >= min_score)
        .collect()
}

/// Sorts by score, highest first; ties go to the most recently published.
///
/// Papers without a publication time sort after dated ones of equal score.
/// The sort is stable.
pub fn sort_by_score(papers: &mut [ScoredPaper]) {
    papers.sort_by(compare_by_score);
}

fn compare_by_score(a: &ScoredPaper, b: &ScoredPaper) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.paper.published_at.cmp(&a.paper.published_at))
}

/// Splits off the first `top_n` papers; `0` selects all of them.
///
/// Returns `(selected, remaining)`, both in their original order.
pub fn take_top(mut papers: Vec<ScoredPaper>, top_n: usize) -> (Vec<ScoredPaper>, Vec<ScoredPaper>) {
    if top_n == 0 || top_n >= papers.len() {
        return (papers, Vec::new());
    }
    let remaining = papers.split_off(top_n);
    (papers, remaining)
}
