//! In-memory transforms applied to rows fetched from the store.
//!
//! Pagination windows, substring search and random quiz selection. Nothing in
//! here touches the store.

use std::collections::HashSet;
use std::num::IntErrorKind;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// Fixed number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse the `page` query value. Missing or non-integer values mean page 1.
///
/// Integers outside the `i64` range saturate, so a huge page stays past the
/// last page and a huge negative one is clamped like any other page below 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };

    match raw.trim().parse::<i64>() {
        Ok(page) => page,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 1,
        },
    }
}

/// A contiguous `[start, end)` slice of an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Window for a 1-indexed page. Pages below 1 are clamped to 1.
    pub fn for_page(page: i64) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
        Self {
            start,
            end: start.saturating_add(QUESTIONS_PER_PAGE),
        }
    }

    /// Apply the window, clipping to the slice bounds.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = self.end.min(items.len());
        &items[start..end]
    }
}

/// The page of `items` for `page`.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    Window::for_page(page).apply(items).to_vec()
}

/// Case-insensitive substring match.
pub fn matches_term(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Keep the questions whose text contains `term`, preserving order.
pub fn search_questions(questions: Vec<Question>, term: &str) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| matches_term(&q.question, term))
        .collect()
}

/// Drop every question whose id was already played.
pub fn exclude_seen(questions: Vec<Question>, seen: &[i64]) -> Vec<Question> {
    if seen.is_empty() {
        return questions;
    }
    let seen: HashSet<i64> = seen.iter().copied().collect();
    questions
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect()
}

/// Pick one candidate uniformly at random.
pub fn choose_with<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

/// Pick one candidate uniformly at random using the thread-local generator.
pub fn choose(candidates: &[Question]) -> Option<Question> {
    choose_with(candidates, &mut rand::thread_rng())
}
