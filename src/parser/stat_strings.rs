use super::constants::{SUFFIX_CRAFTED, SUFFIX_IMPLICIT};
use crate::models::ModifierType;

/// A candidate stat string produced by [`StatStrings`], with any trailing
/// `(implicit)`/`(crafted)` marker stripped and remembered.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCandidate {
    pub text: String,
    pub tentative: Option<ModifierType>,
}

/// Cursor over the candidate stat strings of one section.
///
/// Whether two adjacent lines are one combined stat or two separate ones
/// cannot be decided from the text alone, so the cursor proposes the
/// two-line join first and the caller reports back through
/// [`advance`](Self::advance) whether the knowledge base accepted it.
/// A rejected join is retried as a single line; a rejected single line is
/// dropped.
pub struct StatStrings<'a> {
    lines: &'a [String],
    idx: usize,
    joined: bool,
}

impl<'a> StatStrings<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            idx: 0,
            joined: lines.len() > 1,
        }
    }

    /// The current candidate, or `None` once the section is exhausted.
    pub fn peek(&self) -> Option<StatCandidate> {
        if self.idx >= self.lines.len() {
            return None;
        }
        let text = if self.joined {
            format!("{}\n{}", self.lines[self.idx], self.lines[self.idx + 1])
        } else {
            self.lines[self.idx].clone()
        };
        Some(strip_marker(text))
    }

    /// Report whether the candidate from [`peek`](Self::peek) matched and
    /// move to the next segmentation.
    pub fn advance(&mut self, accepted: bool) {
        if accepted {
            self.idx += if self.joined { 2 } else { 1 };
            self.joined = self.idx + 1 < self.lines.len();
        } else if self.joined {
            self.joined = false;
        } else {
            self.idx += 1;
            self.joined = self.idx + 1 < self.lines.len();
        }
    }
}

fn strip_marker(text: String) -> StatCandidate {
    if let Some(stripped) = text.strip_suffix(SUFFIX_IMPLICIT) {
        StatCandidate {
            text: stripped.to_string(),
            tentative: Some(ModifierType::Implicit),
        }
    } else if let Some(stripped) = text.strip_suffix(SUFFIX_CRAFTED) {
        StatCandidate {
            text: stripped.to_string(),
            tentative: Some(ModifierType::Crafted),
        }
    } else {
        StatCandidate {
            text,
            tentative: None,
        }
    }
}
