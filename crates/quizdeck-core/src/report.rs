//! Score report and grading tiers.

use serde::Serialize;

use crate::session::AnswerRecord;

/// Snapshot of a session's score, produced by
/// [`Session::report`](crate::session::Session::report).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Title of the quiz this report is for.
    pub title: String,
    /// Questions answered correctly.
    pub score: usize,
    /// Total questions in the quiz.
    pub total: usize,
    /// `score / total` as a percentage in `[0, 100]`.
    pub percentage: f64,
    /// Every submitted answer, in order.
    pub breakdown: Vec<AnswerRecord>,
}

impl ScoreReport {
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// Performance tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    /// 90% and up.
    Outstanding,
    /// 70% to 89%.
    Good,
    /// 50% to 69%.
    Fair,
    /// Below 50%.
    NeedsReview,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Outstanding
        } else if percentage >= 70.0 {
            Grade::Good
        } else if percentage >= 50.0 {
            Grade::Fair
        } else {
            Grade::NeedsReview
        }
    }

    /// The remark line printed under the final score.
    pub fn remark(&self) -> &'static str {
        match self {
            Grade::Outstanding => "Outstanding performance!",
            Grade::Good => "Good job!",
            Grade::Fair => "Not bad, keep studying!",
            Grade::NeedsReview => "You might need to review this topic again.",
        }
    }
}
