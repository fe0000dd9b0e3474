//! Style quiz: six multiple-choice questions whose answers vote for a style
//! category, resolved into a profile with product recommendations.

mod blueprint;
mod classifier;
pub mod domain;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use blueprint::StyleQuiz;
pub use classifier::classify_style;
pub use domain::{QuizOption, QuizQuestion, StyleCategory, StyleProfile, UnknownStyleCategory};
pub use router::{quiz_router, QuizRequestError};
pub use session::{
    next_quiz_state, InvalidQuizState, QuizEvent, QuizSession, QuizSnapshot, QuizState,
};
