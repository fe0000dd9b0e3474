use serde::{Deserialize, Serialize};

use super::blueprint::StyleQuiz;
use super::classifier::classify_style;
use super::domain::{QuizQuestion, StyleCategory, StyleProfile};

/// Progress of one run through the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizState {
    InProgress {
        current_question_index: usize,
        answers: Vec<StyleCategory>,
    },
    Completed {
        answers: Vec<StyleCategory>,
        result: StyleCategory,
    },
}

impl Default for QuizState {
    fn default() -> Self {
        Self::InProgress {
            current_question_index: 0,
            answers: Vec::new(),
        }
    }
}

impl QuizState {
    pub fn answers(&self) -> &[StyleCategory] {
        match self {
            Self::InProgress { answers, .. } | Self::Completed { answers, .. } => answers,
        }
    }

    pub fn result(&self) -> Option<StyleCategory> {
        match self {
            Self::InProgress { .. } => None,
            Self::Completed { result, .. } => Some(*result),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Reject states that could not have been produced by this quiz, such as
    /// ones handed back by a client.
    ///
    /// `Previous` never drops an answer, so a reachable state always holds at
    /// least one answer per question already passed, and a completed state
    /// carries the result its answers classify to.
    pub fn check(&self, quiz: &StyleQuiz) -> Result<(), InvalidQuizState> {
        let count = quiz.question_count();
        match self {
            Self::InProgress {
                current_question_index,
                answers,
            } => {
                if *current_question_index >= count {
                    return Err(InvalidQuizState::QuestionOutOfRange {
                        index: *current_question_index,
                        count,
                    });
                }
                if answers.len() < *current_question_index {
                    return Err(InvalidQuizState::TooFewAnswers {
                        answered: answers.len(),
                        required: *current_question_index,
                    });
                }
                Ok(())
            }
            Self::Completed { answers, result } => {
                if answers.len() < count {
                    return Err(InvalidQuizState::TooFewAnswers {
                        answered: answers.len(),
                        required: count,
                    });
                }
                match classify_style(answers) {
                    Some(expected) if expected == *result => Ok(()),
                    expected => Err(InvalidQuizState::ResultMismatch {
                        claimed: *result,
                        expected,
                    }),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuizState {
    #[error("question index {index} is outside a {count}-question quiz")]
    QuestionOutOfRange { index: usize, count: usize },
    #[error("{answered} answer(s) recorded where at least {required} are needed")]
    TooFewAnswers { answered: usize, required: usize },
    #[error("result '{claimed}' does not match the recorded answers")]
    ResultMismatch {
        claimed: StyleCategory,
        expected: Option<StyleCategory>,
    },
}

/// User actions on the quiz card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "style", rename_all = "snake_case")]
pub enum QuizEvent {
    Answer(StyleCategory),
    Previous,
    Reset,
}

/// Pure transition function for the quiz.
///
/// `Previous` moves back a question without retracting the answer already
/// recorded for it, so the next `Answer` appends alongside it. `Answer` on a
/// completed quiz and `Previous` on the first question are ignored.
pub fn next_quiz_state(quiz: &StyleQuiz, state: QuizState, event: QuizEvent) -> QuizState {
    match (state, event) {
        (_, QuizEvent::Reset) => QuizState::default(),
        (
            QuizState::InProgress {
                current_question_index,
                mut answers,
            },
            QuizEvent::Answer(tag),
        ) => {
            answers.push(tag);
            if current_question_index + 1 < quiz.question_count() {
                QuizState::InProgress {
                    current_question_index: current_question_index + 1,
                    answers,
                }
            } else {
                // answers now holds at least `tag`
                let result = classify_style(&answers).unwrap_or(tag);
                QuizState::Completed { answers, result }
            }
        }
        (
            QuizState::InProgress {
                current_question_index,
                answers,
            },
            QuizEvent::Previous,
        ) if current_question_index > 0 => QuizState::InProgress {
            current_question_index: current_question_index - 1,
            answers,
        },
        (state, _) => state,
    }
}

/// Flattened view of a quiz run for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub current_question_index: usize,
    pub answers: Vec<StyleCategory>,
    pub completed: bool,
    pub result: Option<StyleCategory>,
    pub progress_percent: u8,
}

/// A quiz run bound to its question set.
#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    quiz: &'q StyleQuiz,
    state: QuizState,
}

impl<'q> QuizSession<'q> {
    pub fn new(quiz: &'q StyleQuiz) -> Self {
        Self {
            quiz,
            state: QuizState::default(),
        }
    }

    pub fn resume(quiz: &'q StyleQuiz, state: QuizState) -> Result<Self, InvalidQuizState> {
        state.check(quiz)?;
        Ok(Self { quiz, state })
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn into_state(self) -> QuizState {
        self.state
    }

    pub fn apply(&mut self, event: QuizEvent) -> &QuizState {
        let state = std::mem::take(&mut self.state);
        self.state = next_quiz_state(self.quiz, state, event);
        &self.state
    }

    pub fn answer(&mut self, tag: StyleCategory) -> &QuizState {
        self.apply(QuizEvent::Answer(tag))
    }

    /// Answer the current question by option id (`"a"`..`"d"`). Unknown ids
    /// and completed sessions leave the state untouched.
    pub fn choose(&mut self, option_id: &str) -> &QuizState {
        let tag = self
            .current_question()
            .and_then(|question| question.option(option_id))
            .map(|option| option.style_tag);
        match tag {
            Some(tag) => self.answer(tag),
            None => &self.state,
        }
    }

    pub fn previous(&mut self) -> &QuizState {
        self.apply(QuizEvent::Previous)
    }

    pub fn reset(&mut self) -> &QuizState {
        self.apply(QuizEvent::Reset)
    }

    pub fn current_question(&self) -> Option<&'q QuizQuestion> {
        match &self.state {
            QuizState::InProgress {
                current_question_index,
                ..
            } => self.quiz.question(*current_question_index),
            QuizState::Completed { .. } => None,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        match &self.state {
            QuizState::Completed { .. } => 100,
            QuizState::InProgress {
                current_question_index,
                ..
            } => {
                let count = self.quiz.question_count().max(1);
                (current_question_index * 100 / count).min(100) as u8
            }
        }
    }

    pub fn profile(&self) -> Option<&'q StyleProfile> {
        self.state.result().map(|category| self.quiz.profile(category))
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let current_question_index = match &self.state {
            QuizState::InProgress {
                current_question_index,
                ..
            } => *current_question_index,
            QuizState::Completed { .. } => self.quiz.question_count(),
        };

        QuizSnapshot {
            current_question_index,
            answers: self.state.answers().to_vec(),
            completed: self.state.is_completed(),
            result: self.state.result(),
            progress_percent: self.progress_percent(),
        }
    }
}
