use crate::workflows::quiz::session::{InvalidQuizState, QuizSession};
use crate::workflows::quiz::{next_quiz_state, QuizEvent, QuizState, StyleCategory, StyleQuiz};
use StyleCategory::*;

#[test]
fn six_answers_complete_the_standard_quiz() {
    let quiz = StyleQuiz::standard();
    let mut state = QuizState::default();
    for tag in [Classic, Bold, Classic, Casual, Bold, Classic] {
        assert!(!state.is_completed());
        state = next_quiz_state(&quiz, state, QuizEvent::Answer(tag));
    }

    match state {
        QuizState::Completed { answers, result } => {
            assert_eq!(answers.len(), 6);
            assert_eq!(result, Classic);
        }
        other => panic!("expected completed quiz, got {other:?}"),
    }
}

#[test]
fn answers_track_the_question_index_while_in_progress() {
    let quiz = StyleQuiz::standard();
    let mut state = QuizState::default();
    for (step, tag) in [Bold, Edgy, Romantic].into_iter().enumerate() {
        state = next_quiz_state(&quiz, state, QuizEvent::Answer(tag));
        match &state {
            QuizState::InProgress {
                current_question_index,
                answers,
            } => {
                assert_eq!(*current_question_index, step + 1);
                assert_eq!(answers.len(), *current_question_index);
            }
            other => panic!("quiz completed early: {other:?}"),
        }
        assert_eq!(state.result(), None);
    }
}

#[test]
fn previous_moves_back_without_retracting_the_answer() {
    let quiz = StyleQuiz::standard();
    let state = next_quiz_state(&quiz, QuizState::default(), QuizEvent::Answer(Bold));
    let state = next_quiz_state(&quiz, state, QuizEvent::Previous);
    assert_eq!(
        state,
        QuizState::InProgress {
            current_question_index: 0,
            answers: vec![Bold],
        }
    );

    let state = next_quiz_state(&quiz, state, QuizEvent::Answer(Casual));
    assert_eq!(
        state,
        QuizState::InProgress {
            current_question_index: 1,
            answers: vec![Bold, Casual],
        }
    );
}

#[test]
fn invalid_events_are_ignored() {
    let quiz = StyleQuiz::standard();

    let start = QuizState::default();
    assert_eq!(
        next_quiz_state(&quiz, start.clone(), QuizEvent::Previous),
        start
    );

    let done = QuizState::Completed {
        answers: vec![Edgy; 6],
        result: Edgy,
    };
    assert_eq!(
        next_quiz_state(&quiz, done.clone(), QuizEvent::Answer(Classic)),
        done
    );
    assert_eq!(next_quiz_state(&quiz, done.clone(), QuizEvent::Previous), done);
}

#[test]
fn reset_is_available_from_any_state() {
    let quiz = StyleQuiz::standard();
    let done = QuizState::Completed {
        answers: vec![Romantic],
        result: Romantic,
    };
    assert_eq!(
        next_quiz_state(&quiz, done, QuizEvent::Reset),
        QuizState::default()
    );

    let midway = QuizState::InProgress {
        current_question_index: 3,
        answers: vec![Bold, Bold, Bold],
    };
    assert_eq!(
        next_quiz_state(&quiz, midway, QuizEvent::Reset),
        QuizState::default()
    );
}

#[test]
fn session_reports_progress_questions_and_profile() {
    let quiz = StyleQuiz::standard();
    let mut session = QuizSession::new(&quiz);
    assert_eq!(session.progress_percent(), 0);
    assert_eq!(
        session.current_question().map(|question| question.id),
        Some(1)
    );

    session.choose("b");
    session.choose("z");
    assert_eq!(session.state().answers(), &[Bold]);
    assert_eq!(session.progress_percent(), 16);

    for option in ["c", "c", "b", "c", "b"] {
        session.choose(option);
    }
    let snapshot = session.snapshot();
    assert!(snapshot.completed);
    assert_eq!(snapshot.current_question_index, 6);
    assert_eq!(snapshot.progress_percent, 100);
    assert_eq!(snapshot.result, Some(Bold));
    assert!(session.current_question().is_none());
    assert_eq!(
        session.profile().map(|profile| profile.title),
        Some("Bold & Expressive")
    );

    session.reset();
    assert_eq!(session.snapshot().answers, Vec::<StyleCategory>::new());
    assert!(session.profile().is_none());
}

#[test]
fn resume_rejects_states_outside_the_quiz() {
    let quiz = StyleQuiz::standard();
    let beyond = QuizState::InProgress {
        current_question_index: 6,
        answers: Vec::new(),
    };
    assert!(matches!(
        QuizSession::resume(&quiz, beyond),
        Err(InvalidQuizState::QuestionOutOfRange { index: 6, count: 6 })
    ));

    let hollow = QuizState::Completed {
        answers: Vec::new(),
        result: Classic,
    };
    assert!(matches!(
        QuizSession::resume(&quiz, hollow),
        Err(InvalidQuizState::TooFewAnswers { answered: 0, required: 6 })
    ));

    let skipped_ahead = QuizState::InProgress {
        current_question_index: 5,
        answers: Vec::new(),
    };
    assert!(matches!(
        QuizSession::resume(&quiz, skipped_ahead),
        Err(InvalidQuizState::TooFewAnswers { answered: 0, required: 5 })
    ));

    let short_completion = QuizState::Completed {
        answers: vec![Classic],
        result: Classic,
    };
    assert!(matches!(
        QuizSession::resume(&quiz, short_completion),
        Err(InvalidQuizState::TooFewAnswers { answered: 1, required: 6 })
    ));

    let forged = QuizState::Completed {
        answers: vec![Classic, Classic, Classic, Classic, Bold, Bold],
        result: Bold,
    };
    assert!(matches!(
        QuizSession::resume(&quiz, forged),
        Err(InvalidQuizState::ResultMismatch {
            claimed: Bold,
            expected: Some(Classic),
        })
    ));
}

#[test]
fn resume_accepts_states_reached_through_previous() {
    let quiz = StyleQuiz::standard();
    let revisited = QuizState::InProgress {
        current_question_index: 1,
        answers: vec![Bold, Edgy, Casual],
    };
    let mut session = QuizSession::resume(&quiz, revisited).expect("reachable state");
    session.answer(Romantic);
    assert_eq!(session.state().answers().len(), 4);

    let finished = QuizState::Completed {
        answers: vec![Bold, Classic, Bold, Classic, Bold, Classic],
        result: Bold,
    };
    assert!(QuizSession::resume(&quiz, finished).is_ok());
}

#[test]
fn single_question_quiz_completes_on_first_answer() {
    let standard = StyleQuiz::standard();
    let first = standard.questions()[0].clone();
    let quiz = StyleQuiz::with_questions(vec![first]);

    let state = next_quiz_state(&quiz, QuizState::default(), QuizEvent::Answer(Minimalist));
    assert_eq!(
        state,
        QuizState::Completed {
            answers: vec![Minimalist],
            result: Minimalist,
        }
    );
}
