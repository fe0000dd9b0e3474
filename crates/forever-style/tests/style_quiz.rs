use forever_style::workflows::quiz::{
    classify_style, next_quiz_state, QuizEvent, QuizSession, QuizState, StyleCategory, StyleQuiz,
};
use StyleCategory::*;

fn answer_all(quiz: &StyleQuiz, tags: &[StyleCategory]) -> QuizState {
    tags.iter().fold(QuizState::default(), |state, tag| {
        next_quiz_state(quiz, state, QuizEvent::Answer(*tag))
    })
}

#[test]
fn classification_always_picks_one_of_the_answers() {
    let samples: [&[StyleCategory]; 5] = [
        &[Edgy],
        &[Romantic, Minimalist],
        &[Casual, AvantGarde, AvantGarde, Casual, Bold],
        &[Classic, Classic, Classic],
        &[Bold, Edgy, Romantic, Minimalist, Casual, Classic],
    ];
    for answers in samples {
        let result = classify_style(answers).expect("non-empty answers classify");
        assert!(
            answers.contains(&result),
            "{result} should come from {answers:?}"
        );
    }
    assert_eq!(classify_style(&[]), None);
}

#[test]
fn majority_and_ties_resolve_deterministically() {
    assert_eq!(classify_style(&[Bold, Classic, Bold]), Some(Bold));
    assert_eq!(classify_style(&[Classic, Bold]), Some(Classic));
    assert_eq!(
        classify_style(&[Casual, Edgy, Edgy, Casual, Romantic]),
        Some(Casual)
    );
}

#[test]
fn six_answers_complete_the_standard_quiz() {
    let quiz = StyleQuiz::standard();
    let tags = [Classic, Bold, Bold, Minimalist, Bold, Classic];
    let state = answer_all(&quiz, &tags);

    match &state {
        QuizState::Completed { answers, result } => {
            assert_eq!(answers.len(), 6);
            assert_eq!(*result, Bold);
        }
        other => panic!("expected a completed quiz, got {other:?}"),
    }

    let after = next_quiz_state(&quiz, state.clone(), QuizEvent::Answer(Edgy));
    assert_eq!(after, state, "answers after completion are ignored");
}

#[test]
fn previous_steps_back_without_retracting_and_reset_restarts() {
    let quiz = StyleQuiz::standard();
    let mut session = QuizSession::new(&quiz);
    session.answer(Casual);
    session.answer(Edgy);
    session.previous();

    match session.state() {
        QuizState::InProgress {
            current_question_index,
            answers,
        } => {
            assert_eq!(*current_question_index, 1);
            assert_eq!(answers, &vec![Casual, Edgy]);
        }
        other => panic!("expected an in-progress quiz, got {other:?}"),
    }

    session.reset();
    assert_eq!(session.state(), &QuizState::default());
    assert_eq!(session.progress_percent(), 0);
}

#[test]
fn option_ids_drive_a_full_run_to_a_profile() {
    let quiz = StyleQuiz::standard();
    let mut session = QuizSession::new(&quiz);
    for pick in ["b", "b", "c", "a", "c", "a"] {
        session.choose(pick);
    }

    let snapshot = session.snapshot();
    assert!(snapshot.completed);
    assert_eq!(snapshot.progress_percent, 100);
    // three votes each for bold and classic; bold was recorded first
    assert_eq!(snapshot.result, Some(Bold));

    let profile = session.profile().expect("profile for completed quiz");
    assert_eq!(profile.category, Bold);
    assert!(!profile.recommendations.is_empty());
}
