use quiz_core::model::QuestionDraft;
use quiz_core::time::fixed_clock;
use services::{Notice, QuizController, QuizPhase};

use super::test_harness::{HarnessBuilder, ViewKind};

fn controller() -> QuizController {
    QuizController::new(fixed_clock())
}

fn answer_all_correctly(ctl: &mut QuizController) {
    while ctl.phase() != QuizPhase::Complete {
        let question = ctl.current_question().cloned().expect("current question");
        ctl.check_answer(
            &question.correct_numerator().to_string(),
            &question.correct_denominator().to_string(),
        )
        .expect("check answer");
        ctl.next().expect("next");
    }
}

#[test]
fn start_screen_offers_default_quiz_and_authoring() {
    let html = HarnessBuilder::new(ViewKind::Quiz).render();
    assert!(html.contains("Math Learning Game"), "missing title in {html}");
    assert!(html.contains("Start with Default Questions"), "{html}");
    assert!(html.contains("Create My Own Questions"), "{html}");
    assert!(!html.contains("Start with My Questions"), "{html}");
    for feature in [
        "Visual Learning",
        "Interactive Exercises",
        "Instant Feedback",
        "Hints Available",
    ] {
        assert!(html.contains(feature), "missing {feature} in {html}");
    }
}

#[test]
fn start_screen_shows_custom_count() {
    let mut ctl = controller();
    ctl.add_question(&QuestionDraft::new("2", "3", "1", "3", "+"))
        .expect("add question");
    let html = HarnessBuilder::new(ViewKind::Quiz).controller(ctl).render();
    assert!(html.contains("Start with My Questions (1)"), "{html}");
}

#[test]
fn question_screen_renders_first_default_question() {
    let mut ctl = controller();
    ctl.start(false).expect("start");
    let html = HarnessBuilder::new(ViewKind::Quiz).controller(ctl).render();
    assert!(html.contains("Fraction Addition Quiz"), "{html}");
    assert!(html.contains("Question 1 of 15"), "{html}");
    assert!(html.contains("Check Answer"), "{html}");
    assert!(html.contains("Get Hint"), "{html}");
    // Left and right charts are filled; the result chart is an outline.
    assert_eq!(html.matches("slice slice--on").count(), 3, "{html}");
    assert_eq!(html.matches("slice slice--empty").count(), 3, "{html}");
}

#[test]
fn hint_button_hidden_when_hints_disabled() {
    let mut ctl = controller();
    ctl.start(false).expect("start");
    let html = HarnessBuilder::new(ViewKind::Quiz)
        .controller(ctl)
        .hints_enabled(false)
        .render();
    assert!(!html.contains("Get Hint"), "{html}");
    assert!(html.contains("Check Answer"), "{html}");
}

#[test]
fn wrong_answer_shows_expected_fraction() {
    let mut ctl = controller();
    ctl.start(false).expect("start");
    ctl.check_answer("2", "3").expect("check answer");
    let html = HarnessBuilder::new(ViewKind::Quiz).controller(ctl).render();
    assert!(html.contains("Try again! The answer is 3/3"), "{html}");
    assert!(html.contains("Next Question"), "{html}");
    assert!(!html.contains("Check Answer"), "{html}");
    // Result chart is revealed: 2 + 1 + 3 highlighted slices.
    assert_eq!(html.matches("slice slice--on").count(), 6, "{html}");
}

#[test]
fn last_question_offers_results() {
    let mut ctl = controller();
    ctl.start(false).expect("start");
    for _ in 0..14 {
        ctl.check_answer("0", "1").expect("check answer");
        ctl.next().expect("next");
    }
    ctl.check_answer("0", "1").expect("check answer");
    let html = HarnessBuilder::new(ViewKind::Quiz).controller(ctl).render();
    assert!(html.contains("Question 15 of 15"), "{html}");
    assert!(html.contains("See Results"), "{html}");
}

#[test]
fn results_screen_shows_perfect_score() {
    let mut ctl = controller();
    ctl.start(false).expect("start");
    answer_all_correctly(&mut ctl);
    let html = HarnessBuilder::new(ViewKind::Quiz).controller(ctl).render();
    assert!(html.contains("Quiz Complete!"), "{html}");
    assert!(html.contains("15/15"), "{html}");
    assert!(html.contains("Score: 100%"), "{html}");
    assert!(html.contains("fraction master"), "{html}");
    assert!(html.contains("Try Again"), "{html}");
}

#[test]
fn authoring_lists_questions_and_start_label() {
    let mut ctl = controller();
    ctl.add_question(&QuestionDraft::new("2", "3", "1", "3", "+"))
        .expect("add question");
    ctl.add_question(&QuestionDraft::new("5", "6", "1", "6", "-"))
        .expect("add question");
    let html = HarnessBuilder::new(ViewKind::Authoring)
        .controller(ctl)
        .render();
    assert!(html.contains("Your Custom Questions (2)"), "{html}");
    assert!(html.contains("2/3 + 1/3 = 3/3"), "{html}");
    assert!(html.contains("5/6 - 1/6 = 4/6"), "{html}");
    assert!(
        html.contains("Start Quiz with My Questions (2 questions)"),
        "{html}"
    );
}

#[test]
fn authoring_empty_state() {
    let html = HarnessBuilder::new(ViewKind::Authoring).render();
    assert!(html.contains("No questions yet"), "{html}");
    assert!(
        html.contains("Note: Both fractions must have the same denominator. For subtraction, the first fraction should be larger."),
        "{html}"
    );
    assert!(!html.contains("Start Quiz with My Questions"), "{html}");
}

#[test]
fn toast_renders_notice() {
    let html = HarnessBuilder::new(ViewKind::Authoring)
        .notice(Notice::error(
            "Different Denominators",
            "Both fractions must have the same denominator for this quiz.",
        ))
        .render();
    assert!(html.contains("Different Denominators"), "{html}");
    assert!(html.contains("toast toast--error"), "{html}");
}
