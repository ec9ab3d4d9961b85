use dioxus::prelude::*;
use quiz_core::QuizSession;
use quiz_core::model::{Question, QuizSummary, RawQuestion};
use quiz_core::time::fixed_clock;
use services::InMemoryProvider;

use super::quiz::QuestionCard;
use super::result::ResultPanel;
use super::test_harness::setup_quiz_harness;
use crate::vm::{OptionState, OptionVm, QuestionVm, QuizIntent, SummaryVm};

#[component]
fn QuestionOnly(question: QuestionVm) -> Element {
    rsx! { QuestionCard { question, on_intent: move |_: QuizIntent| {} } }
}

#[component]
fn ResultOnly(summary: SummaryVm) -> Element {
    rsx! { ResultPanel { summary, on_restart: move |()| {} } }
}

fn render_question(question: QuestionVm) -> String {
    let mut dom = VirtualDom::new_with_props(QuestionOnly, QuestionOnlyProps { question });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_result(summary: SummaryVm) -> String {
    let mut dom = VirtualDom::new_with_props(ResultOnly, ResultOnlyProps { summary });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn finished_summary(picks: &[&str]) -> SummaryVm {
    let questions = vec![
        Question::new(
            "Capital of France?",
            "Paris",
            vec!["Rome".into(), "Paris".into()],
            None,
        )
        .unwrap(),
        Question::new("2 + 2?", "4", vec!["4".into(), "3".into()], None).unwrap(),
    ];
    let mut session = QuizSession::start_with_clock(questions, fixed_clock()).unwrap();
    for pick in picks {
        session.select_answer(pick).unwrap();
        session.advance().unwrap();
    }
    SummaryVm::from(&QuizSummary::from_session(&session).unwrap())
}

#[test]
fn question_card_hides_next_until_answered() {
    let question = QuestionVm {
        heading: "1. Red planet?".into(),
        category: Some("science".into()),
        progress_label: "Question 1 of 10".into(),
        options: vec![
            OptionVm {
                label: "Mars".into(),
                state: OptionState::Open,
            },
            OptionVm {
                label: "Venus".into(),
                state: OptionState::Open,
            },
        ],
        show_next: false,
    };

    let html = render_question(question.clone());
    assert!(html.contains("1. Red planet?"), "missing heading in {html}");
    assert!(html.contains("Mars") && html.contains("Venus"), "missing options in {html}");
    assert!(!html.contains("quiz-next"), "next shown too early in {html}");

    let answered = QuestionVm {
        options: vec![
            OptionVm {
                label: "Mars".into(),
                state: OptionState::Correct,
            },
            OptionVm {
                label: "Venus".into(),
                state: OptionState::Wrong,
            },
        ],
        show_next: true,
        ..question
    };
    let html = render_question(answered);
    assert!(html.contains("quiz-next"), "missing next button in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct style in {html}");
    assert!(html.contains("quiz-option--wrong"), "missing wrong style in {html}");
}

#[test]
fn result_panel_lists_corrections() {
    let html = render_result(finished_summary(&["Paris", "3"]));
    assert!(
        html.contains("You answered 1 correctly and 1 incorrectly."),
        "missing score line in {html}"
    );
    assert!(
        html.contains("Question: 2 + 2? | Your Answer: 3 | Correct Answer: 4"),
        "missing correction in {html}"
    );
    assert!(!html.contains("Capital of France?"), "correct answer listed in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");
}

#[test]
fn result_panel_lists_repeated_question_twice() {
    let repeated = || Question::new("2 + 2?", "4", vec!["4".into(), "3".into()], None).unwrap();
    let mut session =
        QuizSession::start_with_clock(vec![repeated(), repeated()], fixed_clock()).unwrap();
    for _ in 0..2 {
        session.select_answer("3").unwrap();
        session.advance().unwrap();
    }
    let summary = SummaryVm::from(&QuizSummary::from_session(&session).unwrap());

    let html = render_result(summary);
    let line = "Question: 2 + 2? | Your Answer: 3 | Correct Answer: 4";
    assert_eq!(html.matches(line).count(), 2, "expected both corrections in {html}");
}

#[test]
fn result_panel_celebrates_perfect_score() {
    let html = render_result(finished_summary(&["Paris", "4"]));
    assert!(html.contains("Perfect score"), "missing perfect note in {html}");
    assert!(!html.contains("quiz-corrections"), "unexpected corrections in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_quiz_harness(InMemoryProvider::new(vec![
        RawQuestion::new("What is the capital of France?", "Paris", ["London", "Berlin"]),
        RawQuestion::new("2 + 2?", "4", ["3", "5"]),
    ]));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("1. What is the capital of France?"),
        "missing first question in {html}"
    );
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("London"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_empty_batch() {
    let mut harness = setup_quiz_harness(InMemoryProvider::default());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No questions were returned."),
        "missing error in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry in {html}");
}
