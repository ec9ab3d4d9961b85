use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ResultPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionVm, QuestionVm, QuizIntent, QuizOutcome, QuizVm, SummaryVm, start_quiz};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let mut error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);
    let completed = use_signal(|| None::<SummaryVm>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut vm = vm;
        let mut completed = completed;
        let mut error = error;

        async move {
            let started = start_quiz(&quiz_loop).await?;
            vm.set(Some(started));
            completed.set(None);
            error.set(None);
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut completed = completed;

        let result = match intent {
            QuizIntent::Restart => {
                let mut resource = resource;
                resource.restart();
                return;
            }
            QuizIntent::Select(label) => match vm.write().as_mut() {
                Some(vm) => vm.select(&quiz_loop, &label),
                None => Err(ViewError::Unknown),
            },
            QuizIntent::Next => match vm.write().as_mut() {
                Some(vm) => vm.next(&quiz_loop).map(|outcome| {
                    if let QuizOutcome::Completed(summary) = outcome {
                        completed.set(Some(summary));
                    }
                }),
                None => Err(ViewError::Unknown),
            },
        };

        error.set(result.err());
    });

    let question = vm.read().as_ref().and_then(QuizVm::question);
    let summary = completed();

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "quiz-loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                    if err.can_retry() {
                        button {
                            class: "quiz-retry",
                            id: "quiz-retry",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                            "Try Again"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = error() {
                        p { class: "quiz-error", "{err.message()}" }
                    }
                    if let Some(summary) = summary {
                        ResultPanel {
                            summary,
                            on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
                        }
                    } else if let Some(question) = question {
                        QuestionCard { question, on_intent: dispatch_intent }
                    } else {
                        p { "No questions available." }
                    }
                },
            }
        }
    }
}

#[component]
pub(crate) fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-question", id: "quiz-question",
            p { class: "quiz-progress", "{question.progress_label}" }
            if let Some(category) = question.category.as_deref() {
                p { class: "quiz-category", "{category}" }
            }
            h2 { class: "quiz-question__text", "{question.heading}" }
            div { class: "quiz-options",
                for option in question.options.iter() {
                    OptionButton { key: "{option.label}", option: option.clone(), on_intent }
                }
            }
            if question.show_next {
                button {
                    class: "quiz-next",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let label = option.label.clone();
    rsx! {
        button {
            class: "{option.state.class()}",
            r#type: "button",
            disabled: option.disabled(),
            onclick: move |_| on_intent.call(QuizIntent::Select(label.clone())),
            "{option.label}"
        }
    }
}
