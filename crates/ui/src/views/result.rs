use dioxus::prelude::*;

use crate::vm::SummaryVm;

#[component]
pub fn ResultPanel(summary: SummaryVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "quiz-result", id: "quiz-result",
            h2 { "Results" }
            p { class: "quiz-score", id: "quiz-score", "{summary.score_line}" }
            p { class: "quiz-elapsed", "Time: {summary.elapsed}" }

            if summary.has_corrections() {
                h3 { "Corrections" }
                ul { class: "quiz-corrections", id: "quiz-corrections",
                    for (i, correction) in summary.corrections.iter().enumerate() {
                        li { key: "{i}", "{correction.line}" }
                    }
                }
            } else {
                p { class: "quiz-perfect", "Perfect score. Nothing to correct." }
            }

            button {
                class: "quiz-restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}
