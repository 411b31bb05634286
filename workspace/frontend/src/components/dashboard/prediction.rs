use std::rc::Rc;

use common::{grade_color, PredictionError, PredictionPanel as PanelState, PredictionResult, PredictionState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client;
use crate::hooks::use_session;
use crate::shared::loading::ButtonSpinner;

enum PanelAction {
    Input(String),
    Begin,
    Finish(Result<PredictionResult, PredictionError>),
}

#[derive(Default, PartialEq)]
struct Panel(PanelState);

impl Reducible for Panel {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            PanelAction::Input(value) => state.set_input(value),
            PanelAction::Begin => {
                if let Err(e) = state.begin_submit() {
                    log::debug!("Prediction not submitted: {}", e);
                }
            }
            PanelAction::Finish(outcome) => state.finish(outcome),
        }
        Rc::new(Panel(state))
    }
}

#[function_component(PredictionPanel)]
pub fn prediction_panel() -> Html {
    let session = use_session();
    let panel = use_reducer(Panel::default);

    let on_input = {
        let panel = panel.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            panel.dispatch(PanelAction::Input(input.value()));
        })
    };

    // Issue the request once the reducer has accepted a submission.
    {
        let panel = panel.clone();
        let token = session.token();
        let pending = panel.0.pending_student_id().map(str::to_string);
        use_effect_with(pending, move |pending| {
            if let Some(student_id) = pending.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Requesting prediction for {}", student_id);
                    let outcome = api_client::client()
                        .predict_performance(token.as_deref(), &student_id)
                        .await;
                    if let Err(e) = &outcome {
                        log::error!("Prediction failed: {}", e);
                    }
                    panel.dispatch(PanelAction::Finish(outcome));
                });
            }
            || ()
        });
    }

    let submit = {
        let panel = panel.clone();
        Callback::from(move |_: ()| panel.dispatch(PanelAction::Begin))
    };

    let on_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let on_keypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let submitting = panel.0.is_submitting();

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h2 class="card-title">{"Student Performance Predictor"}</h2>
                <p class="text-sm text-gray-500">
                    {"Predict student performance based on attendance and tuition payment history"}
                </p>

                <div class="join w-full mt-4">
                    <input
                        type="text"
                        class="input input-bordered join-item w-full"
                        placeholder="Enter Student ID (e.g., STU000001)"
                        value={panel.0.input().to_string()}
                        oninput={on_input}
                        onkeypress={on_keypress}
                    />
                    <button class="btn btn-primary join-item" onclick={on_click} disabled={submitting}>
                        {if submitting {
                            html! { <><ButtonSpinner />{" Predicting..."}</> }
                        } else {
                            html! { {"Predict Performance"} }
                        }}
                    </button>
                </div>

                {if let Some(message) = panel.0.error_message() {
                    html! {
                        <div class="alert alert-error mt-4">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{message}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                {if let PredictionState::Success(result) = panel.0.state() {
                    let style = format!("color: {};", grade_color(result.predicted_grade));
                    html! {
                        <div class="mt-4">
                            <div class="text-sm text-gray-500">{format!("Student ID: {}", result.student_id)}</div>
                            <div class="text-center my-4" style={style}>
                                <div class="text-5xl font-bold">{format!("{}%", result.predicted_grade)}</div>
                                <div class="text-sm">{"Predicted Average Grade"}</div>
                            </div>
                            <div class="text-sm">
                                <p>{"This prediction is based on:"}</p>
                                <ul class="list-disc list-inside">
                                    <li>{"Total attendance hours"}</li>
                                    <li>{"Number of days present"}</li>
                                    <li>{"Courses attended"}</li>
                                    <li>{"Total tuition payments"}</li>
                                    <li>{"Payment frequency"}</li>
                                    <li>{"Average payment amount"}</li>
                                </ul>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
