use common::AuthError;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::hooks::use_session;
use crate::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let form_ref = use_node_ref();
    let is_loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    if session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_submit = {
        let form_ref = form_ref.clone();
        let session = session.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };
            let form_data = match web_sys::FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(e) => {
                    log::error!("Failed to read login form: {:?}", e);
                    return;
                }
            };
            let username = form_data.get("username").as_string().unwrap_or_default();
            let password = form_data.get("password").as_string().unwrap_or_default();

            let session = session.clone();
            let navigator = navigator.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let outcome: Result<(), AuthError> = match api_client::client()
                    .login(&username, &password)
                    .await
                {
                    Ok(response) => session.complete_login(response),
                    Err(e) => Err(e),
                };

                is_loading.set(false);

                match outcome {
                    Ok(()) => {
                        log::info!("Login successful for '{}'", username);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::warn!("Login failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex flex-col items-center gap-2 mb-4">
                        <i class="fas fa-graduation-cap text-4xl text-primary"></i>
                        <h2 class="card-title">{"UCU Analytics Dashboard"}</h2>
                        <p class="text-sm text-gray-500">{"Sign in to continue"}</p>
                    </div>
                    <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Username"}</span>
                            </label>
                            <input
                                name="username"
                                type="text"
                                class="input input-bordered w-full"
                                required={true}
                                autocomplete="username"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{"Password"}</span>
                            </label>
                            <input
                                name="password"
                                type="password"
                                class="input input-bordered w-full"
                                required={true}
                                autocomplete="current-password"
                            />
                        </div>

                        if let Some(message) = &*error {
                            <div class="alert alert-error">
                                <i class="fas fa-exclamation-circle"></i>
                                <span>{message}</span>
                            </div>
                        }

                        <button type="submit" class="btn btn-primary w-full" disabled={*is_loading}>
                            if *is_loading {
                                <span class="loading loading-spinner"></span>
                            }
                            {"Login"}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
