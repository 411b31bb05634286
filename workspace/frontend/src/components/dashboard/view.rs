use common::{report_file_name, DashboardState};
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::ChartGallery;
use super::prediction::PredictionPanel;
use super::stats::Stats;
use crate::api_client;
use crate::components::layout::layout::Layout;
use crate::download;
use crate::hooks::use_session;
use crate::settings;
use crate::shared::loading::{ButtonSpinner, Loading};
use crate::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let state = use_state(DashboardState::default);
    let downloading = use_state(|| false);

    // Fetch once on mount. A failure is logged and leaves the page loading.
    {
        let state = state.clone();
        let token = session.token();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = api_client::client().fetch_dashboard(token.as_deref()).await;
                let next = DashboardState::from_fetch(result);
                if !next.is_loading() {
                    state.set(next);
                }
            });
            || ()
        });
    }

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_download = {
        let session = session.clone();
        let downloading = downloading.clone();
        Callback::from(move |_: MouseEvent| {
            if *downloading {
                return;
            }
            downloading.set(true);
            let token = session.token();
            let downloading = downloading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                let file_name = report_file_name(&chrono::Utc::now());

                let saved = match client.request_report_download(token.as_deref()).await {
                    Ok(bytes) => download::save_bytes(&bytes, &file_name, "application/pdf")
                        .map_err(|e| format!("{:?}", e)),
                    Err(e) => Err(e.to_string()),
                };

                match saved {
                    Ok(()) => log::info!("Report saved as {}", file_name),
                    Err(e) => {
                        let url = settings::get_settings().api_url(client.report_path());
                        log::warn!("Report download failed ({}), opening {}", e, url);
                        if let Err(e) = download::open_in_new_tab(&url) {
                            log::error!("Failed to open report page: {:?}", e);
                        }
                    }
                }
                downloading.set(false);
            });
        })
    };

    let username = session
        .session()
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    let actions = html! {
        <>
            <span class="text-sm hidden md:inline">{format!("Welcome, {}", username)}</span>
            <button class="btn btn-sm btn-primary" onclick={on_download} disabled={*downloading}>
                if *downloading {
                    <ButtonSpinner />{" Preparing report..."}
                } else {
                    <i class="fas fa-file-pdf"></i>{" Download Report"}
                }
            </button>
            <button class="btn btn-sm btn-ghost" onclick={on_logout}>
                <i class="fas fa-sign-out-alt"></i>{" Logout"}
            </button>
        </>
    };

    html! {
        <Layout title="UCU Analytics Dashboard" actions={actions}>
            {match &*state {
                DashboardState::Loading => html! {
                    <Loading text={Some("Loading dashboard...".to_string())} />
                },
                DashboardState::Ready(data) => html! {
                    <>
                        <Stats stats={data.stats.clone()} />
                        <ChartGallery data={(**data).clone()} />
                        <PredictionPanel />
                    </>
                },
            }}
        </Layout>
    }
}
