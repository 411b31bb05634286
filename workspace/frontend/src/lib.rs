use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod download;
mod pages;
pub mod api_client;
pub mod hooks;
pub mod session;
pub mod settings;
pub mod shared;
pub mod storage;

use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use hooks::use_session;
use pages::login::LoginPage;
use session::SessionProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <RequireSession><Dashboard /></RequireSession> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct RequireSessionProps {
    children: Children,
}

/// Renders its children only for an authenticated session.
#[function_component(RequireSession)]
fn require_session(props: &RequireSessionProps) -> Html {
    let session = use_session();

    if session.is_authenticated() {
        html! { <>{props.children.clone()}</> }
    } else {
        log::debug!("No session, redirecting to login");
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== UCU Analytics Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
