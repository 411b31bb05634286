use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub actions: Option<Html>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-xl">
                    <i class="fas fa-graduation-cap"></i>
                </div>
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                { props.actions.clone().unwrap_or_default() }
            </div>
        </div>
    }
}
