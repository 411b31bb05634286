use common::{stat_cards, DashboardStats};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: DashboardStats,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    let cards = stat_cards(&props.stats);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 xl:grid-cols-6 gap-4">
            {for cards.into_iter().map(|card| {
                let accent = format!("border-top: 4px solid {};", card.color);
                let icon_color = format!("color: {};", card.color);
                html! {
                    <div key={card.title} class="stats shadow bg-base-100" style={accent}>
                        <div class="stat">
                            <div class="stat-figure text-2xl" style={icon_color}>
                                <i class={card.icon}></i>
                            </div>
                            <div class="stat-value text-2xl">{card.value}</div>
                            <div class="stat-title">{card.title}</div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
