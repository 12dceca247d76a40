//! Card grid for service tiles

use crate::config::{MAX_CARDS_PER_ROW, ServiceCard};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CardsProps {
    pub items: Vec<ServiceCard>,
    #[prop_or(2)]
    pub cards_per_row: u8,
}

/// Tailwind needs literal class names, so the grid width maps to a fixed set
pub fn grid_class(cards_per_row: u8) -> &'static str {
    match cards_per_row.clamp(1, MAX_CARDS_PER_ROW) {
        1 => "grid-cols-1",
        2 => "grid-cols-1 md:grid-cols-2",
        3 => "grid-cols-1 md:grid-cols-3",
        _ => "grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
    }
}

#[function_component(Cards)]
pub fn cards(props: &CardsProps) -> Html {
    if props.items.is_empty() {
        return html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">{"No services available"}</p>
        };
    }

    html! {
        <div class={classes!("grid", "gap-4", grid_class(props.cards_per_row))}>
            { for props.items.iter().map(|card| html! {
                <article
                    key={card.id.clone()}
                    data-card-id={card.id.clone()}
                    class="bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-sm p-5"
                >
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{&card.name}</h2>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">{&card.description}</p>
                </article>
            }) }
        </div>
    }
}
