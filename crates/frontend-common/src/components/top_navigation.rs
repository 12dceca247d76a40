//! Top navigation bar

use crate::config::{Identity, Utility};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TopNavigationProps {
    pub identity: Identity,
    #[prop_or_default]
    pub utilities: Vec<Utility>,
    /// Called with the identity href instead of following the link
    #[prop_or_default]
    pub on_identity_follow: Option<Callback<String>>,
}

/// Left click without modifiers; anything else keeps the browser's
/// default (new tab, new window, download)
fn is_plain_click(button: i16, modified: bool) -> bool {
    button == 0 && !modified
}

#[function_component(TopNavigation)]
pub fn top_navigation(props: &TopNavigationProps) -> Html {
    let on_identity_click = {
        let follow = props.on_identity_follow.clone();
        let href = props.identity.href.clone();
        Callback::from(move |e: MouseEvent| {
            let modified = e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key();
            if !is_plain_click(e.button(), modified) {
                return;
            }
            if let Some(follow) = &follow {
                e.prevent_default();
                follow.emit(href.clone());
            }
        })
    };

    html! {
        <header class="bg-gray-900 border-b border-gray-700" data-component="top-navigation">
            <div class="px-4 sm:px-6 h-14 flex items-center justify-between">
                <a
                    href={props.identity.href.clone()}
                    onclick={on_identity_click}
                    class="text-lg font-bold text-white hover:text-gray-200 transition-colors"
                >
                    {&props.identity.title}
                </a>
                <nav class="flex items-center gap-4">
                    { for props.utilities.iter().map(|utility| html! {
                        <a
                            href={utility.href.clone()}
                            class="text-sm text-gray-300 hover:text-white transition-colors"
                        >
                            {&utility.label}
                        </a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
