//! Flash messages shown at the top of a form or page

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Severity {
    fn container_class(self) -> &'static str {
        match self {
            Severity::Error => {
                "bg-red-50 dark:bg-red-900/20 border-red-200 dark:border-red-800 text-red-700 dark:text-red-300"
            }
        }
    }

    fn role(self) -> &'static str {
        match self {
            Severity::Error => "alert",
        }
    }
}

/// A single message in a [`Flashbar`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub severity: Severity,
    pub content: String,
    pub id: String,
}

impl FlashMessage {
    pub fn error(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            content: content.into(),
            id: id.into(),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct FlashbarProps {
    pub items: Vec<FlashMessage>,
}

#[function_component(Flashbar)]
pub fn flashbar(props: &FlashbarProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div class="space-y-2">
            { for props.items.iter().map(|item| html! {
                <div
                    key={item.id.clone()}
                    role={item.severity.role()}
                    data-flash-id={item.id.clone()}
                    class={classes!("p-3", "border", "rounded-lg", "text-sm", item.severity.container_class())}
                >
                    {&item.content}
                </div>
            }) }
        </div>
    }
}
