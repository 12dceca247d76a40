//! Status indicator component

use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Warning,
    Pending,
    #[default]
    Info,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Warning => "warning",
            StatusKind::Pending => "pending",
            StatusKind::Info => "info",
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            StatusKind::Success => "text-green-600 dark:text-green-400",
            StatusKind::Error => "text-red-600 dark:text-red-400",
            StatusKind::Warning => "text-yellow-600 dark:text-yellow-400",
            StatusKind::Pending => "text-gray-500 dark:text-gray-400",
            StatusKind::Info => "text-blue-600 dark:text-blue-400",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            StatusKind::Success => "bg-green-500",
            StatusKind::Error => "bg-red-500",
            StatusKind::Warning => "bg-yellow-500",
            StatusKind::Pending => "bg-gray-400 animate-pulse",
            StatusKind::Info => "bg-blue-500",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct StatusIndicatorProps {
    #[prop_or_default]
    pub kind: StatusKind,
    pub label: AttrValue,
}

#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    let kind = props.kind;
    html! {
        <span
            class={classes!("inline-flex", "items-center", "gap-1.5", "text-sm", "font-medium", kind.text_class())}
            data-status={kind.as_str()}
        >
            <span class={classes!("w-2", "h-2", "rounded-full", kind.dot_class())}></span>
            {props.label.clone()}
        </span>
    }
}
