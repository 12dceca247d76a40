//! Labelled form controls

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    /// id of the control the label points at
    pub control_id: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="space-y-1">
            <label
                for={props.control_id.clone()}
                class="block text-sm font-medium text-gray-700 dark:text-gray-300"
            >
                {props.label.clone()}
            </label>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TextInputProps {
    pub id: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    pub on_change: Callback<String>,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            id={props.id.clone()}
            name={props.id.clone()}
            type={props.input_type.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            autocomplete={props.autocomplete.clone()}
            {oninput}
            class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
        />
    }
}
