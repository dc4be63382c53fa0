use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct InputProps {
    #[prop_or(String::from("text"))]
    pub input_type: String,
    pub name: String,
    pub label_text: String,
    pub value: String,
    pub on_change: Callback<String>,
}

/// A labeled input that reports every edit as the new value.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{ props.label_text.clone() }</span>
                <input
                    class="input input-bordered"
                    type={props.input_type.clone()}
                    name={props.name.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            </label>
        </div>
    }
}
