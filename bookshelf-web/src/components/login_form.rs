use yew::{Callback, Html, Properties, function_component, html};

use super::input::Input;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginFormProps {
    pub username: String,
    pub password: String,
    pub on_username_change: Callback<String>,
    pub on_password_change: Callback<String>,
    #[prop_or_default]
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Username and password fields with a submit button. Holds no state; the
/// owner supplies the values and receives every edit.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="form form--login" {onsubmit}>
            <Input
                input_type="text"
                name="Username"
                label_text="Username"
                value={props.username.clone()}
                on_change={props.on_username_change.clone()}
            />
            <Input
                input_type="password"
                name="Password"
                label_text="Password"
                value={props.password.clone()}
                on_change={props.on_password_change.clone()}
            />
            <button class="btn btn-primary" type="submit" disabled={props.disabled}>{"Login"}</button>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yew::LocalServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    fn props(disabled: bool) -> LoginFormProps {
        LoginFormProps {
            username: "alice".to_string(),
            password: "secret".to_string(),
            on_username_change: Callback::noop(),
            on_password_change: Callback::noop(),
            on_submit: Callback::noop(),
            disabled,
        }
    }

    #[wasm_bindgen_test]
    async fn renders_labeled_fields_and_submit() {
        let rendered = LocalServerRenderer::<LoginForm>::with_props(props(false))
            .render()
            .await;

        assert!(rendered.contains("form form--login"));
        assert!(rendered.contains("Username"));
        assert!(rendered.contains("Password"));
        assert!(rendered.contains("type=\"text\""));
        assert!(rendered.contains("type=\"password\""));
        assert!(rendered.contains("name=\"Username\""));
        assert!(rendered.contains("name=\"Password\""));
        assert!(rendered.contains("type=\"submit\""));
        assert!(rendered.contains("Login"));
    }

    #[wasm_bindgen_test]
    async fn disabled_form_disables_submit() {
        let rendered = LocalServerRenderer::<LoginForm>::with_props(props(true))
            .render()
            .await;

        assert!(rendered.contains("disabled"));
    }
}
