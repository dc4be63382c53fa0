use crate::{
    components::{input::Input, notification::Notification},
    models::SessionState,
    routes::MainRoute,
    session::SessionStore,
};
use shared::models::NewUser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let store = use_context::<SessionStore>();
    let loading = use_selector(SessionState::is_loading);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(store) = store.clone() else {
                log::error!("registration submitted without a session store");
                return;
            };
            store.reset_status();
            let new_user = NewUser::new((*username).clone(), (*password).clone());
            spawn_local(async move {
                store.register(new_user).await;
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |value: String| username.set(value))
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    <Notification />
                    <form class="form form--register" {onsubmit}>
                        <Input
                            name="Username"
                            label_text="Username"
                            value={(*username).clone()}
                            on_change={on_username_change}
                        />
                        <Input
                            input_type="password"
                            name="Password"
                            label_text="Password"
                            value={(*password).clone()}
                            on_change={on_password_change}
                        />
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            {"Create account"}
                        </button>
                    </form>
                    <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                        {"Back to login"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
