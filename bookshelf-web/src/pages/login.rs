use crate::{
    components::{login_form::LoginForm, notification::Notification},
    models::SessionState,
    routes::MainRoute,
    session::SessionStore,
};
use shared::models::Credentials;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let store = use_context::<SessionStore>();
    let loading = use_selector(SessionState::is_loading);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |()| {
            let Some(store) = store.clone() else {
                log::error!("login submitted without a session store");
                return;
            };
            store.reset_status();
            let credentials = Credentials::new((*username).clone(), (*password).clone());
            spawn_local(async move {
                store.login(credentials).await;
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
                    <h2 class="card-title text-2xl">{"Log in to Bookshelf"}</h2>
                    <Notification />
                    <LoginForm
                        username={(*username).clone()}
                        password={(*password).clone()}
                        {on_username_change}
                        {on_password_change}
                        {on_submit}
                        disabled={*loading}
                    />
                    <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                        {"Create an account"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
