use crate::{components::notification::Notification, models::SessionState, session::SessionStore};
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Landing page for a logged-in user.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let store = use_context::<SessionStore>();
    let user = use_selector(|state: &SessionState| state.user.clone());
    let Some(user) = (*user).clone() else {
        return html! {};
    };

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(store) = &store {
            store.reset_status();
            store.unset_user();
        }
    });

    html! {
        <div class="p-4 space-y-6">
            <Notification />
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ format!("Welcome, {}", user.username) }</h1>
                <button class="btn btn-ghost" type="button" onclick={on_logout}>{"Log out"}</button>
            </div>
        </div>
    }
}
