use yew::{Callback, Html, classes, function_component, html, use_context};
use yewdux::prelude::use_selector;

use crate::{models::SessionState, session::SessionStore};

/// Shows the session notification until it is dismissed.
#[function_component(Notification)]
pub fn notification() -> Html {
    let store = use_context::<SessionStore>();
    let message = use_selector(|state: &SessionState| {
        (state.notification.clone(), state.error)
    });
    let (text, is_error) = (*message).clone();
    if text.is_empty() {
        return html! {};
    }

    let on_dismiss = Callback::from(move |_| {
        if let Some(store) = &store {
            store.reset_status();
        }
    });
    let alert_class = if is_error { "alert-error" } else { "alert-success" };

    html! {
        <div role="alert" class={classes!("alert", alert_class)}>
            <span>{ text }</span>
            <button class="btn btn-sm btn-ghost" type="button" onclick={on_dismiss}>{"Dismiss"}</button>
        </div>
    }
}
