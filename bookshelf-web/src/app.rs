use std::rc::Rc;

use crate::api::LibraryClient;
use crate::components::loading::Loading;
use crate::config::FrontendConfig;
use crate::models::SessionState;
use crate::routes::{MainRoute, switch};
use crate::session::{BrowserStorage, SessionServices, SessionStore};
use yew::context::ContextProvider;
use yew::{Html, function_component, html, use_effect_with, use_memo, use_state};
use yew_router::prelude::*;
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

/// Wires the HTTP client and browser storage into a session store bound to
/// `dispatch`.
pub fn build_store(dispatch: Dispatch<SessionState>, config: &FrontendConfig) -> SessionStore {
    let client = Rc::new(LibraryClient::new(config.api_base_url()));
    let services = SessionServices {
        login: client.clone(),
        users: client.clone(),
        tokens: client,
        storage: Rc::new(BrowserStorage),
    };
    SessionStore::new(dispatch, services, config.session_storage_key())
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<SessionState>();
    let store = use_memo((), move |_| build_store(dispatch, &FrontendConfig::new()));
    let restored = use_state(|| false);

    {
        let store = store.clone();
        let restored = restored.clone();
        use_effect_with((), move |_| {
            if store.restore().is_none() {
                log::debug!("no persisted session");
            }
            restored.set(true);
            || ()
        });
    }

    html! {
        <ContextProvider<SessionStore> context={(*store).clone()}>
            if *restored {
                <BrowserRouter>
                    <Switch<MainRoute> render={switch} />
                </BrowserRouter>
            } else {
                <Loading />
            }
        </ContextProvider<SessionStore>>
    }
}
