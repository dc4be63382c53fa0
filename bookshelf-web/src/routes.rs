use crate::{models::SessionState, pages::*};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = *use_selector(SessionState::is_logged_in);

    match props.route {
        MainRoute::Login | MainRoute::Register if is_authenticated => {
            html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
        }
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Home if !is_authenticated => {
            html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
        }
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to main route: {route:?}");
    html! { <MainRouteView {route} /> }
}
