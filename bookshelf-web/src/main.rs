use bookshelf_web::{app::App, config::FrontendConfig};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let config = FrontendConfig::new();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::info!("starting Bookshelf against {}", config.api_base_url());

    // Mount the app on <body>
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => {
            Renderer::<Root>::with_root(body.into()).render();
        }
        None => web_sys::console::error_1(&"no <body> element to mount on".into()),
    }
}
