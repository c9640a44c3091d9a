use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod error;
mod models;
mod motion {
    pub mod keyframes;
    pub mod ramp;
    pub mod variant;
}
mod hooks {
    pub mod pointer;
    pub mod scroll;
    pub mod subscription;
    pub mod visibility;
}
mod components {
    pub mod ambient;
    pub mod hover;
    pub mod icon;
    pub mod parallax;
    pub mod reveal;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod projects;
    pub mod skills;
}

use models::Portfolio;
use pages::home::HomePage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <HomePage portfolio={props.portfolio.clone()} />
    }
}

fn load_portfolio() -> Portfolio {
    match Portfolio::from_json(config::PORTFOLIO_JSON) {
        Ok(portfolio) => portfolio,
        Err(err) => {
            error!("Rendering without content: {}", err);
            Portfolio::default()
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting portfolio");
    let portfolio = Rc::new(load_portfolio());
    yew::Renderer::<App>::with_props(AppProps { portfolio }).render();
}
