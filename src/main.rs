use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod cursor;
mod dom;
mod gallery;
mod motion {
    pub mod clock;
    pub mod easing;
    pub mod spring;
    pub mod timer;
}
mod nav {
    pub mod gooey;
    pub mod particles;
    pub mod sections;
    pub mod visibility;
}
mod contact {
    pub mod email;
    pub mod form;
}
mod components {
    pub mod custom_cursor;
    pub mod gooey_nav;
    pub mod navbar;
    pub mod scroll_progress;
    pub mod text_hover;
}
mod pages {
    pub mod contact;
    pub mod landing;
    pub mod portfolio;
}

use pages::{landing::Landing, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/portfolio")]
    Portfolio,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Unknown route, showing Landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("Logger setup failed: {}", err).into());
    }
    info!("Starting MS Builders site");
    yew::Renderer::<App>::new().render();
}
