use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod countdown;
mod pdfjs;
mod viewer;

mod components {
    pub mod about;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod ticker;
}
mod pages {
    pub mod landing;
    pub mod launch;
    pub mod newspaper;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    launch::LaunchTeaser,
    newspaper::Newspaper,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/launch")]
    Launch,
    #[at("/newspaper")]
    Newspaper,
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
        Route::Launch => {
            info!("Rendering Launch teaser");
            html! { <LaunchTeaser /> }
        }
        Route::Newspaper => {
            info!("Rendering Newspaper reader");
            html! { <Newspaper /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // A malformed launch date is a configuration error; fail before mounting.
    let launch = config::launch_instant();
    info!("Starting application, launch configured for {}", launch);

    yew::Renderer::<App>::new().render();
}
