use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod countdown;
mod error;
mod loading;
mod modal;
mod reveal;
mod utils {
    pub mod anchor;
    pub mod listener;
    pub mod pointer;
}
mod components {
    pub mod about;
    pub mod committees;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod message;
    pub mod navbar;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        // Single-page site: anything else lands on the home page
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting {} {} site", config::EVENT_NAME, config::EVENT_YEAR);
    yew::Renderer::<App>::new().render();
}
