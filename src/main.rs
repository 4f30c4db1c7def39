use yew::prelude::*;
use yew_router::prelude::*;

mod auth;
mod components;
mod config;
mod models;
mod pages;
mod utils;

use crate::auth::callback::AuthCallback;
use crate::pages::home::Home;
use crate::pages::packages::Packages;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/paketler")]
    Packages,
    #[at("/auth/callback")]
    AuthCallback,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Packages => html! { <Packages /> },
        Route::AuthCallback => html! { <AuthCallback /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <div style="text-align: center; padding: 6rem 1rem;">
            <h1>{"404"}</h1>
            <p>{"Aradığınız sayfa bulunamadı."}</p>
            <Link<Route> to={Route::Home}>{"Ana sayfaya dön"}</Link<Route>>
        </div>
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
    yew::Renderer::<App>::new().render();
}
