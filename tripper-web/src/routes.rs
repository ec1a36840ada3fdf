use crate::{
    components::{Layout, Nav},
    pages::{
        CategoriesPage, HomePage, LoginPage, NotFoundPage, ProductDetailPage, ProductsPage,
        PromosPage, RegisterPage, TodoPage,
    },
    services::Services,
};
use shared::gate::{GateDecision, GatePolicy};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/auth/login")]
    AuthLogin,
    #[at("/register")]
    Register,
    #[at("/home")]
    Home,
    #[at("/categories")]
    Categories,
    #[at("/promos")]
    Promos,
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    Product { id: u64 },
    #[at("/todos/:id")]
    Todo { id: u64 },
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[at("/member")]
    Member,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label in the navigation bar, for routes that appear there.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::Categories => Some("Categories"),
            Self::Promos => Some("Promos"),
            Self::Products => Some("Products"),
            _ => None,
        }
    }

    /// Route for an in-app path, falling back to the login page.
    pub fn from_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::Login)
    }
}

/// What the router does with a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    Render,
    Redirect(MainRoute),
}

/// Decide whether `route`, reached at `path`, may render for a visitor
/// holding `token`.
pub fn resolve(route: &MainRoute, path: &str, token: Option<&str>, gate: &GatePolicy) -> RouteAction {
    let authenticated = token.is_some_and(|token| !token.trim().is_empty());
    match route {
        MainRoute::Root if authenticated => RouteAction::Redirect(MainRoute::Home),
        MainRoute::Root => RouteAction::Redirect(MainRoute::Login),
        MainRoute::Login | MainRoute::AuthLogin if authenticated => {
            RouteAction::Redirect(MainRoute::Home)
        }
        _ => match gate.decide(path, token) {
            GateDecision::Allow => RouteAction::Render,
            GateDecision::Rewrite { to } => RouteAction::Redirect(MainRoute::from_path(&to)),
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub services: Services,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let location = use_location();
    let path = location.map_or_else(|| props.route.to_path(), |location| location.path().to_string());
    let session = props.services.session().get();

    if let RouteAction::Redirect(to) = resolve(&props.route, &path, session.token(), props.services.gate()) {
        return html! { <Redirect<MainRoute> {to} /> };
    }

    let services = props.services.clone();
    match props.route.clone() {
        MainRoute::Login | MainRoute::AuthLogin => html! { <LoginPage {services} /> },
        MainRoute::Register => html! { <RegisterPage {services} /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
        route => {
            let page = match &route {
                MainRoute::Categories => html! { <CategoriesPage services={services.clone()} /> },
                MainRoute::Promos => html! { <PromosPage services={services.clone()} /> },
                MainRoute::Products => html! { <ProductsPage services={services.clone()} /> },
                MainRoute::Product { id } => {
                    html! { <ProductDetailPage services={services.clone()} id={*id} /> }
                }
                MainRoute::Todo { id } => html! { <TodoPage services={services.clone()} id={*id} /> },
                _ => html! { <HomePage services={services.clone()} /> },
            };
            html! {
                <Layout>
                    <Nav current={route} {services} />
                    {page}
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute, services: Services) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <MainRouteView {route} {services} /> }
}
