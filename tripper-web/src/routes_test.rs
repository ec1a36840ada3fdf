//! Tests for route definitions and the client-side gate.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, RouteAction, resolve};
    use shared::gate::GatePolicy;
    use yew_router::Routable;

    #[test]
    fn paths_are_recognized() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Root));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/auth/login"), Some(MainRoute::AuthLogin));
        assert_eq!(MainRoute::recognize("/home"), Some(MainRoute::Home));
        assert_eq!(
            MainRoute::recognize("/products/7"),
            Some(MainRoute::Product { id: 7 })
        );
        assert_eq!(MainRoute::recognize("/todos/1"), Some(MainRoute::Todo { id: 1 }));
        assert_eq!(MainRoute::recognize("/nowhere"), Some(MainRoute::NotFound));
    }

    #[test]
    fn unknown_redirect_targets_fall_back_to_login() {
        assert_eq!(MainRoute::from_path("/login"), MainRoute::Login);
        assert_eq!(MainRoute::from_path("/home"), MainRoute::Home);
    }

    #[test]
    fn root_follows_the_session() {
        let gate = GatePolicy::default();
        assert_eq!(
            resolve(&MainRoute::Root, "/", None, &gate),
            RouteAction::Redirect(MainRoute::Login)
        );
        assert_eq!(
            resolve(&MainRoute::Root, "/", Some("T"), &gate),
            RouteAction::Redirect(MainRoute::Home)
        );
    }

    #[test]
    fn protected_routes_need_a_token() {
        let gate = GatePolicy::default();
        for (route, path) in [
            (MainRoute::Dashboard, "/dashboard"),
            (MainRoute::Admin, "/admin"),
            (MainRoute::Member, "/member"),
        ] {
            assert_eq!(
                resolve(&route, path, None, &gate),
                RouteAction::Redirect(MainRoute::AuthLogin)
            );
            assert_eq!(resolve(&route, path, Some(""), &gate), RouteAction::Redirect(MainRoute::AuthLogin));
            assert_eq!(resolve(&route, path, Some("T"), &gate), RouteAction::Render);
        }
    }

    #[test]
    fn nested_protected_paths_are_gated() {
        let gate = GatePolicy::default();
        assert_eq!(
            resolve(&MainRoute::NotFound, "/admin/settings", None, &gate),
            RouteAction::Redirect(MainRoute::AuthLogin)
        );
        assert_eq!(
            resolve(&MainRoute::NotFound, "/administrator", None, &gate),
            RouteAction::Render
        );
    }

    #[test]
    fn login_pages_bounce_signed_in_users_home() {
        let gate = GatePolicy::default();
        assert_eq!(resolve(&MainRoute::Login, "/login", None, &gate), RouteAction::Render);
        assert_eq!(
            resolve(&MainRoute::AuthLogin, "/auth/login", None, &gate),
            RouteAction::Render
        );
        assert_eq!(
            resolve(&MainRoute::Login, "/login", Some("T"), &gate),
            RouteAction::Redirect(MainRoute::Home)
        );
    }

    #[test]
    fn unprotected_pages_render_without_a_token() {
        let gate = GatePolicy::default();
        assert_eq!(resolve(&MainRoute::Register, "/register", None, &gate), RouteAction::Render);
        assert_eq!(resolve(&MainRoute::Home, "/home", None, &gate), RouteAction::Render);
    }

    #[test]
    fn nav_shows_the_content_pages() {
        use strum::IntoEnumIterator;
        let labels: Vec<_> = MainRoute::iter().filter_map(|route| route.nav_label()).collect();
        assert_eq!(labels, ["Home", "Categories", "Promos", "Products"]);
    }
}
