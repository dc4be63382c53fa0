//! Tests for the routing system
//!
//! Validates route definitions and their URL paths.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests parsing of known and unknown paths
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/register"), Some(MainRoute::Register));
        assert_eq!(MainRoute::recognize("/404"), Some(MainRoute::NotFound));
    }

    /// Tests that every route is enumerated
    #[test]
    fn test_route_iteration() {
        let routes: Vec<MainRoute> = MainRoute::iter().collect();
        assert_eq!(routes.len(), 4);
        assert!(routes.contains(&MainRoute::Login));
    }
}
