// Navigation - route resolution and view history
//
// The navigator owns the sitemap and the current/previous navigation states.
// Navigation is atomic: a failed navigate_to leaves both states untouched, so
// an invalid route can be reported to the user while the console stays where
// it was.

mod sitemap;

use std::fmt;

pub use sitemap::{
    Redirect, Sitemap, SitemapError, ViewKey, ROUTE_HOME, ROUTE_SETTINGS, ROUTE_SITEMAP_REPORT,
    ROUTE_SYSTEM_ADMIN,
};

/// Errors raised by navigation attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The route (after redirects) is not registered in the sitemap
    UnknownRoute(String),
    /// Redirect resolution revisited a route it had already passed through
    RedirectLoop(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRoute(route) => write!(f, "no view is registered for route '{route}'"),
            Self::RedirectLoop(route) => {
                write!(f, "redirect loop while resolving route '{route}'")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Where the console currently is: the resolved route and its view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub route: String,
    pub view: ViewKey,
}

/// Resolves routes against the sitemap and tracks one step of history
pub struct Navigator {
    sitemap: Sitemap,
    current: Option<NavigationState>,
    previous: Option<NavigationState>,
}

impl Navigator {
    pub fn new(sitemap: Sitemap) -> Self {
        Self {
            sitemap,
            current: None,
            previous: None,
        }
    }

    pub fn sitemap(&self) -> &Sitemap {
        &self.sitemap
    }

    pub fn current(&self) -> Option<&NavigationState> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&NavigationState> {
        self.previous.as_ref()
    }

    /// Navigate to `route`, following redirects until a registered route is
    /// reached. On success the prior state becomes the back target.
    pub fn navigate_to(&mut self, route: &str) -> Result<(), NavError> {
        let requested = normalize(route);

        // Follow the redirect chain, refusing to revisit a route.
        let mut resolved = requested.clone();
        let mut visited = vec![resolved.clone()];
        while let Some(target) = self.sitemap.redirect_for(&resolved) {
            if visited.iter().any(|v| v == target) {
                return Err(NavError::RedirectLoop(requested));
            }
            resolved = target.to_string();
            visited.push(resolved.clone());
        }

        let view = self
            .sitemap
            .view_for(&resolved)
            .ok_or(NavError::UnknownRoute(requested))?;

        tracing::info!(route = %resolved, view = view.name(), "navigated");
        self.previous = self.current.take();
        self.current = Some(NavigationState {
            route: resolved,
            view,
        });
        Ok(())
    }

    /// Return to the previous state, if there is one. The states swap, so
    /// pressing back twice toggles between the last two routes.
    pub fn back(&mut self) -> bool {
        match self.previous.take() {
            Some(prev) => {
                tracing::debug!(route = %prev.route, "navigated back");
                self.previous = self.current.take();
                self.current = Some(prev);
                true
            }
            None => false,
        }
    }
}

/// Trim whitespace and surrounding slashes so "/home/" and "home" match
fn normalize(route: &str) -> String {
    route.trim().trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        Navigator::new(Sitemap::standard().unwrap())
    }

    #[test]
    fn navigating_to_a_registered_route_updates_current() {
        let mut nav = navigator();
        nav.navigate_to(ROUTE_SETTINGS).unwrap();

        let state = nav.current().unwrap();
        assert_eq!(state.route, ROUTE_SETTINGS);
        assert_eq!(state.view, ViewKey::Settings);
        assert!(nav.previous().is_none());
    }

    #[test]
    fn redirects_are_followed_to_the_registered_route() {
        let mut nav = navigator();
        nav.navigate_to("").unwrap();
        assert_eq!(nav.current().unwrap().route, ROUTE_HOME);

        nav.navigate_to("admin").unwrap();
        assert_eq!(nav.current().unwrap().route, ROUTE_SYSTEM_ADMIN);
        assert_eq!(nav.current().unwrap().view, ViewKey::SystemAdmin);
    }

    #[test]
    fn surrounding_slashes_and_whitespace_are_ignored() {
        let mut nav = navigator();
        nav.navigate_to(" /settings/ ").unwrap();

        assert_eq!(nav.current().unwrap().route, ROUTE_SETTINGS);
    }

    #[test]
    fn unknown_routes_leave_the_navigator_unchanged() {
        let mut nav = navigator();
        nav.navigate_to(ROUTE_HOME).unwrap();

        let err = nav.navigate_to("no/such/route").unwrap_err();
        assert_eq!(err, NavError::UnknownRoute("no/such/route".to_string()));
        assert_eq!(nav.current().unwrap().route, ROUTE_HOME);
        assert!(nav.previous().is_none());
    }

    #[test]
    fn redirect_loops_are_detected() {
        let mut sitemap = Sitemap::new();
        sitemap.add_route("solid", ViewKey::Home).unwrap();
        sitemap.add_redirect("a", "b").unwrap();
        sitemap.add_redirect("b", "a").unwrap();

        let mut nav = Navigator::new(sitemap);
        let err = nav.navigate_to("a").unwrap_err();
        assert_eq!(err, NavError::RedirectLoop("a".to_string()));
        assert!(nav.current().is_none());
    }

    #[test]
    fn successful_navigation_records_the_back_target() {
        let mut nav = navigator();
        nav.navigate_to(ROUTE_HOME).unwrap();
        nav.navigate_to(ROUTE_SETTINGS).unwrap();

        assert_eq!(nav.previous().unwrap().route, ROUTE_HOME);
    }

    #[test]
    fn back_swaps_the_last_two_states() {
        let mut nav = navigator();
        nav.navigate_to(ROUTE_HOME).unwrap();
        nav.navigate_to(ROUTE_SETTINGS).unwrap();

        assert!(nav.back());
        assert_eq!(nav.current().unwrap().route, ROUTE_HOME);
        assert_eq!(nav.previous().unwrap().route, ROUTE_SETTINGS);

        assert!(nav.back());
        assert_eq!(nav.current().unwrap().route, ROUTE_SETTINGS);
    }

    #[test]
    fn back_without_history_is_a_no_op() {
        let mut nav = navigator();
        assert!(!nav.back());

        nav.navigate_to(ROUTE_HOME).unwrap();
        assert!(!nav.back());
        assert_eq!(nav.current().unwrap().route, ROUTE_HOME);
    }
}
