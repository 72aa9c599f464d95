// Sitemap - the route table the navigator consults
//
// Routes map URI-style fragments ("system-admin/sitemap-build-report") to
// views. Redirects are kept separately in insertion order; resolution happens
// in the navigator so redirect chains and loops are its concern, not ours.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::i18n::LabelKey;

pub const ROUTE_HOME: &str = "home";
pub const ROUTE_SYSTEM_ADMIN: &str = "system-admin";
pub const ROUTE_SITEMAP_REPORT: &str = "system-admin/sitemap-build-report";
pub const ROUTE_SETTINGS: &str = "settings";

/// Identity of a routed view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    Home,
    SystemAdmin,
    SitemapReport,
    Settings,
}

impl ViewKey {
    /// Untranslated name, for logs and the build report
    pub fn name(&self) -> &'static str {
        match self {
            ViewKey::Home => "Home",
            ViewKey::SystemAdmin => "System Admin",
            ViewKey::SitemapReport => "Sitemap Report",
            ViewKey::Settings => "Settings",
        }
    }

    /// Caption key for the view title
    pub fn label_key(&self) -> LabelKey {
        match self {
            ViewKey::Home => LabelKey::Home,
            ViewKey::SystemAdmin => LabelKey::SystemAdmin,
            ViewKey::SitemapReport => LabelKey::SitemapBuildReport,
            ViewKey::Settings => LabelKey::Settings,
        }
    }
}

/// Errors raised while assembling the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapError {
    /// A route fragment was registered twice
    DuplicateRoute(String),
    /// A redirect source was registered twice
    DuplicateRedirect(String),
}

impl fmt::Display for SitemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoute(route) => write!(f, "route '{route}' is already registered"),
            Self::DuplicateRedirect(from) => {
                write!(f, "redirect from '{from}' is already registered")
            }
        }
    }
}

impl std::error::Error for SitemapError {}

/// A single redirect entry, kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

/// The route table: fragments to views, plus redirects.
///
/// Lookup order never matters for correctness, but both tables preserve
/// insertion order so the build report and redirect resolution are stable.
#[derive(Debug, Clone)]
pub struct Sitemap {
    routes: Vec<(String, ViewKey)>,
    redirects: Vec<Redirect>,
    built_at: DateTime<Utc>,
}

impl Sitemap {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            redirects: Vec::new(),
            built_at: Utc::now(),
        }
    }

    /// The standard route table for the console
    pub fn standard() -> Result<Self, SitemapError> {
        let mut sitemap = Self::new();
        sitemap.add_route(ROUTE_HOME, ViewKey::Home)?;
        sitemap.add_route(ROUTE_SYSTEM_ADMIN, ViewKey::SystemAdmin)?;
        sitemap.add_route(ROUTE_SITEMAP_REPORT, ViewKey::SitemapReport)?;
        sitemap.add_route(ROUTE_SETTINGS, ViewKey::Settings)?;
        // The empty fragment and the legacy alias both land on real routes.
        sitemap.add_redirect("", ROUTE_HOME)?;
        sitemap.add_redirect("admin", ROUTE_SYSTEM_ADMIN)?;
        Ok(sitemap)
    }

    pub fn add_route(&mut self, route: impl Into<String>, view: ViewKey) -> Result<(), SitemapError> {
        let route = route.into();
        if self.routes.iter().any(|(r, _)| *r == route) {
            return Err(SitemapError::DuplicateRoute(route));
        }
        self.routes.push((route, view));
        Ok(())
    }

    pub fn add_redirect(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<(), SitemapError> {
        let from = from.into();
        if self.redirects.iter().any(|r| r.from == from) {
            return Err(SitemapError::DuplicateRedirect(from));
        }
        self.redirects.push(Redirect {
            from,
            to: to.into(),
        });
        Ok(())
    }

    /// The view registered for `route`, if any. Redirects are not applied.
    pub fn view_for(&self, route: &str) -> Option<ViewKey> {
        self.routes
            .iter()
            .find(|(r, _)| r == route)
            .map(|(_, view)| *view)
    }

    /// The redirect target registered for `route`, if any (a single hop)
    pub fn redirect_for(&self, route: &str) -> Option<&str> {
        self.redirects
            .iter()
            .find(|r| r.from == route)
            .map(|r| r.to.as_str())
    }

    /// Registered routes in insertion order
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(r, _)| r.as_str())
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.len()
    }

    /// Human-readable report of the assembled table, one line per entry
    pub fn build_report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push("Sitemap build report".to_string());
        lines.push("====================".to_string());
        lines.push(format!(
            "built at : {}",
            self.built_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        lines.push(format!("routes   : {}", self.routes.len()));
        lines.push(format!("redirects: {}", self.redirects.len()));
        lines.push(String::new());
        lines.push("-- routes --".to_string());
        for (route, view) in &self.routes {
            lines.push(format!("{route:<40} -> {}", view.name()));
        }
        lines.push(String::new());
        lines.push("-- redirects --".to_string());
        for redirect in &self.redirects {
            let from = if redirect.from.is_empty() {
                "''"
            } else {
                redirect.from.as_str()
            };
            lines.push(format!("{from:<40} -> {}", redirect.to));
        }
        lines
    }
}

impl Default for Sitemap {
    fn default() -> Self {
        Self::new()
    }
}
