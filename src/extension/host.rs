//! Host application surface the extension registers itself on.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use axum::routing::MethodRouter;
use axum::Router;

use crate::config::AppConfig;

type ExtensionMap = HashMap<String, Arc<dyn Any + Send + Sync>>;

/// An axum application under construction: its configuration, the
/// extensions initialised on it, and the routes they registered.
pub struct HostApp {
    config: AppConfig,
    router: Router,
    extensions: ExtensionMap,
}

impl HostApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            router: Router::new(),
            extensions: HashMap::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Record an extension under `name`, replacing any previous one.
    pub fn register_extension<T>(&mut self, name: &str, extension: Arc<T>)
    where
        T: Any + Send + Sync,
    {
        if self.extensions.insert(name.to_string(), extension).is_some() {
            tracing::debug!("Replaced extension {}", name);
        }
    }

    /// Look up an extension by name and type.
    pub fn extension<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.extensions
            .get(name)
            .cloned()
            .and_then(|ext| ext.downcast::<T>().ok())
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    pub fn route(&mut self, path: &str, method_router: MethodRouter) {
        self.router = std::mem::take(&mut self.router).route(path, method_router);
    }

    pub fn merge(&mut self, other: Router) {
        self.router = std::mem::take(&mut self.router).merge(other);
    }

    /// Finish construction and hand back the router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

impl fmt::Debug for HostApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HostApp")
            .field("config", &self.config)
            .field("extensions", &names)
            .finish_non_exhaustive()
    }
}
