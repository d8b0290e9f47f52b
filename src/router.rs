//! Flat dispatch table keyed on `METHOD:PATH`.
//!
//! Dispatch is one hash lookup on the composite key. There is no pattern
//! matching, no prefix resolution and no per-method subtree; a miss falls
//! back to [`NOT_FOUND`].

use ahash::AHashMap;

/// Returned by [`Router::dispatch`] when no handler is registered.
pub const NOT_FOUND: &str = "404 Not Found";

const SEPARATOR: char = ':';
const ESCAPE: char = '\\';

/// Zero-argument handler producing the response body.
pub type Handler = Box<dyn Fn() -> &'static str>;

/// One incoming call. Built fresh per dispatch and dropped afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    pub method: &'a str,
    pub path: &'a str,
}

impl<'a> Request<'a> {
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self { method, path }
    }

    pub fn route_key(&self) -> String {
        route_key(self.method, self.path)
    }
}

/// Builds the composite key for a method/path pair.
///
/// `:` and `\` in the method are backslash-escaped, so the first unescaped
/// `:` always splits the key back into the pair it came from. Ordinary
/// method tokens pass through unchanged (`GET:/users`).
pub fn route_key(method: &str, path: &str) -> String {
    let mut key = String::with_capacity(method.len() + 1 + path.len());
    if method.contains([SEPARATOR, ESCAPE]) {
        for c in method.chars() {
            if c == SEPARATOR || c == ESCAPE {
                key.push(ESCAPE);
            }
            key.push(c);
        }
    } else {
        key.push_str(method);
    }
    key.push(SEPARATOR);
    key.push_str(path);
    key
}

#[derive(Default)]
pub struct Router {
    routes: AHashMap<String, Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`, replacing any earlier handler for the same pair.
    pub fn add<F>(&mut self, method: &str, path: &str, handler: F)
    where
        F: Fn() -> &'static str + 'static,
    {
        let key = route_key(method, path);
        tracing::debug!(route = %key, "route registered");
        if self.routes.insert(key, Box::new(handler)).is_some() {
            tracing::debug!(method, path, "replaced existing handler");
        }
    }

    /// Invokes the handler for `req`, or returns [`NOT_FOUND`].
    #[inline]
    pub fn dispatch(&self, req: &Request<'_>) -> &'static str {
        match self.routes.get(&req.route_key()) {
            Some(handler) => handler(),
            None => NOT_FOUND,
        }
    }

    pub fn contains(&self, method: &str, path: &str) -> bool {
        self.routes.contains_key(&route_key(method, path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Router").field("routes", &keys).finish()
    }
}
