//! Route lookup loop over a three-route table.

use std::hint::black_box;

use super::{Finding, Workload};
use crate::router::{Request, Router};

fn home() -> &'static str {
    "Welcome Home"
}

fn users() -> &'static str {
    "User List"
}

fn about() -> &'static str {
    "About Us"
}

pub struct HttpSim {
    router: Router,
    iterations: usize,
}

impl HttpSim {
    pub fn new(iterations: usize) -> Self {
        let mut router = Router::new();
        router.add("GET", "/", home);
        router.add("GET", "/users", users);
        router.add("GET", "/about", about);
        tracing::debug!(routes = router.len(), iterations, "dispatch table ready");
        Self { router, iterations }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// One iteration: two hits then one miss.
    #[inline]
    pub fn round(&self) -> [&'static str; 3] {
        let r1 = Request::new("GET", "/");
        let r2 = Request::new("GET", "/users");
        let r3 = Request::new("GET", "/missing");
        [
            self.router.dispatch(black_box(&r1)),
            self.router.dispatch(black_box(&r2)),
            self.router.dispatch(black_box(&r3)),
        ]
    }
}

impl Workload for HttpSim {
    fn name(&self) -> &'static str {
        "http_sim"
    }

    fn time_label(&self) -> &'static str {
        "HTTP Sim Time"
    }

    fn run(&mut self) {
        for _ in 0..self.iterations {
            black_box(self.round());
        }
    }

    fn findings(&self) -> Vec<Finding> {
        Vec::new()
    }
}
