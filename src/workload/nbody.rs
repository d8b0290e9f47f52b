//! Four-body gravity step with unit gravitational constant.

use super::{Finding, Workload};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: [f64; 3],
    pub vel: [f64; 3],
    pub mass: f64,
}

impl Body {
    pub fn at_rest(pos: [f64; 3], mass: f64) -> Self {
        Self {
            pos,
            vel: [0.0; 3],
            mass,
        }
    }
}

/// Pairwise velocity update followed by position integration.
pub fn advance(bodies: &mut [Body], dt: f64) {
    let n = bodies.len();
    for i in 0..n {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let b1 = &mut head[i];
        for b2 in tail.iter_mut() {
            let d = [
                b1.pos[0] - b2.pos[0],
                b1.pos[1] - b2.pos[1],
                b1.pos[2] - b2.pos[2],
            ];
            let dist_sq = d[0] * d[0] + d[1] * d[1] + d[2] * d[2];
            let mag = dt / (dist_sq * dist_sq.sqrt());

            for axis in 0..3 {
                b1.vel[axis] -= d[axis] * b2.mass * mag;
                b2.vel[axis] += d[axis] * b1.mass * mag;
            }
        }
    }

    for body in bodies.iter_mut() {
        for axis in 0..3 {
            body.pos[axis] += body.vel[axis] * dt;
        }
    }
}

fn initial_bodies() -> Vec<Body> {
    vec![
        Body::at_rest([0.0, 0.0, 0.0], 100.0),
        Body::at_rest([10.0, 0.0, 0.0], 10.0),
        Body::at_rest([0.0, 10.0, 0.0], 10.0),
        Body::at_rest([0.0, 0.0, 10.0], 10.0),
    ]
}

pub struct NBody {
    bodies: Vec<Body>,
    steps: usize,
    dt: f64,
    completed: bool,
}

impl NBody {
    pub fn new(steps: usize, dt: f64) -> Self {
        Self {
            bodies: initial_bodies(),
            steps,
            dt,
            completed: false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

impl Workload for NBody {
    fn name(&self) -> &'static str {
        "nbody"
    }

    fn run(&mut self) {
        for _ in 0..std::hint::black_box(self.steps) {
            advance(&mut self.bodies, self.dt);
        }
        self.completed = true;
    }

    fn findings(&self) -> Vec<Finding> {
        if self.completed {
            vec![Finding::label("N-Body complete")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn momentum(bodies: &[Body]) -> [f64; 3] {
        let mut p = [0.0; 3];
        for b in bodies {
            for axis in 0..3 {
                p[axis] += b.mass * b.vel[axis];
            }
        }
        p
    }

    #[test]
    fn two_bodies_attract() {
        let mut bodies = vec![
            Body::at_rest([0.0, 0.0, 0.0], 1.0),
            Body::at_rest([1.0, 0.0, 0.0], 1.0),
        ];
        advance(&mut bodies, 0.1);
        assert!(bodies[0].vel[0] > 0.0);
        assert!(bodies[1].vel[0] < 0.0);
        assert!(bodies[1].pos[0] - bodies[0].pos[0] < 1.0);
    }

    #[test]
    fn momentum_is_conserved() {
        let mut workload = NBody::new(20, 0.01);
        workload.run();
        let p = momentum(workload.bodies());
        for component in p {
            assert!(component.abs() < 1e-9, "momentum drifted: {p:?}");
        }
        assert_ne!(workload.bodies()[1].pos, [10.0, 0.0, 0.0]);
    }

    #[test]
    fn reports_completion() {
        let mut workload = NBody::new(1, 0.01);
        assert!(workload.findings().is_empty());
        workload.run();
        assert_eq!(workload.findings(), vec![Finding::label("N-Body complete")]);
    }
}
