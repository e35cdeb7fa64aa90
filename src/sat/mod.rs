mod assignment;
mod clause;
mod data;
pub mod dimacs;
pub mod error;
mod gpu;
pub mod proof;
mod propagate;
mod solver;
mod trail;
mod var;
mod vector;
mod watch;

pub use solver::{Model, Params, SolveResult, Solver};
pub use var::{Lit, Var};
