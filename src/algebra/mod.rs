pub mod accel;
pub mod expr;
pub mod pattern;
pub mod simplify;

pub use expr::{Expr, VarName};
pub use pattern::{equal, matches, pattern_any, pattern_capture, Bindings};
pub use simplify::simplify;
