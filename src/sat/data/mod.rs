mod litvec;
mod varvec;

pub(crate) use litvec::LitVec;
pub(crate) use varvec::VarVec;
