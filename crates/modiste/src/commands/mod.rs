pub mod apply;
pub mod case;
