pub mod aggregate;
pub mod criterion;
pub mod drug;
pub mod study;
