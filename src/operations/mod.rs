pub mod canonical;
pub mod modification;
pub mod orient;
pub mod query;
pub mod selection;
