pub mod delete;
pub mod find;
pub mod insert;
pub mod select;
pub mod update;
