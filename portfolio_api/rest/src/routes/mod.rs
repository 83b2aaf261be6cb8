pub mod catalog;
pub mod contact;
pub mod root;
