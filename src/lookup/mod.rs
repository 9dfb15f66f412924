pub mod fuzzy;
pub mod index;
