pub mod datetime;
pub mod genres;
pub mod records;
pub mod shows;
