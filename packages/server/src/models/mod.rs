pub mod artist;
pub mod shared;
pub mod show;
pub mod venue;
