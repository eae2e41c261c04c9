pub mod artist;
pub mod home;
pub mod show;
pub mod venue;
