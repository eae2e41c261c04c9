mod artist;
mod errors;
mod show;
