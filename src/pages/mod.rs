pub mod home;
pub mod packages;
