/// Page components routed inside the shell

pub mod about;
pub mod account;
pub mod home;
pub mod login;
pub mod not_found;
