pub mod dashboard;
pub mod home;
pub mod manifesto;
pub mod not_found;
pub mod onboarding;
