pub mod board;
pub mod cancel;
pub mod show;
pub mod signup;
pub mod users;
