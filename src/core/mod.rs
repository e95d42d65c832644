pub mod calculator;
pub mod infractions;
pub mod reconcile;
pub mod submit;
pub mod validator;
