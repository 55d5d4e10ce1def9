//! Client-side registration form validation: an email field validator and a
//! password confirmation checker, split between pure rules and thin bindings
//! onto form elements.

pub mod consts;
pub mod dom;
pub mod email_validator;
pub mod models;
pub mod password_checker;
pub mod services;
pub mod utils;
