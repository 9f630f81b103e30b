mod helpers;

mod edit;
mod login;
mod register;
