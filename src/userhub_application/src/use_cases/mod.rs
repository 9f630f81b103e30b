pub mod list_users;
pub mod login;
pub mod logout;
pub mod register;
pub mod update_profile;

#[cfg(test)]
pub(crate) mod test_support;
