pub mod hasher;
pub mod repositories;
