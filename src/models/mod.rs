pub mod article;
pub mod country;
