pub mod footer;
pub mod navbar;
