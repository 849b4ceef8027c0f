pub mod flights;
