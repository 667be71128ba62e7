pub mod converter;
pub mod file_list;
pub mod uploader;
