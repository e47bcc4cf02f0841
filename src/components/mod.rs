pub mod back_to_top;
pub mod editor;
pub mod flash;
pub mod form_field;
pub mod image_upload;
pub mod lazy_image;
pub mod like_button;
pub mod navbar;
pub mod search_bar;
pub mod share_button;
pub mod toast;
pub mod word_count;
