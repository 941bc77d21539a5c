pub mod contact_form;
pub mod gallery_modal;
pub mod hero;
pub mod navbar;
pub mod sections;
pub mod services;
pub mod toast;
