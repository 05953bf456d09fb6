// UI component modules
pub mod audio_player;
mod file_upload;
mod footer;
mod header;
mod page;
mod toast;

pub use file_upload::{FileUpload, SelectedPdf};
pub use footer::Footer;
pub use header::Header;
pub use page::{Page, render_static};
pub use toast::Toasts;
