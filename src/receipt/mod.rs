//! Receipt handling for the expense tracker.
//!
//! This module contains everything related to receipts:
//! - The `Receipt` model, preview mode selection and download filenames
//! - View handlers for previewing, closing and downloading receipts

mod close_endpoint;
mod download_endpoint;
mod models;
mod view_endpoint;

pub use close_endpoint::close_receipt_endpoint;
pub use download_endpoint::{download_current_receipt_endpoint, download_receipt_endpoint};
pub use models::{
    PreviewMode, Receipt, direct_download_filename, preview_download_filename,
};
pub use view_endpoint::get_receipt_page;
