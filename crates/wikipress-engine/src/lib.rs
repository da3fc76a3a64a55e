pub mod convert;
pub mod export;
pub mod io;
pub mod links;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertOptions, convert, convert_with_options};
pub use export::{ContentFormat, PageExport, export_file_name, storage_to_markdown, strip_markup};
pub use io::*;
pub use links::{LinkResolver, LinkTarget, page_path, page_url};
