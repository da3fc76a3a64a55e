pub mod code_fence;
pub mod frontmatter;
pub mod heading;
pub mod list_item;
pub mod table;

pub use code_fence::CodeFence;
pub use frontmatter::Frontmatter;
pub use heading::Heading;
pub use list_item::ListItem;
pub use table::{Table, TableLine};
