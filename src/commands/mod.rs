mod generate;
pub use generate::generate;

mod gallery;
pub use gallery::gallery;

mod save;
pub use save::save;

mod help;
pub use help::{examples, help, styles};
