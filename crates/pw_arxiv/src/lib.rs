pub mod arxiv;
pub mod listing;

pub use arxiv::ArxivSource;

pub mod prelude {
    pub use crate::arxiv::ArxivSource;
    pub use pw_core::{Paper, PaperSource, Result};
}
