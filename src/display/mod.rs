mod presenter;
mod table;

pub use presenter::Presenter;
pub use table::{Align, TextTable};
