mod app;
mod runtime;

pub use self::{app::App, runtime::Tui};
