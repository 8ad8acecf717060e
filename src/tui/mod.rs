//! Terminal User Interface module
//!
//! Handles the explorer list, the detail pane and the event loop

pub mod app;
pub mod events;
pub mod explorer;
pub mod list;
pub mod page;
pub mod runtime;
pub mod styles;
pub mod ui;

pub use app::App;
pub use explorer::{ExplorerList, ExplorerProps, ExplorerState};
pub use page::{make_renderable, ExamplePage, ExamplePageFactory, PageFactory, Renderable};
