//! A console that renders styled content to terminals, text and HTML.
//!
//! Content is anything convertible to [`Content`]: strings with markup,
//! styled pairs, [`rich::Text`], raw segments, groups, or values that
//! implement [`Renderable`]. The [`Console`] expands content into segments,
//! wraps and justifies them to its width, and writes them as ANSI escape
//! sequences. A recording console can replay its output with
//! [`Console::export_text`] and [`Console::export_html`].
//!
//! # Example
//!
//! ```
//! use rich::ColorSystem;
//! use rich_console::{Console, HtmlOptions, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let mut console = Console::builder()
//!     .color_system(ColorSystem::TrueColor)
//!     .file(buffer.clone())
//!     .record(true)
//!     .build();
//!
//! console.print("[bold red]alert[/] all clear").unwrap();
//! assert_eq!(buffer.contents(), "\x1b[1;31malert\x1b[0m all clear\n");
//! assert_eq!(console.export_text(false), "alert all clear\n");
//! assert!(console.export_html(&HtmlOptions::default()).contains(".r1 {color: #800000; font-weight: bold}"));
//! ```

pub mod console;
pub mod error;
pub mod export;
mod log_init;
pub mod options;
pub mod output;
pub mod renderable;
pub mod strip;
pub mod wrap;

pub use console::{ColorChoice, Console, ConsoleBuilder, PrintOptions};
pub use error::{ConsoleError, Result};
pub use export::HtmlOptions;
pub use log_init::init_logger;
pub use options::{Justify, OptionsUpdate, Overflow, RenderOptions};
pub use output::{Output, SharedBuffer};
pub use renderable::{Content, Renderable};
pub use strip::Strip;
