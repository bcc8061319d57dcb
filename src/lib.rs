//! # mobml — mobile markup builder
//!
//! A declarative HTML-fragment generator for the jquery.mobile attribute
//! conventions (`data-role`, `data-theme`, `data-icon`, …). Helpers compose
//! nested elements through caller-supplied continuations; the result is a
//! fragment string ready to interpolate into a template.
//!
//! ## Features
//! - Role helpers for every toolkit widget: pages, toolbars, listviews,
//!   collapsibles, grids, buttons, and the whole form family
//! - Ordered attribute maps with permissive pass-through of unknown options
//! - Per-render context: grid column cycling and collapsed-state inheritance
//!   never leak between renders, so concurrent requests stay isolated
//! - Read-only [`Config`] shared by all renders (AJAX setting, asset paths)
//!
//! ## Example
//! ```ignore
//! use mobml::{render, Config, Opts};
//!
//! let config = Config::default();
//! let html = render(&config, |b| {
//!     b.page(Opts::new().set("title", "Home").theme("c"), |b| {
//!         b.content(Opts::new(), |b| {
//!             b.list(Opts::new().flag("filter"), |b| {
//!                 b.item(Opts::new(), |b| {
//!                     b.text("Hello World!");
//!                     Ok(())
//!                 })
//!             })
//!         })
//!     })
//! })?;
//! # mobml::MobmlResult::Ok(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod forms;
pub mod layout;
pub mod lists;
pub mod opts;

// --- Core types ---
pub use builder::{Attrs, Builder};
pub use config::{Config, JQUERY_MOBILE_VERSION, JQUERY_VERSION};
pub use error::{MobmlError, MobmlResult};
pub use opts::{OptValue, Opts};

// --- Form types ---
pub use forms::{Choice, FormMethod, InputKind};

/// Render one fragment: construct a [`Builder`] over `config`, run the
/// continuation, and return the emitted markup.
pub fn render<F>(config: &Config, body: F) -> MobmlResult<String>
where
    F: FnOnce(&mut Builder) -> MobmlResult<()>,
{
    let mut builder = Builder::new(config);
    body(&mut builder)?;
    Ok(builder.finish())
}
