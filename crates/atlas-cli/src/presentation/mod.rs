//! # Presentation Layer
//!
//! MVVM adapted to a one-shot console page. Data flows one way:
//!
//! ```text
//! [ Shell ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!  (FetchState)   (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **ViewModels** are plain `Serialize` data. `--format json` dumps them as-is.
//! * **Presenters** are pure functions from domain types to ViewModels. The
//!   `"N/A"` fallback and chip keys are decided here, so JSON and text agree.
//! * **Views** implement `fmt::Display` and own layout and color only.
//! * **Formatters** are string helpers used by Views (chip wrapping).
//! * **Renderers** pick JSON or text and return the page as a `String`; the
//!   Shell decides when it reaches stdout.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{BodyViewModel, CreateView, DisplayOptions, PageViewModel};
