//! Interactive rectangle selection over an image.
//!
//! A user draws, resizes, moves and deletes non-overlapping rectangles on a
//! canvas that displays an image scaled to a fixed-width container. The
//! committed rectangles are reported back in the image's own pixel space.
//!
//! ```ignore
//! use area_selector::{ImageInfo, PointerEvent, SelectionEngine, Settings};
//! use area_selector::geometry::Point;
//!
//! let mut engine = SelectionEngine::from_settings(&Settings::default());
//! engine.load_image(ImageInfo::new(1200, 900))?;
//!
//! let host = Point::new(0.0, 0.0);
//! engine.handle_mouse_down(PointerEvent::on_canvas(50.0, 50.0), &host);
//! engine.handle_mouse_move(PointerEvent::on_canvas(350.0, 250.0));
//! engine.handle_mouse_up();
//!
//! println!("{}", engine.selected_area_json()?);
//! ```

pub mod constants;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod handles;
pub mod image;
pub mod input;
pub mod perf;
pub mod projection;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use cursor::CursorStyle;
pub use engine::{SelectionEngine, SessionStatus};
pub use error::{SelectorError, SelectorResult, SettingsError};
pub use image::ImageInfo;
pub use input::{CanvasHost, InputState, PointerEvent, PointerTarget};
pub use projection::SelectedAreaData;
pub use settings::Settings;
pub use types::{Direction, Selection, SelectionId};
