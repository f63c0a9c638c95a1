//! Scribble renders large quantities of procedurally generated strokes onto a
//! 2D raster surface without blocking the host's event loop.
//!
//! The core is the incremental [`RenderScheduler`]: it partitions an
//! arbitrarily large unit of drawing work (tens of thousands of strokes) into
//! time-boxed turns, yields control back to the host between turns, supports
//! mid-flight cancellation and restart, and delegates each stroke's visual
//! appearance to a swappable [`StrokeRenderer`] variant.
//!
//! # Pipeline overview
//!
//! 1. **Request**: a host hands the scheduler a surface, a stroke count, a
//!    stroke width and a palette name ([`RenderRequest`]).
//! 2. **Session**: the scheduler clears the surface, cancels any previous
//!    session's [`RenderToken`], and opens a fresh one.
//! 3. **Turns**: each [`RenderScheduler::turn`] draws strokes (random
//!    endpoints, palette-random colors) until a batch-size or wall-clock
//!    limit is hit, then yields.
//! 4. **Terminal**: on the last stroke the completion callback runs exactly
//!    once; cancellation (supersession or external abort) terminates without
//!    drawing further and without the callback.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-writer by construction**: drawing is single-threaded and
//!   cooperative; suspension happens only at turn boundaries, never
//!   mid-stroke.
//! - **Degrade, never crash**: anomalous inputs (zero-area surface, negative
//!   stroke counts, unknown palettes) resolve to documented no-ops or
//!   fallbacks, not errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Named color palettes with uniform-random selection.
pub mod palette;
/// Uniform randomness behind a substitutable trait.
pub mod rng;
/// The cooperative render scheduler and session tokens.
pub mod session;
/// Swappable stroke renderers (brush, pen, pencil).
pub mod stroke;
/// Drawing-surface capability and the CPU raster implementation.
pub mod surface;

pub use foundation::core::{BezPath, Point, Rgba8, Vec2};
pub use foundation::error::{ScribbleError, ScribbleResult};

pub use palette::PaletteRegistry;
pub use rng::{RandomSource, SeededRandom, ThreadRandom};
pub use session::{RenderRequest, RenderScheduler, RenderToken, SchedulerConfig, TurnStatus};
pub use stroke::{Brush, Pen, Pencil, StrokeKind, StrokeRenderer, StrokeRequest};
pub use surface::{CpuSurface, PaintSurface, PathStyle, Shadow};
