use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::foundation::core::{Point, Rgba8};
use crate::palette::PaletteRegistry;
use crate::rng::{RandomSource, ThreadRandom};
use crate::session::token::RenderToken;
use crate::stroke::{StrokeKind, StrokeRequest};
use crate::surface::PaintSurface;

/// Tuning knobs for the cooperative render loop.
///
/// The per-turn limits are deliberately dual: a pure count-based batch can
/// overrun the frame budget on slow surfaces, while a pure time-based batch
/// could starve progress when individual strokes are cheap. Whichever limit
/// is hit first ends the turn.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Maximum strokes drawn in one turn. When the pencil variant is active
    /// its ~2x draw cost is worth compensating for by halving this value;
    /// the scheduler does not rescale it automatically.
    pub batch_size: u32,
    /// Wall-clock budget for one turn's synchronous drawing. Checked between
    /// strokes, so a turn can overrun by at most one stroke.
    pub frame_budget: Duration,
    /// Stroke width used when a request carries a non-finite or non-positive
    /// width.
    pub default_stroke_width: f64,
    /// Background fill applied when a session clears the surface. `None`
    /// clears to transparent.
    pub background: Option<Rgba8>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            batch_size: 250,
            frame_budget: Duration::from_millis(10),
            default_stroke_width: 2.0,
            background: None,
        }
    }
}

/// One unit of drawing work handed to [`RenderScheduler::render`].
pub struct RenderRequest {
    /// Number of strokes to draw. Negative values clamp to zero, which
    /// produces an immediate no-op completion.
    pub total_strokes: i64,
    /// Nominal stroke width; non-finite or non-positive values fall back to
    /// [`SchedulerConfig::default_stroke_width`].
    pub stroke_width: f64,
    /// Palette identifier; unknown names resolve to the default palette.
    pub palette: String,
    /// Optional external abort signal, checked at every turn boundary.
    pub abort: Option<RenderToken>,
    /// Invoked at most once, only on natural completion (never on
    /// cancellation).
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

impl RenderRequest {
    /// Request `total_strokes` strokes from `palette`, with defaults for
    /// everything else.
    pub fn new(total_strokes: i64, palette: impl Into<String>) -> Self {
        Self {
            total_strokes,
            stroke_width: 0.0,
            palette: palette.into(),
            abort: None,
            on_complete: None,
        }
    }

    /// Set the nominal stroke width.
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Attach an external abort signal.
    pub fn abort_on(mut self, token: RenderToken) -> Self {
        self.abort = Some(token);
        self
    }

    /// Attach a completion callback.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

/// Outcome of one scheduling turn.
#[derive(Debug)]
pub enum TurnStatus {
    /// No active session.
    Idle,
    /// The session drew a batch and yielded; more work remains.
    InProgress {
        /// Strokes drawn so far across all turns of this session.
        rendered: u64,
        /// Total strokes the session will draw.
        total: u64,
    },
    /// The session drew its last stroke; the completion callback has run.
    Completed,
    /// The session observed its cancellation flag (supersession or external
    /// abort) and terminated without drawing.
    Cancelled,
}

struct ActiveSession {
    token: RenderToken,
    abort: Option<RenderToken>,
    rendered: u64,
    total: u64,
    stroke_width: f64,
    palette: String,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl ActiveSession {
    fn cancellation_requested(&self) -> bool {
        self.token.is_cancelled() || self.abort.as_ref().is_some_and(RenderToken::is_cancelled)
    }
}

/// Incremental stroke scheduler.
///
/// Owns the cooperative loop that draws strokes in time-boxed batches across
/// multiple turns. At most one session is active per scheduler; starting a
/// new one cancels the previous session's token before any new drawing, and
/// every turn re-checks its own token before resuming, so a superseded
/// continuation can never draw over a newer session.
///
/// All state (palettes, randomness, the active stroke variant) is owned by
/// the instance; independent schedulers never interfere.
pub struct RenderScheduler {
    config: SchedulerConfig,
    palettes: PaletteRegistry,
    rng: Box<dyn RandomSource>,
    stroke: StrokeKind,
    active: Option<ActiveSession>,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderScheduler {
    /// Create a scheduler with default configuration, built-in palettes, and
    /// the thread-local random source.
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Create a scheduler with an explicit configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            config,
            palettes: PaletteRegistry::new(),
            rng: Box::new(ThreadRandom),
            stroke: StrokeKind::default(),
            active: None,
        }
    }

    /// Replace the random source (e.g. with a seeded one in tests).
    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// The palette registry backing color selection.
    pub fn palettes(&self) -> &PaletteRegistry {
        &self.palettes
    }

    /// Mutable access to the palette registry, for registering palettes.
    pub fn palettes_mut(&mut self) -> &mut PaletteRegistry {
        &mut self.palettes
    }

    /// The active stroke variant.
    pub fn stroke(&self) -> StrokeKind {
        self.stroke
    }

    /// Swap the stroke variant. Takes effect from the next stroke drawn;
    /// an in-flight session does not need to be restarted.
    pub fn set_stroke(&mut self, kind: StrokeKind) {
        self.stroke = kind;
    }

    /// Progress of the active session as `(rendered, total)`, if any.
    pub fn progress(&self) -> Option<(u64, u64)> {
        self.active.as_ref().map(|s| (s.rendered, s.total))
    }

    /// Return `true` while a session has strokes left to draw.
    pub fn is_rendering(&self) -> bool {
        self.active.is_some()
    }

    /// Cancel the active session, if any, without invoking its completion
    /// callback.
    pub fn cancel(&mut self) {
        if let Some(session) = self.active.take() {
            session.token.cancel();
            debug!(rendered = session.rendered, total = session.total, "session cancelled");
        }
    }

    /// Start a new render session on `surface`.
    ///
    /// Any previous session's token is cancelled before the surface is
    /// touched, then the surface is cleared synchronously (with the
    /// configured background, if any) so the new session starts from a
    /// deterministic state even if its predecessor was mid-draw. Strokes are
    /// then drawn by subsequent [`turn`](Self::turn) calls.
    ///
    /// A zero-area surface is a documented precondition violation: nothing
    /// is drawn, no callback fires, and the returned token is already
    /// cancelled. Callers must validate surface availability themselves.
    #[tracing::instrument(skip_all, fields(total = request.total_strokes, palette = %request.palette))]
    pub fn render(
        &mut self,
        surface: &mut dyn PaintSurface,
        mut request: RenderRequest,
    ) -> RenderToken {
        if surface.width() == 0 || surface.height() == 0 {
            debug!("render skipped: zero-area surface");
            return RenderToken::already_cancelled();
        }

        if let Some(previous) = self.active.take() {
            previous.token.cancel();
            debug!(
                rendered = previous.rendered,
                total = previous.total,
                "superseding active session"
            );
        }

        surface.clear(self.config.background.unwrap_or(Rgba8::TRANSPARENT));

        let token = RenderToken::new();
        let total = request.total_strokes.max(0) as u64;
        let stroke_width = if request.stroke_width.is_finite() && request.stroke_width > 0.0 {
            request.stroke_width
        } else {
            self.config.default_stroke_width
        };

        if request.abort.as_ref().is_some_and(RenderToken::is_cancelled) {
            debug!("render aborted before first stroke");
            token.cancel();
            return token;
        }

        if total == 0 {
            debug!("empty session completes immediately");
            if let Some(on_complete) = request.on_complete.take() {
                on_complete();
            }
            return token;
        }

        self.active = Some(ActiveSession {
            token: token.clone(),
            abort: request.abort,
            rendered: 0,
            total,
            stroke_width,
            palette: request.palette,
            on_complete: request.on_complete,
        });
        debug!(total, "session started");
        token
    }

    /// Run one cooperative turn of the active session.
    ///
    /// Checks cancellation before drawing, then draws strokes in generation
    /// order until either the batch-size threshold or the wall-clock budget
    /// is hit. On the final stroke the completion callback runs exactly once
    /// and the scheduler returns to idle. The caller is expected to yield to
    /// its host between turns (or use [`drive`](Self::drive)).
    pub fn turn(&mut self, surface: &mut dyn PaintSurface) -> TurnStatus {
        let Some(mut session) = self.active.take() else {
            return TurnStatus::Idle;
        };

        if session.cancellation_requested() {
            trace!(rendered = session.rendered, "turn observed cancellation");
            return TurnStatus::Cancelled;
        }

        let width = surface.width();
        let height = surface.height();
        let batch_limit = self.config.batch_size.max(1) as u64;
        let started = Instant::now();
        let mut drawn = 0u64;
        let renderer = self.stroke.renderer();

        loop {
            let from = Point::new(
                f64::from(self.rng.next_int(0, width)),
                f64::from(self.rng.next_int(0, height)),
            );
            let to = Point::new(
                f64::from(self.rng.next_int(0, width)),
                f64::from(self.rng.next_int(0, height)),
            );
            let color = self.palettes.random(&session.palette, self.rng.as_mut());

            renderer.draw(
                surface,
                self.rng.as_mut(),
                &StrokeRequest {
                    width: session.stroke_width,
                    color: Some(color),
                    from,
                    to,
                },
            );

            session.rendered += 1;
            drawn += 1;

            if session.rendered >= session.total || drawn >= batch_limit {
                break;
            }
            if started.elapsed() > self.config.frame_budget {
                break;
            }
        }

        surface.flush();

        if session.rendered >= session.total {
            debug!(total = session.total, "session complete");
            if let Some(on_complete) = session.on_complete.take() {
                on_complete();
            }
            return TurnStatus::Completed;
        }

        trace!(rendered = session.rendered, drawn, "turn yielded");
        let status = TurnStatus::InProgress {
            rendered: session.rendered,
            total: session.total,
        };
        self.active = Some(session);
        status
    }

    /// Drive the active session to a terminal state, invoking `between_turns`
    /// at every suspension point.
    ///
    /// This is the headless stand-in for a host's "run this callback before
    /// the next paint" primitive: each turn is re-submitted until the session
    /// completes or observes cancellation (e.g. `between_turns` aborted it).
    pub fn drive(
        &mut self,
        surface: &mut dyn PaintSurface,
        mut between_turns: impl FnMut(),
    ) -> TurnStatus {
        loop {
            match self.turn(surface) {
                TurnStatus::InProgress { .. } => between_turns(),
                terminal => return terminal,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scheduler.rs"]
mod tests;
