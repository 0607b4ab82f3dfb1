//! # Viewport Classification
//!
//! Tracks which [`ViewportClass`] is active for the viewing session.
//!
//! ## Geometry Rule
//! | Width            | Class   |
//! |------------------|---------|
//! | ≤ 768            | mobile  |
//! | ≤ 1024           | tablet  |
//! | > 1600, wide     | desktop |
//! | > 1200           | desktop |
//! | otherwise        | tablet  |
//!
//! "Wide" means an aspect ratio (width / height) of at least 16:10.
//!
//! ## State Machine
//! ```text
//!            Resize                 PrintStart
//!   geometry ──────► geometry   any ──────────► print
//!                                    PrintEnd
//!                          print ──────────► geometry (latest size)
//! ```
//! Resizes during printing are recorded but do not leave `print`; the
//! geometry class is recomputed from the latest size when printing ends.

use crate::format::ViewportClass;

pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;
pub const WIDE_DESKTOP_MIN_WIDTH: f64 = 1600.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1200.0;
pub const WIDE_ASPECT_RATIO: f64 = 16.0 / 10.0;

/// Classify a viewport by its geometry alone.
///
/// # Example
/// ```rust
/// use chordsheet::{classify, ViewportClass};
///
/// assert_eq!(classify(500.0, 900.0), ViewportClass::Mobile);
/// assert_eq!(classify(900.0, 700.0), ViewportClass::Tablet);
/// assert_eq!(classify(1800.0, 1000.0), ViewportClass::Desktop);
/// ```
pub fn classify(width: f64, height: f64) -> ViewportClass {
    if width <= MOBILE_MAX_WIDTH {
        ViewportClass::Mobile
    } else if width <= TABLET_MAX_WIDTH {
        ViewportClass::Tablet
    } else if width > WIDE_DESKTOP_MIN_WIDTH && is_wide(width, height) {
        ViewportClass::Desktop
    } else if width > DESKTOP_MIN_WIDTH {
        ViewportClass::Desktop
    } else {
        ViewportClass::Tablet
    }
}

fn is_wide(width: f64, height: f64) -> bool {
    height > 0.0 && width / height >= WIDE_ASPECT_RATIO
}

/// Signals supplied by the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Resize { width: f64, height: f64 },
    PrintStart,
    PrintEnd,
}

type Listener = Box<dyn FnMut(ViewportClass)>;

/// Continuously updated viewport class for one viewing session.
pub struct ViewportClassifier {
    width: f64,
    height: f64,
    printing: bool,
    current: ViewportClass,
    listeners: Vec<Listener>,
}

impl ViewportClassifier {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            printing: false,
            current: classify(width, height),
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    pub fn is_printing(&self) -> bool {
        self.printing
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Register a callback invoked every time the active class changes.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ViewportClass) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a host event. Returns the new class when it changed.
    pub fn handle(&mut self, event: ViewportEvent) -> Option<ViewportClass> {
        match event {
            ViewportEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
            }
            ViewportEvent::PrintStart => self.printing = true,
            ViewportEvent::PrintEnd => self.printing = false,
        }

        let next = if self.printing {
            ViewportClass::Print
        } else {
            classify(self.width, self.height)
        };
        if next == self.current {
            return None;
        }

        log::debug!("viewport {} -> {} after {:?}", self.current, next, event);
        self.current = next;
        for listener in &mut self.listeners {
            listener(next);
        }
        Some(next)
    }
}

impl std::fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("printing", &self.printing)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
