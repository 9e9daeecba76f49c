//! # View Events
//!
//! Tell the renderer which parts of the screen are out of date.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, first frame)
    FullRedrawRequired,

    /// Title and filter button need redrawing
    HeaderRedrawRequired,

    /// Card list (or loading indicator) needs redrawing
    ListRedrawRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}

impl ViewEvent {
    /// Whether this event already covers `other`
    pub fn covers(&self, other: &ViewEvent) -> bool {
        self == other || *self == ViewEvent::FullRedrawRequired
    }
}
