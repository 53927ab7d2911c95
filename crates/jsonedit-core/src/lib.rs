//! Editing engine behind the jsonedit widget.
//!
//! - [`validator`] / [`transform`]: JSON syntax checks and the
//!   format / minify / sort-keys rewrites
//! - [`search`]: case-insensitive literal match finding
//! - [`navigator`]: active-match tracking with wraparound and
//!   selection/scroll side effects
//! - [`highlight`]: overlay markup with active and inactive match spans
//! - [`scroll_sync`]: keeps the overlay registered with the editing surface
//! - [`editor`]: the [`JsonEditor`] widget that owns the buffer and wires
//!   everything to an injected [`TextSurface`]

pub mod download;
pub mod editor;
pub mod highlight;
pub mod navigator;
pub mod scroll_sync;
pub mod search;
pub mod surface;
pub mod transform;
pub mod validator;

pub use download::Download;
pub use editor::{JsonEditor, KeyListenerHost, ListenerId, LoadTicket, ShortcutScope};
pub use highlight::{HighlightRenderer, TrustedMarkup};
pub use navigator::{MatchNavigator, NavState};
pub use scroll_sync::sync_scroll;
pub use search::{find_matches, MatchFinder, MatchRange, MatchSummary};
pub use surface::{FocusTarget, HeadlessSurface, ScrollOffset, Selection, TextSurface};
pub use transform::{sort_keys, Transform};
pub use validator::{validate, SyntaxError, ValidationState};
