//! # pratt
//!
//! Building blocks for precedence-climbing (Pratt) parsers.
//!
//! - [`cursor`]: [`TokenCursor`], one-token lookahead over a token sequence,
//!   and the [`Spanned`] trait tokens implement to report their location.
//! - [`error`]: [`Position`] and [`Span`] source locations and the
//!   [`span!`] macro.
//! - [`oper`]: operator fixity and binding power tables ([`OperDefs`]).
//!
//! The crate knows nothing about any particular token set; a concrete
//! parser (for instance `pratt-calc`) supplies its own tokens and operator
//! key type.
pub mod cursor;
pub mod error;
pub mod oper;

pub use cursor::{CursorError, CursorStats, Spanned, TokenCursor};
pub use error::{Position, Span};
pub use oper::{Assoc, Fixity, OperDef, OperDefError, OperDefTab, OperDefs};
