//! Operator definitions and binding powers.
//!
//! This module describes how strongly operators bind their operands during
//! precedence climbing. Each operator may appear in prefix position (`-x`),
//! infix position (`x - y`), or both, and each position carries its own
//! binding powers.
//!
//! # Components
//! - [`Fixity`]: operator positions (`Prefix`, `Infix`).
//! - [`Assoc`]: associativity derived from a definition (`Left`, `Right`).
//! - [`OperDef`]: binding powers for one operator in one position.
//! - [`OperDefs`]: registry keyed by operator, with lookup by fixity.
//!
//! # Binding powers
//! An infix operator has a left and a right binding power. The parser keeps
//! folding operators into the left operand while their left binding power is
//! at least the current minimum, and parses the right operand with the right
//! binding power as the new minimum. `left < right` yields left
//! associativity. A prefix operator only has a right binding power.
//!
//! Binding power `0` is reserved as the top-level minimum and cannot be
//! assigned to an operator.

use indexmap::IndexMap;
use smartstring::alias::String;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// The syntactic position of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Fixity {
    /// Prefix operator, appearing before its operand, e.g. `-x`.
    Prefix = 0,

    /// Infix operator, appearing between operands, e.g. `x + y`.
    Infix = 1,
}

impl Fixity {
    /// The total number of fixity variants.
    pub const COUNT: usize = 2;

    /// String representations of each fixity variant, in declaration order.
    pub const STRS: &[&str] = &["prefix", "infix"];
}

impl From<Fixity> for String {
    /// Converts a [`Fixity`] into its lowercase string representation.
    fn from(f: Fixity) -> Self {
        Fixity::STRS[Into::<usize>::into(f)].into()
    }
}

impl From<Fixity> for usize {
    fn from(f: Fixity) -> Self {
        f as usize
    }
}

impl fmt::Display for Fixity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(String::from(*self).as_str())
    }
}

/// Operator associativity.
///
/// | Variant | Description |
/// |----------|--------------|
/// | [`Assoc::Left`]  | groups from left to right: `a - b - c` is `(a - b) - c` |
/// | [`Assoc::Right`] | groups from right to left |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Assoc {
    Left = 0,
    Right = 1,
}

impl Assoc {
    pub const STRS: &[&str] = &["left", "right"];
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Assoc::STRS[*self as usize])
    }
}

/// Errors reported while registering operator definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperDefError {
    #[error("operator {name} is already defined as {fixity}")]
    Redefined { name: String, fixity: Fixity },

    #[error("prefix operator {name} cannot have a left binding power")]
    PrefixWithLeftPower { name: String },

    #[error("infix operator {name} requires a left binding power")]
    InfixWithoutLeftPower { name: String },

    #[error("binding power 0 is reserved; cannot assign it to {fixity} operator {name}")]
    ReservedPower { name: String, fixity: Fixity },
}

/// Binding powers of a single operator in a single position.
///
/// # Field Rules
/// - `left_bp` must be `None` for [`Fixity::Prefix`] and `Some` for
///   [`Fixity::Infix`].
/// - No binding power may be `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperDef {
    /// Operator fixity.
    pub fixity: Fixity,
    /// Strength with which the operator binds the operand on its left.
    pub left_bp: Option<u8>,
    /// Strength with which the operator binds the operand on its right.
    pub right_bp: u8,
}

impl OperDef {
    /// A prefix operator binding its operand with `right_bp`.
    pub const fn prefix(right_bp: u8) -> Self {
        Self {
            fixity: Fixity::Prefix,
            left_bp: None,
            right_bp,
        }
    }

    /// An infix operator with the given binding powers.
    pub const fn infix(left_bp: u8, right_bp: u8) -> Self {
        Self {
            fixity: Fixity::Infix,
            left_bp: Some(left_bp),
            right_bp,
        }
    }

    /// Associativity implied by the binding powers.
    ///
    /// Prefix operators are always right associative.
    pub fn assoc(&self) -> Assoc {
        match self.left_bp {
            Some(l_bp) if l_bp < self.right_bp => Assoc::Left,
            _ => Assoc::Right,
        }
    }
}

/// Definitions of one operator, indexed by [`Fixity`].
#[derive(Debug, Clone, Default)]
pub struct OperDefTab {
    tab: [Option<OperDef>; Fixity::COUNT],
}

impl OperDefTab {
    pub const fn new() -> Self {
        Self {
            tab: [const { None }; Fixity::COUNT],
        }
    }

    /// Retrieves the operator definition for the given [`Fixity`], if present.
    pub fn get_op_def(&self, fixity: Fixity) -> Option<&OperDef> {
        self.tab[usize::from(fixity)].as_ref()
    }
}

impl std::ops::Index<Fixity> for OperDefTab {
    type Output = Option<OperDef>;

    fn index(&self, i: Fixity) -> &Self::Output {
        &self.tab[usize::from(i)]
    }
}

impl std::ops::IndexMut<Fixity> for OperDefTab {
    fn index_mut(&mut self, i: Fixity) -> &mut Self::Output {
        &mut self.tab[usize::from(i)]
    }
}

/// Registry of operator definitions keyed by operator.
///
/// Entries keep their insertion order, so iterating the registry lists
/// operators in the order they were defined.
///
/// # Example
/// ```rust
/// # use pratt::{Assoc, Fixity, OperDef, OperDefs};
/// let mut defs = OperDefs::new();
/// defs.define('-', OperDef::infix(1, 2)).unwrap();
/// defs.define('-', OperDef::prefix(5)).unwrap();
///
/// assert_eq!(defs.infix_bp(&'-'), Some((1, 2)));
/// assert_eq!(defs.prefix_bp(&'-'), Some(5));
/// assert_eq!(defs.prefix_bp(&'*'), None);
/// assert_eq!(defs.get(&'-')[Fixity::Infix].unwrap().assoc(), Assoc::Left);
/// ```
#[derive(Debug, Clone)]
pub struct OperDefs<K> {
    map: IndexMap<K, OperDefTab>,
}

/// Shared empty operator definition table.
static EMPTY_OPER_DEF_TAB: OperDefTab = OperDefTab::new();

impl<K> Default for OperDefs<K> {
    fn default() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }
}

impl<K> OperDefs<K>
where
    K: Hash + Eq + Copy + fmt::Display,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of operators in this registry.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Registers `def` for operator `name`.
    ///
    /// # Errors
    /// Fails if the definition violates the [`OperDef`] field rules or if
    /// `name` already has a definition with the same fixity.
    pub fn define(&mut self, name: K, def: OperDef) -> Result<(), OperDefError> {
        let display = || String::from(name.to_string().as_str());

        match (def.fixity, def.left_bp) {
            (Fixity::Prefix, Some(_)) => {
                return Err(OperDefError::PrefixWithLeftPower { name: display() });
            }
            (Fixity::Infix, None) => {
                return Err(OperDefError::InfixWithoutLeftPower { name: display() });
            }
            _ => {}
        }
        if def.right_bp == 0 || def.left_bp == Some(0) {
            return Err(OperDefError::ReservedPower {
                name: display(),
                fixity: def.fixity,
            });
        }

        let tab = self.map.entry(name).or_default();
        if tab[def.fixity].is_some() {
            return Err(OperDefError::Redefined {
                name: display(),
                fixity: def.fixity,
            });
        }
        log::trace!(
            "DEFINE: {} {} left_bp={:?} right_bp={}",
            def.fixity,
            name,
            def.left_bp,
            def.right_bp
        );
        tab[def.fixity] = Some(def);
        Ok(())
    }

    /// Returns the definition table for `name`, or an empty one if `name` is
    /// unknown.
    pub fn get(&self, name: &K) -> &OperDefTab {
        self.map.get(name).unwrap_or(&EMPTY_OPER_DEF_TAB)
    }

    /// `(left_bp, right_bp)` of `name` in infix position.
    pub fn infix_bp(&self, name: &K) -> Option<(u8, u8)> {
        let def = self.get(name).get_op_def(Fixity::Infix)?;
        Some((def.left_bp?, def.right_bp))
    }

    /// `right_bp` of `name` in prefix position.
    pub fn prefix_bp(&self, name: &K) -> Option<u8> {
        self.get(name)
            .get_op_def(Fixity::Prefix)
            .map(|def| def.right_bp)
    }

    /// Iterates over every `(operator, definition)` pair in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &OperDef)> {
        self.map
            .iter()
            .flat_map(|(name, tab)| tab.tab.iter().flatten().map(move |def| (name, def)))
    }
}
