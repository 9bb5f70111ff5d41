//! # Switch Engine
//!
//! Decides and performs the switch for one layer, without looking at its children.
//!
//! Two rewrite paths exist and are tried in order:
//!
//! 1. **Shared style**: the applied style's name is re-encoded with the target mode
//!    and looked up in the catalog matching the layer (text or layer styles). On a
//!    hit the style handle is repointed and the layer's own properties are replaced
//!    by the style's, so manual overrides cannot mask the new style.
//! 2. **Symbol**: only when the style path did not switch. The master's name is
//!    re-encoded and looked up among symbol masters. On a hit the instance is
//!    repointed and its overrides are carried over to the new master.
//!
//! A layer switches at most once. Each layer yields exactly one [`Outcome`]:
//! switched, skipped (with a reason), or not applicable when it references
//! nothing that could carry a mode.

use crate::catalog::Catalogs;
use crate::error::Result;
use crate::model::{Mode, Node};
use crate::naming::NameCodec;
use crate::resolve::{applied_style, applied_symbol};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use tracing::debug;

/// Per-subtree count of switched and skipped layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub switched: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn new(switched: usize, skipped: usize) -> Self {
        Self { switched, skipped }
    }

    pub fn one_switched() -> Self {
        Self::new(1, 0)
    }

    pub fn one_skipped() -> Self {
        Self::new(0, 1)
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally::new(self.switched + rhs.switched, self.skipped + rhs.skipped)
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        self.switched += rhs.switched;
        self.skipped += rhs.skipped;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyInMode(Mode),
    NoMode,
    TargetMissing(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyInMode(mode) => write!(f, "already {}", mode),
            SkipReason::NoMode => f.write_str("name carries no mode"),
            SkipReason::TargetMissing(name) => write!(f, "no resource named '{}'", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Switched { from: String, to: String },
    Skipped(SkipReason),
    NotApplicable,
}

impl Outcome {
    pub fn tally(&self) -> Tally {
        match self {
            Outcome::Switched { .. } => Tally::one_switched(),
            Outcome::Skipped(_) => Tally::one_skipped(),
            Outcome::NotApplicable => Tally::default(),
        }
    }

    pub fn is_switched(&self) -> bool {
        matches!(self, Outcome::Switched { .. })
    }
}

/// Target name for a resource currently named `name`, or why there is none.
fn target_name(codec: &NameCodec, name: &str, target: Mode) -> std::result::Result<String, SkipReason> {
    match codec.mode_of(name) {
        None => Err(SkipReason::NoMode),
        Some(mode) if mode == target => Err(SkipReason::AlreadyInMode(mode)),
        Some(_) => Ok(codec.encode(name, target)),
    }
}

pub fn switch_node(
    node: &mut Node,
    catalogs: &Catalogs,
    codec: &NameCodec,
    target: Mode,
) -> Result<Outcome> {
    let by_style = switch_style(node, catalogs, codec, target)?;
    if by_style.is_switched() {
        return Ok(by_style);
    }

    let by_symbol = switch_symbol(node, catalogs, codec, target)?;
    Ok(match (by_style, by_symbol) {
        (_, switched @ Outcome::Switched { .. }) => switched,
        (Outcome::NotApplicable, other) => other,
        (skipped, _) => skipped,
    })
}

fn switch_style(
    node: &mut Node,
    catalogs: &Catalogs,
    codec: &NameCodec,
    target: Mode,
) -> Result<Outcome> {
    let Some(current) = applied_style(node, catalogs)? else {
        return Ok(Outcome::NotApplicable);
    };
    let wanted = match target_name(codec, &current.name, target) {
        Ok(name) => name,
        Err(reason) => return Ok(Outcome::Skipped(reason)),
    };
    let Some(resolved) = catalogs.find_style(node.kind.style_kind(), &wanted) else {
        return Ok(Outcome::Skipped(SkipReason::TargetMissing(wanted)));
    };

    node.style = Some(resolved.id);
    node.props = resolved.props.clone();
    Ok(Outcome::Switched {
        from: current.name.clone(),
        to: resolved.name.clone(),
    })
}

fn switch_symbol(
    node: &mut Node,
    catalogs: &Catalogs,
    codec: &NameCodec,
    target: Mode,
) -> Result<Outcome> {
    let Some(current) = applied_symbol(node, catalogs)? else {
        return Ok(Outcome::NotApplicable);
    };
    let wanted = match target_name(codec, &current.name, target) {
        Ok(name) => name,
        Err(reason) => return Ok(Outcome::Skipped(reason)),
    };
    let Some(resolved) = catalogs.find_symbol(&wanted) else {
        return Ok(Outcome::Skipped(SkipReason::TargetMissing(wanted)));
    };

    let captured = std::mem::take(&mut node.overrides);
    node.symbol = Some(resolved.id);
    let (kept, dropped) = resolved.accept_overrides(captured);
    if !dropped.is_empty() {
        debug!(layer = %node.name, ?dropped, "overrides not supported by new master");
    }
    node.overrides = kept;

    Ok(Outcome::Switched {
        from: current.name.clone(),
        to: resolved.name.clone(),
    })
}
