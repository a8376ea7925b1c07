//! Reusable components for the **bima** terminal UI.
//!
//! Every widget implements [`bima_core::Component`], so it can be embedded
//! inside any [`bima_core::Model`] and composed within [`ratatui`] layouts.
//!
//! # Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`virtual_list`] | Windowed list of variable-height expandable rows |
//! | [`field`] | Single-line text / numeric input |
//! | [`checkgroup`] | Multi-select checkbox group |
//! | [`select`] | Single-choice cycling selector |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`layout`] | [`RowLayout`](layout::RowLayout): prefix-sum offset table behind the windowed list |
//! | [`expand`] | [`ExpansionState`](expand::ExpansionState): per-row expand/collapse phases keyed by stable id |
//! | [`key`] | Key-binding helpers |

pub mod checkgroup;
pub mod expand;
pub mod field;
pub mod key;
pub mod layout;
pub mod select;
pub mod virtual_list;
