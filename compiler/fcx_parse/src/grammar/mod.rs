//! Grammar productions.
//!
//! - `expr`: the Pratt core and every prefix/infix handler the rule table
//!   points at
//! - `stmt`: statements, items and blocks

mod expr;
mod stmt;

