//! Groups, members, and membership.

pub mod types;

pub use types::{Group, GroupMember, GroupSummary, Member};
