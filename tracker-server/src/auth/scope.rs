//! Access scope resolution
//!
//! Single decision table for resource authorization: one pure function maps
//! (role, linked employee, resource, operation) to an [`Access`] outcome,
//! and every resource handler interprets that outcome the same way. Roles
//! outside the known set are denied everything (default-deny).
//!
//! This module never touches storage; existence checks on referenced rows
//! stay with the callers.

use shared::models::{GoalUpdate, ReviewUpdate, Role};

/// Resource kinds covered by the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Employee,
    Goal,
    Review,
}

/// Operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Read,
    Create,
    Update,
    Delete,
}

/// Authorization outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Unrestricted access to every row and field
    Full,
    /// Rows owned by this employee only
    Scoped(i64),
    /// Own rows only, limited to the self-service field set
    Restricted(i64),
    /// No visible rows (caller has no linked employee record)
    Empty,
    /// Operation refused
    Denied(DenyReason),
}

/// Why an operation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Insufficient role or ownership (403)
    Forbidden,
    /// A linked employee record is required for this operation (400)
    MissingLink,
}

/// Fields an employee-role caller may change on their own goals
pub const GOAL_SELF_FIELDS: &[&str] = &["progress", "status"];

/// Fields an employee-role caller may change on their own reviews
pub const REVIEW_SELF_FIELDS: &[&str] = &["month", "rating", "feedback", "reviewer_name"];

/// Resolve what the caller may do with a resource.
///
/// For the Employee resource the owning employee is the record itself, so an
/// employee-role caller's scope is their own row.
pub fn resolve(role: &str, linked_employee: Option<i64>, resource: Resource, op: Op) -> Access {
    let Some(role) = Role::parse(role) else {
        return Access::Denied(DenyReason::Forbidden);
    };

    match role {
        Role::Admin | Role::Manager => Access::Full,
        Role::Employee => resolve_employee(linked_employee, resource, op),
    }
}

fn resolve_employee(link: Option<i64>, resource: Resource, op: Op) -> Access {
    // Employee records themselves are managed by admins/managers only,
    // even the caller's own one.
    if resource == Resource::Employee && matches!(op, Op::Create | Op::Update | Op::Delete) {
        return Access::Denied(DenyReason::Forbidden);
    }

    match op {
        Op::List => match link {
            Some(id) => Access::Scoped(id),
            None => Access::Empty,
        },
        Op::Read => match link {
            Some(id) => Access::Scoped(id),
            None => Access::Denied(DenyReason::Forbidden),
        },
        Op::Create => match link {
            Some(id) => Access::Restricted(id),
            None => Access::Denied(DenyReason::MissingLink),
        },
        Op::Update => match link {
            Some(id) => Access::Restricted(id),
            None => Access::Denied(DenyReason::Forbidden),
        },
        Op::Delete => Access::Denied(DenyReason::Forbidden),
    }
}

/// Narrow a goal update to the fields an employee may edit on their own
/// goals; everything else is dropped even if supplied.
pub fn self_goal_update(update: GoalUpdate) -> GoalUpdate {
    GoalUpdate {
        progress: update.progress,
        status: update.status,
        ..GoalUpdate::default()
    }
}

/// Narrow a review update to the self-evaluation fields; in particular the
/// owning employee can never be reassigned this way.
pub fn self_review_update(update: ReviewUpdate) -> ReviewUpdate {
    ReviewUpdate {
        month: update.month,
        rating: update.rating,
        feedback: update.feedback,
        reviewer_name: update.reviewer_name,
        ..ReviewUpdate::default()
    }
}
