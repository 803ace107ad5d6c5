//! Referential-integrity decisions for guarded deletes.
//!
//! The verdict functions are pure so the delete rules can be tested without a
//! database. Repositories re-express the same rules as conditional SQL so the
//! check and the delete happen atomically; these functions back the advisory
//! `can_delete_*` service operations and the denial messages.

use std::fmt;

/// The one order status that releases a product for deletion.
pub const STATUS_DELIVERED: &str = "delivered";

/// Why a guarded delete was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyDeleteReason {
    /// At least one order referencing the product is not yet delivered.
    UndeliveredOrder,
    /// At least one order, of any status, still references the user.
    ExistingOrders,
}

impl fmt::Display for DenyDeleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyDeleteReason::UndeliveredOrder => write!(f, "undelivered order exists"),
            DenyDeleteReason::ExistingOrders => {
                write!(f, "existing orders reference this user")
            }
        }
    }
}

/// Outcome of an advisory guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteVerdict {
    Permit,
    Deny(DenyDeleteReason),
}

impl DeleteVerdict {
    pub fn is_permitted(&self) -> bool {
        matches!(self, DeleteVerdict::Permit)
    }
}

/// Result of a guarded delete. Not-found is distinct from denied: the caller
/// must be able to answer 404 for the former and 409 for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Denied(DenyDeleteReason),
}

/// A product may be deleted only when every order referencing it has been
/// delivered. An empty set of orders permits deletion.
pub fn product_verdict<I, S>(statuses: I) -> DeleteVerdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for status in statuses {
        if status.as_ref() != STATUS_DELIVERED {
            return DeleteVerdict::Deny(DenyDeleteReason::UndeliveredOrder);
        }
    }
    DeleteVerdict::Permit
}

/// A user may be deleted only when no order references it, regardless of the
/// orders' statuses.
pub fn user_verdict(order_count: i64) -> DeleteVerdict {
    if order_count == 0 {
        DeleteVerdict::Permit
    } else {
        DeleteVerdict::Deny(DenyDeleteReason::ExistingOrders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_with_no_orders_is_deletable() {
        let statuses: Vec<String> = vec![];
        assert_eq!(product_verdict(&statuses), DeleteVerdict::Permit);
    }

    #[test]
    fn product_with_all_orders_delivered_is_deletable() {
        let statuses = ["delivered", "delivered"];
        assert_eq!(product_verdict(statuses), DeleteVerdict::Permit);
    }

    #[test]
    fn product_with_any_undelivered_order_is_blocked() {
        for blocking in ["paid", "for assembly", "delivery"] {
            let statuses = ["delivered", blocking];
            assert_eq!(
                product_verdict(statuses),
                DeleteVerdict::Deny(DenyDeleteReason::UndeliveredOrder),
                "status {blocking:?} should block deletion"
            );
        }
    }

    #[test]
    fn unknown_statuses_block_product_deletion() {
        // The status set is open; anything that is not "delivered" blocks.
        let statuses = ["refunded"];
        assert_eq!(
            product_verdict(statuses),
            DeleteVerdict::Deny(DenyDeleteReason::UndeliveredOrder)
        );
    }

    #[test]
    fn user_with_no_orders_is_deletable() {
        assert_eq!(user_verdict(0), DeleteVerdict::Permit);
    }

    #[test]
    fn user_with_any_order_is_blocked() {
        assert_eq!(
            user_verdict(1),
            DeleteVerdict::Deny(DenyDeleteReason::ExistingOrders)
        );
        assert_eq!(
            user_verdict(42),
            DeleteVerdict::Deny(DenyDeleteReason::ExistingOrders)
        );
    }

    #[test]
    fn denial_reasons_are_human_readable() {
        assert_eq!(
            DenyDeleteReason::UndeliveredOrder.to_string(),
            "undelivered order exists"
        );
        assert_eq!(
            DenyDeleteReason::ExistingOrders.to_string(),
            "existing orders reference this user"
        );
    }
}
