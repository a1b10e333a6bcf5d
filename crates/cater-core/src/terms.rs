//! # Terms
//!
//! Ordering terms and contact details shown next to the menu.
//! Static data from the catalog document, no computation.

use serde::{Deserialize, Serialize};

/// Business contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub city: String,
    pub phone: String,
    pub email: String,
}

/// Ordering terms and policies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terms {
    /// Hours of notice required before an event
    pub advance_notice_hours: u32,

    /// Whether delivery is part of the quoted price
    pub delivery_included: bool,

    /// Minutes the driver waits at the drop-off
    pub driver_wait_minutes: u32,

    /// Receipt types issued (boleta / factura)
    pub receipt_types: String,

    /// Minimum batch policy, in prose
    pub minimum_order_policy: String,

    #[serde(default)]
    pub payment_methods: Vec<String>,

    #[serde(default)]
    pub policies: Vec<String>,

    #[serde(default)]
    pub notes: Vec<String>,

    pub contact: Contact,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_embedded_terms() {
        let catalog = Catalog::embedded().unwrap();
        let terms = catalog.terms();
        assert_eq!(terms.advance_notice_hours, 48);
        assert!(!terms.delivery_included);
        assert_eq!(terms.driver_wait_minutes, 10);
        assert_eq!(terms.payment_methods.len(), 3);
        assert_eq!(terms.contact.phone, "948 878 204");
    }

    #[test]
    fn test_terms_json_keys() {
        let terms = Terms {
            advance_notice_hours: 48,
            driver_wait_minutes: 10,
            ..Terms::default()
        };
        let json = serde_json::to_value(&terms).unwrap();
        assert_eq!(json["advanceNoticeHours"], 48);
        assert_eq!(json["deliveryIncluded"], false);
        assert_eq!(json["driverWaitMinutes"], 10);
        assert!(json["paymentMethods"].is_array());
        assert!(json["contact"]["city"].is_string());
    }
}
