use serde::{Deserialize, Serialize};

/// Request to open a payment order for a course, `POST /payments/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// Course being purchased.
    pub course_id: uuid::Uuid,
}

/// Order handle returned by the backend and handed to the checkout widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOrder {
    /// Backend order identifier, echoed back during verification.
    pub order_id: String,

    /// Amount in the currency's smallest unit (paise for INR).
    pub amount: u64,

    /// ISO currency code, e.g. "INR".
    pub currency: String,
}

/// A single display row on the checkout sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Row label, e.g. the course title or "GST".
    pub label: String,

    /// Row amount in the smallest currency unit.
    pub amount: u64,
}

/// What the checkout widget hands back on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentResult {
    /// Order the payment settles.
    pub order_id: String,

    /// Widget-issued payment identifier.
    pub payment_id: String,

    /// Signature over order and payment ids; verified server-side.
    pub signature: String,
}

/// Request to confirm a payment, `POST /payments/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyPaymentRequest {
    /// Order the payment settles.
    pub order_id: String,

    /// Widget-issued payment identifier.
    pub payment_id: String,

    /// Signature to verify.
    pub signature: String,
}

/// Outcome of `POST /payments/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyPaymentResponse {
    /// Whether the signature checked out and the enrollment was activated.
    pub verified: bool,
}

impl From<PaymentResult> for VerifyPaymentRequest {
    fn from(result: PaymentResult) -> Self {
        Self {
            order_id: result.order_id,
            payment_id: result.payment_id,
            signature: result.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_result_converts_to_verify_request() {
        let result = PaymentResult {
            order_id: "order_001".to_string(),
            payment_id: "pay_001".to_string(),
            signature: "sig".to_string(),
        };
        let request = VerifyPaymentRequest::from(result.clone());
        assert_eq!(request.order_id, result.order_id);
        assert_eq!(request.payment_id, result.payment_id);
        assert_eq!(request.signature, result.signature);
    }

    #[test]
    fn payment_order_roundtrip() {
        let order = PaymentOrder {
            order_id: "order_777".to_string(),
            amount: 1_499_900,
            currency: "INR".to_string(),
        };
        let json = serde_json::to_string(&order).unwrap();
        let back: PaymentOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
