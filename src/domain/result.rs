//! Result type alias for delivery-alerts

use super::errors::DeliveryAlertsError;

/// Result type alias for delivery-alerts operations
///
/// Uses [`DeliveryAlertsError`] as the error type.
///
/// # Examples
///
/// ```
/// use delivery_alerts::domain::result::Result;
/// use delivery_alerts::domain::errors::DeliveryAlertsError;
///
/// fn failing_function() -> Result<()> {
///     Err(DeliveryAlertsError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DeliveryAlertsError>;
