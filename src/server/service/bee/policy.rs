//! Business rules a bee must satisfy before it is stored.

use crate::server::model::bee::{BeeCreationRequest, PolicyViolation};

/// Hour of day every bee must start at unless configured otherwise.
pub const DEFAULT_REQUIRED_START_HOUR: i32 = 7;
/// Hour of day every bee must end at unless configured otherwise.
pub const DEFAULT_REQUIRED_END_HOUR: i32 = 10;
/// Pay every bee must charge unless configured otherwise.
pub const DEFAULT_REQUIRED_PAY: i32 = 2000;

/// Fixed constraints on new bees.
///
/// Each rule is an exact match against the configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeeCreationPolicy {
    pub required_start_hour: i32,
    pub required_end_hour: i32,
    pub required_pay: i32,
}

impl Default for BeeCreationPolicy {
    fn default() -> Self {
        Self {
            required_start_hour: DEFAULT_REQUIRED_START_HOUR,
            required_end_hour: DEFAULT_REQUIRED_END_HOUR,
            required_pay: DEFAULT_REQUIRED_PAY,
        }
    }
}

impl BeeCreationPolicy {
    /// Checks start hour, end hour and pay, in that order.
    ///
    /// Stops at the first rule that fails.
    ///
    /// # Returns
    /// - `Ok(())` - Request satisfies every rule
    /// - `Err(PolicyViolation)` - First rule the request broke
    pub fn validate(&self, request: &BeeCreationRequest) -> Result<(), PolicyViolation> {
        if request.start_hour != self.required_start_hour {
            return Err(PolicyViolation::StartTimeMismatch {
                required: self.required_start_hour,
                requested: request.start_hour,
            });
        }

        if request.end_hour != self.required_end_hour {
            return Err(PolicyViolation::EndTimeMismatch {
                required: self.required_end_hour,
                requested: request.end_hour,
            });
        }

        if request.pay != self.required_pay {
            return Err(PolicyViolation::PayMismatch {
                required: self.required_pay,
                requested: request.pay,
            });
        }

        Ok(())
    }
}
