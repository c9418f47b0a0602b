use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hour accepted by the bee policy cannot be represented as a time of day.
    ///
    /// Only reachable if the policy is configured with an hour outside 0..=23.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Hour {hour} is not a valid time of day")]
    InvalidHourOfDay {
        /// The hour that failed to convert
        hour: i32,
    },

    /// A bee member row points at a user row that does not exist.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Bee member {member_id} references missing user {user_id}")]
    MemberWithoutUser {
        /// ID of the bee member row
        member_id: i32,
        /// The user ID it references
        user_id: i32,
    },
}
