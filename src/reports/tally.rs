//! Status counters shared by the grouped reports.

use crate::models::{LeaveRequest, LeaveStatus};

/// Request counts by status plus day sums for one grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    /// All requests in the grouping.
    pub total: u64,
    /// Approved requests.
    pub approved: u64,
    /// Pending requests.
    pub pending: u64,
    /// Rejected requests.
    pub rejected: u64,
    /// Days charged by approved requests only.
    pub approved_days: u64,
    /// Days charged by every request regardless of status.
    pub requested_days: u64,
}

impl StatusTally {
    /// Counts the given requests.
    pub fn of<'a>(requests: impl IntoIterator<Item = &'a LeaveRequest>) -> Self {
        requests.into_iter().fold(Self::default(), |mut tally, request| {
            tally.total += 1;
            tally.requested_days += u64::from(request.days_count);
            match request.status {
                LeaveStatus::Approved => {
                    tally.approved += 1;
                    tally.approved_days += u64::from(request.days_count);
                }
                LeaveStatus::Pending => tally.pending += 1,
                LeaveStatus::Rejected => tally.rejected += 1,
            }
            tally
        })
    }
}
