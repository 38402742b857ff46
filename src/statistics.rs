//! Statistics about a single nauty call.

use nauty_Traces_sys::statsblk;
use std::{os::raw::c_int, time::Duration};

/// Owned snapshot of the parts of nauty's `statsblk` a caller
/// usually reads, plus the wall-clock time nauty took.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonStatistics {
    /// Group size is `group_size_mantissa * 10^group_size_exponent`.
    pub group_size_mantissa: f64,
    pub group_size_exponent: c_int,
    pub number_of_orbits: c_int,
    pub number_of_generators: c_int,
    /// Non-zero if nauty rejected the call.
    pub error_status: c_int,
    pub number_of_nodes: u64,
    pub max_level: c_int,
    pub nauty_time: Duration,
}

impl CanonStatistics {
    pub fn from_stats(stats: &statsblk, nauty_time: Duration) -> Self {
        CanonStatistics {
            group_size_mantissa: stats.grpsize1,
            group_size_exponent: stats.grpsize2,
            number_of_orbits: stats.numorbits,
            number_of_generators: stats.numgenerators,
            error_status: stats.errstatus,
            number_of_nodes: stats.numnodes as u64,
            max_level: stats.maxlevel,
            nauty_time,
        }
    }

    /// Order of the automorphism group, if it fits into a float.
    pub fn group_size(&self) -> f64 {
        self.group_size_mantissa * 10f64.powi(self.group_size_exponent)
    }
}
