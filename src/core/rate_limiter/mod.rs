//! Rate limiting for the dispatch phase
//!
//! Two independent policies compose: a counting permit pool bounds how many
//! calls are in flight at once, and wave partitioning paces dispatch into
//! fixed-size groups that drain fully before the next group starts.

mod limiter;

#[cfg(test)]
mod tests;

pub use limiter::RateLimiter;
