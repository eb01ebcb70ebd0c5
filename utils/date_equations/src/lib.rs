//! # Date Equations
//!
//! Date Equations is a library focused on implementing
//! small, highly performant calendar calculations. The
//! implementation is informed by the work done by
//! Cassio Neri and Lorenz Schneider on applying Euclidean
//! affine functions to calendar algorithms.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//!
//! assert_eq!(gregorian::epoch_days_from_ymd(2020, 6, 9), 18_422);
//! // 2020-06-09 was a Tuesday.
//! assert_eq!(gregorian::day_of_week(18_422), 2);
//! ```

#![no_std]

pub mod gregorian;
