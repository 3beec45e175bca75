//! Near-field distance variation filter (DVF) for binaural rendering.
//!
//! A time-varying first-order high-shelf that models how a nearby source's
//! spectrum changes with distance and lateral angle at each ear, after the
//! boundary-element fit of Spagnol, Tavazzi & Avanzini (2017). The host
//! renderer supplies, per ear and per audio block, an ipsilateral azimuth
//! and a head-radius-normalized distance; this crate supplies the filter.
//!
//! # Example
//!
//! ```
//! use nearfield::{apply_dvf, frontal_to_ipsilateral, FilterState};
//!
//! let fs = 48_000.0;
//! let input = vec![0.5; 256];
//! let mut out_l = vec![0.0; 256];
//! let mut out_r = vec![0.0; 256];
//!
//! // One persistent state per ear, zeroed at setup.
//! let mut state_l = FilterState::default();
//! let mut state_r = FilterState::default();
//!
//! // Source 30 degrees to the right of straight ahead, 2 head radii away.
//! let (theta_l, theta_r) = frontal_to_ipsilateral(30.0);
//! apply_dvf(theta_l, 2.0, &input, fs, &mut state_l, &mut out_l);
//! apply_dvf(theta_r, 2.0, &input, fs, &mut state_r, &mut out_r);
//! ```

pub mod core;

pub use crate::core::dvf::{
    apply_dvf, compute_shelf_params, dvf_iir_coeffs, frontal_to_ipsilateral, interp_shelf_params,
    ShelfParams,
};
pub use crate::core::iir::{FilterState, FirstOrderCoeffs};
