use nearfield::core::util::{impulse, white_noise};
use nearfield::{apply_dvf, dvf_iir_coeffs, interp_shelf_params, FilterState};

const FS: f32 = 48_000.0;

#[test]
fn silence_in_silence_out() {
    let input = vec![0.0f32; 512];
    let mut out = vec![1.0f32; 512];
    let mut state = FilterState::default();
    for (theta, rho) in [(0.0, 1.0), (90.0, 3.0), (180.0, 10.0), (45.5, 1.2)] {
        apply_dvf(theta, rho, &input, FS, &mut state, &mut out);
        assert!(out.iter().all(|&v| v == 0.0));
        assert_eq!(state, FilterState::default());
    }
}

#[test]
fn impulse_response_start_matches_coefficients() {
    let theta = 90.0;
    let rho = 3.0;
    let coeffs = dvf_iir_coeffs(interp_shelf_params(theta, rho), FS);

    let input = impulse(64);
    let mut out = vec![0.0f32; 64];
    let mut state = FilterState::default();
    apply_dvf(theta, rho, &input, FS, &mut state, &mut out);

    // Direct form I recursion on a unit impulse.
    assert_eq!(out[0], coeffs.b0);
    assert_eq!(out[1], coeffs.b1 - coeffs.a1 * coeffs.b0);
}

#[test]
fn split_blocks_match_one_long_block() {
    let theta = 120.0;
    let rho = 1.5;
    let input = white_noise(1024, 42);

    let mut whole_state = FilterState::default();
    let mut whole = vec![0.0f32; 1024];
    apply_dvf(theta, rho, &input, FS, &mut whole_state, &mut whole);

    let mut split_state = FilterState::default();
    let mut split = vec![0.0f32; 1024];
    for (chunk_in, chunk_out) in input.chunks(256).zip(split.chunks_mut(256)) {
        apply_dvf(theta, rho, chunk_in, FS, &mut split_state, chunk_out);
    }

    assert_eq!(whole, split);
    assert_eq!(whole_state, split_state);
}

#[test]
fn filtered_noise_stays_bounded() {
    // The shelf can boost by tens of dB near the head, but the recursion
    // must stay stable over a long run.
    let input = white_noise(FS as usize, 7);
    let mut out = vec![0.0f32; input.len()];
    let mut state = FilterState::default();
    apply_dvf(10.0, 1.0, &input, FS, &mut state, &mut out);
    assert!(out.iter().all(|v| v.is_finite()));
    let peak = out.iter().fold(0.0f32, |m, v| m.max(v.abs()));
    assert!(peak < 1e3, "runaway output peak {peak}");
}
