//! First-order IIR section with caller-owned delay state.
//!
//! The DVF recomputes its transfer function every block, so coefficients and
//! delay state are kept apart: [`FirstOrderCoeffs`] is a throwaway value,
//! [`FilterState`] persists with the channel and carries signal continuity
//! across block boundaries.

/// One-zero/one-pole transfer function H(z) = (b0 + b1 z^-1) / (1 + a1 z^-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderCoeffs {
    pub b0: f32,
    pub b1: f32,
    pub a1: f32,
}

/// Delay line of a first-order section: previous input and previous output.
///
/// One instance per filtered channel, created zeroed at channel setup and
/// mutated by every block. Must not be shared between channels processed
/// concurrently; each ear gets its own state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    pub x1: f32,
    pub y1: f32,
}

impl FilterState {
    /// Reset the delay line to silence.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl FirstOrderCoeffs {
    /// Unity passthrough, useful as a neutral placeholder.
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        a1: 0.0,
    };

    #[inline]
    pub fn process_sample(&self, x: f32, state: &mut FilterState) -> f32 {
        // Direct form I: y[n] = b0*x[n] + b1*x[n-1] - a1*y[n-1]
        let y = self.b0 * x + self.b1 * state.x1 - self.a1 * state.y1;
        state.x1 = x;
        state.y1 = y;
        y
    }

    /// Filter a block; input and output slices must be the same length.
    pub fn process_block(&self, input: &[f32], state: &mut FilterState, output: &mut [f32]) {
        debug_assert_eq!(input.len(), output.len());
        for (i, &x) in input.iter().enumerate() {
            output[i] = self.process_sample(x, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_response_follows_recursion() {
        let c = FirstOrderCoeffs {
            b0: 0.8,
            b1: -0.3,
            a1: -0.5,
        };
        let mut state = FilterState::default();
        let input = [1.0, 0.0, 0.0, 0.0];
        let mut out = [0.0; 4];
        c.process_block(&input, &mut state, &mut out);
        assert_eq!(out[0], c.b0);
        assert_eq!(out[1], c.b1 - c.a1 * c.b0);
        assert_eq!(out[2], -c.a1 * out[1]);
    }

    #[test]
    fn identity_is_transparent() {
        let mut state = FilterState::default();
        let input = [0.25, -0.5, 1.0, 0.0];
        let mut out = [0.0; 4];
        FirstOrderCoeffs::IDENTITY.process_block(&input, &mut state, &mut out);
        assert_eq!(out, input);
    }

    #[test]
    fn state_carries_across_blocks() {
        let c = FirstOrderCoeffs {
            b0: 0.7,
            b1: 0.2,
            a1: -0.4,
        };
        let input: Vec<f32> = (0..32).map(|i| ((i * 7) % 5) as f32 - 2.0).collect();

        let mut whole_state = FilterState::default();
        let mut whole = vec![0.0; input.len()];
        c.process_block(&input, &mut whole_state, &mut whole);

        let mut split_state = FilterState::default();
        let mut split = vec![0.0; input.len()];
        let (head_in, tail_in) = input.split_at(13);
        let (head_out, tail_out) = split.split_at_mut(13);
        c.process_block(head_in, &mut split_state, head_out);
        c.process_block(tail_in, &mut split_state, tail_out);

        assert_eq!(whole, split);
        assert_eq!(whole_state, split_state);
    }

    #[test]
    fn reset_clears_delay_line() {
        let c = FirstOrderCoeffs {
            b0: 1.0,
            b1: 0.5,
            a1: -0.9,
        };
        let mut state = FilterState::default();
        let mut out = [0.0; 2];
        c.process_block(&[1.0, 1.0], &mut state, &mut out);
        assert!(state.y1 != 0.0);
        state.reset();
        assert_eq!(state, FilterState::default());
    }
}
