//! Maximum of a slice, computed by recursing from index `i` to the end
//!
//! The base case (`i == len`) returns 0, so the result is never below 0.

use crate::trampoline::{
    wrap, Entrypoint, Frame, FrameStep, TrampolineConfig, TrampolineError, Yielded,
};

/// Native recursive maximum of `values[i..]`
///
/// Uses one native stack frame per element; deep inputs overflow the stack.
pub fn native_get_max(values: &[i64], i: usize) -> i64 {
    if i >= values.len() {
        return 0;
    }
    values[i].max(native_get_max(values, i + 1))
}

/// Execution phase of a `MaxFrame`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaxPhase {
    /// Not yet started
    Descend,
    /// Waiting for the maximum of the rest of the slice
    Combine,
}

/// Frame computing the maximum of `values[index..]`
#[derive(Debug)]
pub struct MaxFrame<'a> {
    values: &'a [i64],
    index: usize,
    phase: MaxPhase,
}

impl<'a> MaxFrame<'a> {
    pub fn new(values: &'a [i64], index: usize) -> Self {
        Self {
            values,
            index,
            phase: MaxPhase::Descend,
        }
    }
}

impl<'a> Frame for MaxFrame<'a> {
    type Args = usize;
    type Output = i64;

    fn produce(&mut self, calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        if self.index >= self.values.len() {
            return Yielded::ResultValue(0).into_step();
        }
        self.phase = MaxPhase::Combine;
        calls.descend(self.index + 1)?.into_step()
    }

    fn resume(&mut self, rest: i64, _calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        debug_assert_eq!(self.phase, MaxPhase::Combine);
        Yielded::ResultValue(self.values[self.index].max(rest)).into_step()
    }
}

/// Wrap `MaxFrame` over a slice
pub fn max_entrypoint<'a>(
    values: &'a [i64],
    config: TrampolineConfig,
) -> Entrypoint<'a, MaxFrame<'a>> {
    Entrypoint::with_config(move |index: usize| MaxFrame::new(values, index), config)
}

/// Trampolined maximum of `values[i..]`, independent of native stack depth
pub fn framed_get_max(values: &[i64], i: usize) -> Result<i64, TrampolineError> {
    wrap(move |index: usize| MaxFrame::new(values, index)).run(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    const VALUES: [i64; 5] = [2, 4, 3, 5, 1];

    #[test]
    fn test_native_and_framed_agree_on_sample() {
        assert_eq!(native_get_max(&VALUES, 0), 5);
        assert_eq!(framed_get_max(&VALUES, 0).unwrap(), 5);
    }

    #[test]
    fn test_every_start_index_matches_native() {
        for i in 0..=VALUES.len() {
            assert_eq!(framed_get_max(&VALUES, i).unwrap(), native_get_max(&VALUES, i));
        }
    }

    #[test]
    fn test_known_maxima() {
        let cases = hashmap! {
            "ascending" => (vec![1, 2, 3, 4], 4),
            "descending" => (vec![9, 7, 5], 9),
            "peak in the middle" => (vec![3, 11, 2], 11),
            "single" => (vec![6], 6),
        };

        for (name, (values, expected)) in cases {
            assert_eq!(framed_get_max(&values, 0).unwrap(), expected, "{}", name);
            assert_eq!(native_get_max(&values, 0), expected, "{}", name);
        }
    }

    #[test]
    fn test_empty_slice_hits_base_case() {
        assert_eq!(native_get_max(&[], 0), 0);
        assert_eq!(framed_get_max(&[], 0).unwrap(), 0);
    }

    #[test]
    fn test_negative_values_floor_at_zero() {
        let values = [-4, -1, -7];
        assert_eq!(native_get_max(&values, 0), 0);
        assert_eq!(framed_get_max(&values, 0).unwrap(), 0);
    }

    #[test]
    fn test_entrypoint_pushes_one_frame_per_element() {
        let entry = max_entrypoint(&VALUES, TrampolineConfig::default());
        assert_eq!(entry.run(0).unwrap(), 5);

        let stats = entry.stats();
        assert_eq!(stats.drivers_started, 1);
        assert_eq!(stats.frames_primed, 6);
        assert_eq!(stats.frames_resumed, 5);
        assert_eq!(stats.frames_retired, 6);
        assert_eq!(stats.max_depth, 6);
        assert!(!entry.is_running());
    }
}
