//! Slip and time signal generators for driving the models.

use crate::error::ModelError;

/// `samples` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (samples - 1) as f64;
            let mut values: Vec<f64> = (0..samples).map(|i| start + step * i as f64).collect();
            values[samples - 1] = stop;
            values
        }
    }
}

/// Index of the sample closest to `target`; the first one wins on ties.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        let distance = (v - target).abs();
        match best {
            Some((_, d)) if !(distance < d) => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Slip profile that ramps linearly from zero and then holds `slip_max`.
///
/// Samples before the one closest to `ramp_end_time` follow
/// `slip_max * t / ramp_end_time`; that sample and every later one hold `slip_max`.
pub fn ramp_and_hold(
    time: &[f64],
    ramp_end_time: f64,
    slip_max: f64,
) -> Result<Vec<f64>, ModelError> {
    if !ramp_end_time.is_finite() || ramp_end_time <= 0.0 {
        return Err(ModelError::InvalidSetting {
            field: "ramp_end_time",
            message: "must be finite and > 0",
        });
    }
    if !slip_max.is_finite() {
        return Err(ModelError::InvalidSetting {
            field: "slip_max",
            message: "must be finite",
        });
    }
    let Some(ramp_end_idx) = nearest_index(time, ramp_end_time) else {
        return Ok(Vec::new());
    };

    Ok(time
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            if i < ramp_end_idx {
                slip_max * (t / ramp_end_time)
            } else {
                slip_max
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let values = linspace(-0.25, 0.25, 200);
        assert_eq!(values.len(), 200);
        assert_eq!(values[0], -0.25);
        assert_eq!(values[199], 0.25);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }

    #[test]
    fn nearest_index_prefers_first_on_ties() {
        assert_eq!(nearest_index(&[0.0, 1.0, 2.0], 0.5), Some(0));
        assert_eq!(nearest_index(&[0.0, 1.0, 2.0], 1.9), Some(2));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn ramp_and_hold_ramps_then_holds() {
        let time = linspace(0.0, 3.0, 7);
        let slip = ramp_and_hold(&time, 1.5, 0.15).unwrap();
        assert_eq!(slip.len(), 7);
        assert_eq!(slip[0], 0.0);
        assert!((slip[1] - 0.05).abs() < 1e-12);
        assert!((slip[2] - 0.10).abs() < 1e-12);
        for &k in &slip[3..] {
            assert_eq!(k, 0.15);
        }
    }

    #[test]
    fn ramp_and_hold_rejects_bad_ramp_time() {
        let time = linspace(0.0, 1.0, 3);
        assert!(matches!(
            ramp_and_hold(&time, 0.0, 0.1),
            Err(ModelError::InvalidSetting {
                field: "ramp_end_time",
                ..
            })
        ));
        assert!(ramp_and_hold(&[], 1.0, 0.1).unwrap().is_empty());
    }
}
