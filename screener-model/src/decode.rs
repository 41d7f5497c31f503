//! Label decoding from raw model outputs.
//!
//! Classifier ONNX exports emit either the label directly (an `i64`
//! tensor) or per-class scores (an `f32` tensor). Both collapse to one
//! integer label for a single-row input.

use screener_core::errors::ModelError;

/// Take the label from an `i64` output tensor for a one-row batch.
pub fn label_from_ints(data: &[i64]) -> Result<i64, ModelError> {
    data.first().copied().ok_or(ModelError::InferenceFailed {
        reason: "empty label tensor".to_string(),
    })
}

/// Take the label from an `f32` output tensor for a one-row batch.
///
/// A single score is treated as the label itself (regressor-style output,
/// truncated); multiple scores are treated as per-class values and the
/// argmax index is the label.
pub fn label_from_scores(data: &[f32]) -> Result<i64, ModelError> {
    match data.len() {
        0 => Err(ModelError::InferenceFailed {
            reason: "empty score tensor".to_string(),
        }),
        1 => Ok(data[0] as i64),
        _ => Ok(argmax(data)),
    }
}

/// Index of the largest score. Ties resolve to the first occurrence.
fn argmax(scores: &[f32]) -> i64 {
    let mut best = 0usize;
    for (i, &s) in scores.iter().enumerate() {
        if s > scores[best] {
            best = i;
        }
    }
    best as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_output_takes_first_element() {
        assert_eq!(label_from_ints(&[1, 0]).unwrap(), 1);
    }

    #[test]
    fn empty_int_output_fails() {
        assert!(matches!(
            label_from_ints(&[]),
            Err(ModelError::InferenceFailed { .. })
        ));
    }

    #[test]
    fn single_score_is_truncated_to_label() {
        assert_eq!(label_from_scores(&[1.0]).unwrap(), 1);
        assert_eq!(label_from_scores(&[0.7]).unwrap(), 0);
    }

    #[test]
    fn multi_score_takes_argmax() {
        assert_eq!(label_from_scores(&[0.1, 0.8, 0.1]).unwrap(), 1);
        assert_eq!(label_from_scores(&[0.9, 0.05, 0.05]).unwrap(), 0);
    }

    #[test]
    fn argmax_tie_resolves_to_first() {
        assert_eq!(label_from_scores(&[0.5, 0.5]).unwrap(), 0);
    }

    #[test]
    fn empty_score_output_fails() {
        assert!(matches!(
            label_from_scores(&[]),
            Err(ModelError::InferenceFailed { .. })
        ));
    }
}
