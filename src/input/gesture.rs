//! Gesture interpretation state machine
//!
//! Decodes a live touch stream into incremental scale and rotation deltas.
//! Exactly two touches pinch-scale, exactly one touch drag-rotates; any
//! other count means no active gesture. Baselines are re-armed on every
//! touch-count transition, so a 1 → 2 → 1 finger sequence never reuses a
//! stale rotation baseline from before the two-finger segment.

use crate::input::touch::TouchPoint;

/// Minimum pinch distance considered valid as a scale baseline
///
/// Two touches closer than this would make the factor computation blow up;
/// such samples are treated as "gesture not active".
const MIN_PINCH_DISTANCE: f32 = 1e-3;

/// Transient state of the current continuous touch sequence
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    /// No gesture armed
    #[default]
    Idle,
    /// Two touches down, tracking the last inter-touch distance
    Pinching { last_distance: f32 },
    /// One touch down, tracking its last horizontal position
    Rotating { last_x: f32 },
}

/// Semantic gesture event emitted on a move sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Multiplicative adjustment to the caller's current scale
    Scale { factor: f32 },
    /// Additive yaw adjustment in radians
    Rotate { delta_angle: f32 },
}

/// Turns raw touch samples into [`GestureEvent`]s
///
/// The interpreter never fails: malformed or ambiguous samples simply
/// leave the gesture inactive for that sample.
#[derive(Debug)]
pub struct GestureInterpreter {
    session: GestureSession,
    /// Radians of yaw per pixel of horizontal drag
    sensitivity: f32,
}

impl GestureInterpreter {
    /// Creates an interpreter with the given drag sensitivity
    pub fn new(sensitivity: f32) -> Self {
        Self {
            session: GestureSession::Idle,
            sensitivity,
        }
    }

    /// Returns the current session state
    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Handles a touch-start sample; arms a baseline, emits nothing
    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) {
        self.session = Self::arm(touches);
    }

    /// Handles a move sample, emitting at most one event
    ///
    /// If the touch count no longer matches the armed session (a finger was
    /// added or lifted without a paired start/end), the baseline is re-armed
    /// and no event is emitted for this sample.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) -> Option<GestureEvent> {
        match (self.session, touches) {
            (GestureSession::Pinching { last_distance }, [a, b]) => {
                let new_distance = a.distance_to(b);
                if new_distance < MIN_PINCH_DISTANCE || last_distance < MIN_PINCH_DISTANCE {
                    self.session = Self::arm(touches);
                    return None;
                }
                self.session = GestureSession::Pinching {
                    last_distance: new_distance,
                };
                Some(GestureEvent::Scale {
                    factor: new_distance / last_distance,
                })
            }
            (GestureSession::Rotating { last_x }, [touch]) => {
                let delta_x = touch.x - last_x;
                self.session = GestureSession::Rotating { last_x: touch.x };
                Some(GestureEvent::Rotate {
                    delta_angle: delta_x * self.sensitivity,
                })
            }
            // Count changed since the baseline was armed
            _ => {
                self.session = Self::arm(touches);
                None
            }
        }
    }

    /// Handles a touch-end sample with the touches that remain down
    ///
    /// Always clears the old baseline; a remaining count of 1 or 2 arms a
    /// fresh one so the next move starts from current positions.
    pub fn on_touch_end(&mut self, remaining: &[TouchPoint]) {
        self.session = Self::arm(remaining);
    }

    /// Handles a platform touch-cancel; drops all gesture state
    pub fn on_touch_cancel(&mut self) {
        self.session = GestureSession::Idle;
    }

    fn arm(touches: &[TouchPoint]) -> GestureSession {
        match touches {
            [touch] => GestureSession::Rotating { last_x: touch.x },
            [a, b] => {
                let distance = a.distance_to(b);
                if distance < MIN_PINCH_DISTANCE {
                    GestureSession::Idle
                } else {
                    GestureSession::Pinching {
                        last_distance: distance,
                    }
                }
            }
            _ => GestureSession::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(d: f32) -> [TouchPoint; 2] {
        [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, d, 0.0)]
    }

    #[test]
    fn touch_start_arms_without_emitting() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&pair(10.0));
        assert_eq!(
            interp.session(),
            GestureSession::Pinching { last_distance: 10.0 }
        );
    }

    #[test]
    fn pinch_emits_relative_factors() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&pair(10.0));

        let first = interp.on_touch_move(&pair(15.0));
        assert_eq!(first, Some(GestureEvent::Scale { factor: 1.5 }));

        let second = interp.on_touch_move(&pair(9.0));
        match second {
            Some(GestureEvent::Scale { factor }) => assert!((factor - 0.6).abs() < 1e-6),
            other => panic!("expected scale event, got {:?}", other),
        }
    }

    #[test]
    fn drag_emits_sensitivity_scaled_rotation() {
        let mut interp = GestureInterpreter::new(0.01);
        let start = [TouchPoint::new(0, 100.0, 50.0)];
        interp.on_touch_start(&start);

        let moved = [TouchPoint::new(0, 130.0, 50.0)];
        let event = interp.on_touch_move(&moved);
        match event {
            Some(GestureEvent::Rotate { delta_angle }) => {
                assert!((delta_angle - 0.3).abs() < 1e-6);
            }
            other => panic!("expected rotate event, got {:?}", other),
        }

        // Baseline advanced to the new position
        let again = interp.on_touch_move(&moved);
        assert_eq!(again, Some(GestureEvent::Rotate { delta_angle: 0.0 }));
    }

    #[test]
    fn count_transition_rearms_instead_of_emitting() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&[TouchPoint::new(0, 100.0, 0.0)]);

        // Second finger lands mid-sequence without a new touch-start
        let event = interp.on_touch_move(&pair(20.0));
        assert_eq!(event, None);
        assert_eq!(
            interp.session(),
            GestureSession::Pinching { last_distance: 20.0 }
        );
    }

    #[test]
    fn return_to_one_finger_does_not_reuse_stale_baseline() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&[TouchPoint::new(0, 0.0, 0.0)]);
        interp.on_touch_move(&pair(20.0));

        // Finger lifted; one touch remains, far from the pre-pinch position
        let remaining = [TouchPoint::new(0, 500.0, 0.0)];
        interp.on_touch_end(&remaining);

        let event = interp.on_touch_move(&[TouchPoint::new(0, 510.0, 0.0)]);
        match event {
            Some(GestureEvent::Rotate { delta_angle }) => {
                // 10 px from the re-armed baseline, not 510 px from the original
                assert!((delta_angle - 0.1).abs() < 1e-6);
            }
            other => panic!("expected rotate event, got {:?}", other),
        }
    }

    #[test]
    fn end_with_no_remaining_touches_goes_idle() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&pair(10.0));
        interp.on_touch_end(&[]);
        assert_eq!(interp.session(), GestureSession::Idle);
        assert_eq!(interp.on_touch_move(&pair(12.0)), None);
    }

    #[test]
    fn cancel_clears_everything() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&[TouchPoint::new(0, 10.0, 0.0)]);
        interp.on_touch_cancel();
        assert_eq!(interp.session(), GestureSession::Idle);
    }

    #[test]
    fn three_touches_are_no_gesture() {
        let mut interp = GestureInterpreter::new(0.01);
        let three = [
            TouchPoint::new(0, 0.0, 0.0),
            TouchPoint::new(1, 10.0, 0.0),
            TouchPoint::new(2, 20.0, 0.0),
        ];
        interp.on_touch_start(&three);
        assert_eq!(interp.session(), GestureSession::Idle);
        assert_eq!(interp.on_touch_move(&three), None);
    }

    #[test]
    fn coincident_touches_do_not_arm_a_pinch() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&pair(0.0));
        assert_eq!(interp.session(), GestureSession::Idle);
    }

    #[test]
    fn cumulative_factors_multiply_to_expected_scale() {
        let mut interp = GestureInterpreter::new(0.01);
        interp.on_touch_start(&pair(10.0));

        let mut scale = 1.0_f32;
        for d in [15.0, 9.0] {
            if let Some(GestureEvent::Scale { factor }) = interp.on_touch_move(&pair(d)) {
                scale *= factor;
            }
        }
        assert!((scale - 0.9).abs() < 1e-6);
    }
}
