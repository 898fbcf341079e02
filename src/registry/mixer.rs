//! Animation clip playback
//!
//! A mixer is created each time an asset with clips becomes active, plays
//! every clip from the start, and freezes itself once the configured
//! auto-stop duration of tick time has elapsed. Deactivating the asset
//! drops the mixer, which also cancels the pending auto-stop — a retired
//! mixer can never stop a successor.

/// One animation clip carried by an asset
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Clip length in seconds; looped until the mixer stops
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Playback position of a single running clip
#[derive(Debug, Clone, PartialEq)]
struct ClipAction {
    duration: f32,
    /// Time within the clip, wrapped by duration while running
    time: f32,
}

/// Advances an asset's clips on the per-frame tick
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationMixer {
    actions: Vec<ClipAction>,
    /// Tick time accumulated since activation
    elapsed: f32,
    /// Tick time after which all actions stop
    auto_stop_after: f32,
    running: bool,
}

impl AnimationMixer {
    /// Creates a mixer with every clip playing from time zero
    pub fn new(clips: &[AnimationClip], auto_stop_secs: f32) -> Self {
        Self {
            actions: clips
                .iter()
                .map(|clip| ClipAction {
                    duration: clip.duration.max(f32::EPSILON),
                    time: 0.0,
                })
                .collect(),
            elapsed: 0.0,
            auto_stop_after: auto_stop_secs,
            running: !clips.is_empty(),
        }
    }

    /// Whether any action is still advancing
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of actions started on this mixer
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Playback position of a clip, frozen once stopped
    pub fn action_time(&self, index: usize) -> Option<f32> {
        self.actions.get(index).map(|action| action.time)
    }

    /// Advances playback by one frame's delta time
    ///
    /// Returns false once the mixer has stopped (auto-stop reached or
    /// [`stop_all`](Self::stop_all) called) and the caller may detach it.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += delta_secs;
        if self.elapsed >= self.auto_stop_after {
            self.stop_all();
            return false;
        }

        for action in &mut self.actions {
            action.time = (action.time + delta_secs) % action.duration;
        }
        true
    }

    /// Stops every action, freezing playback positions
    pub fn stop_all(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clips() -> Vec<AnimationClip> {
        vec![
            AnimationClip::new("open_doors", 2.0),
            AnimationClip::new("spin_wheels", 0.5),
        ]
    }

    #[test]
    fn new_mixer_plays_all_clips() {
        let mixer = AnimationMixer::new(&clips(), 10.0);
        assert!(mixer.is_running());
        assert_eq!(mixer.action_count(), 2);
        assert_eq!(mixer.action_time(0), Some(0.0));
    }

    #[test]
    fn mixer_without_clips_never_runs() {
        let mixer = AnimationMixer::new(&[], 10.0);
        assert!(!mixer.is_running());
    }

    #[test]
    fn advance_wraps_clip_time_by_duration() {
        let mut mixer = AnimationMixer::new(&clips(), 100.0);
        assert!(mixer.advance(0.7));

        assert!((mixer.action_time(0).unwrap() - 0.7).abs() < 1e-6);
        // 0.7 wraps within the 0.5 s clip
        assert!((mixer.action_time(1).unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn auto_stop_fires_after_configured_tick_time() {
        let mut mixer = AnimationMixer::new(&clips(), 1.0);
        assert!(mixer.advance(0.6));
        assert!(!mixer.advance(0.6));
        assert!(!mixer.is_running());

        // Frozen: further ticks change nothing
        let frozen = mixer.action_time(0);
        assert!(!mixer.advance(0.6));
        assert_eq!(mixer.action_time(0), frozen);
    }

    #[test]
    fn stop_all_freezes_immediately() {
        let mut mixer = AnimationMixer::new(&clips(), 100.0);
        mixer.advance(0.3);
        mixer.stop_all();
        assert!(!mixer.is_running());
        assert!(!mixer.advance(0.3));
    }
}
