//! Fire-and-forget tweens evaluated against the host's frame clock.
//!
//! A tween always knows its target, so layout code can read the end state
//! immediately while the painted value catches up. Retargeting mid-flight
//! starts from the currently displayed value.

use eframe::egui;
use eframe::egui::emath::easing;

/// Values a [`Tween`] can interpolate.
pub trait Interpolate: Copy {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        egui::lerp(*self..=*other, t)
    }
}

impl Interpolate for egui::Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        egui::Rect::from_min_max(self.min.lerp(other.min, t), self.max.lerp(other.max, t))
    }
}

/// Eased transition from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: f64,
    duration: f32,
}

impl<T: Interpolate> Tween<T> {
    /// A tween already at rest on `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    /// End state of the current transition.
    pub fn target(&self) -> T {
        self.to
    }

    /// Normalized progress in `[0, 1]` at time `now`.
    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) / self.duration as f64) as f32).clamp(0.0, 1.0)
    }

    /// Displayed value at time `now`.
    pub fn value_at(&self, now: f64) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.interpolate(&self.to, easing::cubic_out(t))
    }

    /// Whether the transition is still playing at time `now`.
    pub fn is_running(&self, now: f64) -> bool {
        self.progress(now) < 1.0
    }

    /// Start moving toward `to` from wherever the tween is at `now`.
    pub fn retarget(&mut self, to: T, now: f64, duration: f32) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration.max(0.0);
    }

    /// Jump straight to `to` without animating.
    pub fn snap(&mut self, to: T) {
        *self = Self::settled(to);
    }

    /// Move to `to`, animated or not.
    pub fn set(&mut self, to: T, now: f64, duration: f32, animated: bool) {
        if animated {
            self.retarget(to, now, duration);
        } else {
            self.snap(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_is_not_running() {
        let tween = Tween::settled(3.0_f32);
        assert!(!tween.is_running(0.0));
        assert_eq!(tween.value_at(10.0), 3.0);
    }

    #[test]
    fn test_reaches_target_after_duration() {
        let mut tween = Tween::settled(0.0_f32);
        tween.retarget(100.0, 1.0, 0.5);

        assert_eq!(tween.target(), 100.0);
        assert_eq!(tween.value_at(1.0), 0.0);
        assert!(tween.is_running(1.25));
        let midway = tween.value_at(1.25);
        assert!(midway > 0.0 && midway < 100.0);
        assert_eq!(tween.value_at(1.5), 100.0);
        assert!(!tween.is_running(1.5));
    }

    #[test]
    fn test_retarget_starts_from_displayed_value() {
        let mut tween = Tween::settled(0.0_f32);
        tween.retarget(100.0, 0.0, 1.0);
        let shown = tween.value_at(0.5);

        tween.retarget(-50.0, 0.5, 1.0);
        assert_eq!(tween.value_at(0.5), shown);
        assert_eq!(tween.target(), -50.0);
        assert_eq!(tween.value_at(2.0), -50.0);
    }

    #[test]
    fn test_set_without_animation_snaps() {
        let mut tween = Tween::settled(0.0_f32);
        tween.set(42.0, 5.0, 1.0, false);
        assert_eq!(tween.value_at(5.0), 42.0);
        assert!(!tween.is_running(5.0));
    }

    #[test]
    fn test_rect_interpolation() {
        let a = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        let b = egui::Rect::from_min_size(egui::pos2(20.0, 40.0), egui::vec2(10.0, 10.0));
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.min, egui::pos2(10.0, 20.0));
        assert_eq!(mid.size(), egui::vec2(10.0, 10.0));
    }
}
