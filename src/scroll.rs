//! Smooth-scroll animation: a fire-and-forget tween of the viewport
//! offset. There is no completion callback and no cancellation handle.
//! The app either lets an animation run out, replaces it with a new one
//! (last request wins), or drops it when the user scrolls by hand.

/// Smooth interpolation with ease-in/ease-out
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One in-flight scroll. Times are the host clock in seconds
/// (`ctx.input(|i| i.time)`); offsets are content-space pixels.
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start_time: f64,
    duration: f32,
}

impl ScrollAnimation {
    /// A non-positive duration degrades to an instant landing: the first
    /// sample already sits at the target.
    pub fn new(from: f32, to: f32, start_time: f64, duration: f32) -> Self {
        Self {
            from,
            to,
            start_time,
            duration: duration.max(0.0),
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Eased offset at `now`. Clamped: sampling before the start returns
    /// `from`, sampling after the end returns `to`.
    pub fn sample(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let elapsed = (now - self.start_time) as f32;
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        lerp(self.from, self.to, smoothstep(0.0, 1.0, t))
    }

    pub fn finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || (now - self.start_time) as f32 >= self.duration
    }
}
