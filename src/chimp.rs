use ggez::glam::Vec2;
use ggez::graphics::Rect;

/// Horizontal walking speed in pixels per tick.
pub const WALK_SPEED: f32 = 9.0;
/// Degrees added to the spin per tick while dizzy.
pub const SPIN_STEP: f32 = 12.0;

const START_POS: (f32, f32) = (10.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChimpState {
    Walking,
    /// Spinning after a landed punch; `angle` is degrees in [0, 360).
    Dizzy { angle: f32 },
}

/// A monkey that paces the play area and spins when punched.
///
/// The sprite image itself is never touched: mirroring follows `direction`
/// and the dizzy frame is the base image rotated by the current angle, so the
/// whole entity is recoverable from `(rect, direction, state)`.
pub struct Chimp {
    pub rect: Rect,
    pub direction: f32,
    pub state: ChimpState,
    area: Rect,
    base_size: Vec2,
}

impl Chimp {
    /// `bounds` is the loaded sprite rect, `area` the fixed play area.
    pub fn new(bounds: Rect, area: Rect) -> Self {
        Self {
            rect: Rect::new(START_POS.0, START_POS.1, bounds.w, bounds.h),
            direction: 1.0,
            state: ChimpState::Walking,
            area,
            base_size: Vec2::new(bounds.w, bounds.h),
        }
    }

    pub fn update(&mut self) {
        match self.state {
            ChimpState::Walking => self.walk(),
            ChimpState::Dizzy { angle } => self.spin(angle),
        }
    }

    /// Enter the dizzy spin. Has no effect while already spinning.
    pub fn punched(&mut self) {
        if self.state == ChimpState::Walking {
            self.state = ChimpState::Dizzy { angle: 0.0 };
        }
    }

    fn walk(&mut self) {
        let mut next = self.rect;
        next.translate(Vec2::new(self.direction * WALK_SPEED, 0.0));
        if next.left() < self.area.left() || next.right() > self.area.right() {
            // Turn around at the edge and take this tick's step the other way.
            self.direction = -self.direction;
            next = self.rect;
            next.translate(Vec2::new(self.direction * WALK_SPEED, 0.0));
        }
        self.rect = next;
    }

    fn spin(&mut self, angle: f32) {
        let center = self.rect.center();
        let center = Vec2::new(center.x, center.y);
        let angle = angle + SPIN_STEP;
        if angle >= 360.0 {
            // Full rotation done: back to walking with the undistorted bounds.
            self.state = ChimpState::Walking;
            self.rect = centered_rect(self.base_size, center);
        } else {
            self.state = ChimpState::Dizzy { angle };
            self.rect = rotated_bounds(self.base_size, center, angle);
        }
    }
}

fn centered_rect(size: Vec2, center: Vec2) -> Rect {
    Rect::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
}

/// Axis-aligned bounds of a `size` rect rotated by `angle` degrees about `center`.
fn rotated_bounds(size: Vec2, center: Vec2, angle: f32) -> Rect {
    let (sin, cos) = angle.to_radians().sin_cos();
    let rotated = Vec2::new(
        size.x * cos.abs() + size.y * sin.abs(),
        size.x * sin.abs() + size.y * cos.abs(),
    );
    centered_rect(rotated, center)
}
