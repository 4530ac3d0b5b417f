use ggez::glam::Vec2;
use ggez::graphics::Rect;

/// Forward thrust applied to the sprite while a punch is held.
pub const PUNCH_OFFSET: Vec2 = Vec2::new(5.0, 10.0);

// Total shrink applied to the hitbox before the collision check (2.5 px per side).
const HITBOX_SHRINK: f32 = 5.0;

/// A clenched fist that follows the mouse and throws punches.
pub struct Fist {
    pub rect: Rect,
    pub punching: bool,
}

impl Fist {
    pub fn new(bounds: Rect) -> Self {
        Self {
            rect: bounds,
            punching: false,
        }
    }

    /// Anchor the sprite so the midpoint of its top edge sits on the pointer.
    pub fn update(&mut self, pointer: Vec2) {
        self.rect.x = pointer.x - self.rect.w / 2.0;
        self.rect.y = pointer.y;
        if self.punching {
            self.rect.translate(PUNCH_OFFSET);
        }
    }

    /// Start a punch and report whether it lands on `target`.
    ///
    /// A punch already in flight cannot re-trigger: the second call is a no-op
    /// that reports a miss until `unpunch` resets the state.
    pub fn punch(&mut self, target: Rect) -> bool {
        if self.punching {
            return false;
        }
        self.punching = true;
        shrink(self.rect, HITBOX_SHRINK).overlaps(&target)
    }

    pub fn unpunch(&mut self) {
        self.punching = false;
    }
}

fn shrink(rect: Rect, amount: f32) -> Rect {
    Rect::new(
        rect.x + amount / 2.0,
        rect.y + amount / 2.0,
        rect.w - amount,
        rect.h - amount,
    )
}
