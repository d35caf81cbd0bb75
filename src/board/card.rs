// Single card on the board.

/// Visible state of a card. `Matched` is terminal until the board restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Clone, Debug)]
pub struct Card {
    token: String,
    face: CardFace,
    order: u32,
}

impl Card {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), face: CardFace::Hidden, order: 0 }
    }

    /// Pair token shared with exactly one other card.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Display order value assigned by the last shuffle.
    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn is_face_up(&self) -> bool {
        matches!(self.face, CardFace::Revealed | CardFace::Matched)
    }

    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    pub(super) fn reveal(&mut self) {
        if self.face == CardFace::Hidden {
            self.face = CardFace::Revealed;
        }
    }

    // Matched cards stay face up.
    pub(super) fn conceal(&mut self) {
        if self.face == CardFace::Revealed {
            self.face = CardFace::Hidden;
        }
    }

    pub(super) fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }

    pub(super) fn reset(&mut self) {
        self.face = CardFace::Hidden;
    }

    pub(super) fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}
