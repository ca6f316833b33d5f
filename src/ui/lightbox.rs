/// Full-screen overlay showing one hit in detail.
///
/// Holds an index into the session's hit list rather than a copy of the
/// hit, so every draw reads the current list; `refresh` re-validates the
/// index after the list changes (the "re-scan after render" obligation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Hidden,
    Visible {
        index: usize,
    },
}

impl LightboxState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Hidden => None,
            Self::Visible { index } => Some(*index),
        }
    }

    pub fn open(&mut self, index: usize) {
        *self = Self::Visible { index };
    }

    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    /// Step to the previous/next hit, clamped to the list bounds.
    pub fn step(&mut self, delta: isize, len: usize) {
        if let Self::Visible { index } = self {
            if len == 0 {
                *self = Self::Hidden;
                return;
            }
            let next = (*index as isize + delta).clamp(0, len as isize - 1);
            *index = next as usize;
        }
    }

    /// Re-validate against the current hit list; closes when the index no
    /// longer points at a hit.
    pub fn refresh(&mut self, len: usize) {
        if let Self::Visible { index } = self {
            if *index >= len {
                *self = Self::Hidden;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_closes_on_out_of_range_index() {
        let mut lightbox = LightboxState::Hidden;
        lightbox.open(5);
        lightbox.refresh(3);
        assert!(!lightbox.is_visible());
    }

    #[test]
    fn refresh_keeps_valid_index() {
        let mut lightbox = LightboxState::Hidden;
        lightbox.open(2);
        lightbox.refresh(3);
        assert_eq!(lightbox.index(), Some(2));
    }

    #[test]
    fn step_clamps_at_both_ends() {
        let mut lightbox = LightboxState::Hidden;
        lightbox.open(0);
        lightbox.step(-1, 4);
        assert_eq!(lightbox.index(), Some(0));
        lightbox.step(10, 4);
        assert_eq!(lightbox.index(), Some(3));
    }
}
