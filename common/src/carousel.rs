use anyhow::Result;

// cyclic pointer into a fixed list of slides
//
// the index is always in [0, len); an empty list is treated as one slot so
// that there is still something valid to point at
//
// the slide that was just left stays around as `outgoing` until the view has
// finished fading it out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    outgoing: Option<usize>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            index: 0,
            len: len.max(1),
            outgoing: None,
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn outgoing(&self) -> Option<usize> {
        self.outgoing
    }

    // exit animation finished
    pub fn settle(&mut self) {
        self.outgoing = None;
    }

    fn move_to(&mut self, index: usize) {
        if index != self.index {
            self.outgoing = Some(self.index);
            self.index = index;
        }
    }

    // timer tick
    pub fn advance(&mut self) -> usize {
        self.move_to((self.index + 1) % self.len);
        self.index
    }

    // indicator click; does not touch the timer, so the next tick still
    // advances from whatever was selected
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(anyhow::Error::msg(format!(
                "slide {index} out of range for carousel of {}",
                self.len
            )));
        }

        self.move_to(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_full_cycle() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.current(), 0);

        assert_eq!(carousel.advance(), 1);
        assert_eq!(carousel.advance(), 2);
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn manual_selection_holds_until_next_tick() {
        let mut carousel = Carousel::new(3);
        carousel.advance();

        carousel.select(2).unwrap();
        assert_eq!(carousel.current(), 2);
        assert!(carousel.is_current(2));

        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut carousel = Carousel::new(3);
        carousel.select(1).unwrap();

        assert!(carousel.select(3).is_err());
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let mut carousel = Carousel::new(0);

        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.advance(), 0);
        assert_eq!(carousel.outgoing(), None);
    }

    #[test]
    fn leaving_a_slide_marks_it_outgoing() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.outgoing(), None);

        carousel.advance();
        assert_eq!(carousel.outgoing(), Some(0));

        carousel.select(2).unwrap();
        assert_eq!(carousel.outgoing(), Some(1));

        carousel.settle();
        assert_eq!(carousel.outgoing(), None);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn reselecting_current_slide_does_not_fade() {
        let mut carousel = Carousel::new(3);
        carousel.select(0).unwrap();

        assert_eq!(carousel.outgoing(), None);

        assert!(carousel.select(5).is_err());
        assert_eq!(carousel.outgoing(), None);
    }
}
