use std::{cell::Cell, rc::Rc};

use tracing::debug;

use crate::carousel::Carousel;

// a running timer that can be stopped, e.g. a browser interval
pub trait Cancel {
    fn cancel(self);
}

/// Owns the periodic task that drives a [`Carousel`].
///
/// The ticker is created together with its timer and hands the timer a
/// [`TickGate`]. Once the ticker is torn down (explicitly or by being dropped)
/// the timer is cancelled and the gate is closed, so a tick that was already
/// queued cannot move the carousel any more.
pub struct CarouselTicker<H: Cancel> {
    handle: Option<H>,
    open: Rc<Cell<bool>>,
}

impl<H: Cancel> CarouselTicker<H> {
    pub fn start<F>(period_ms: u32, spawn: F) -> Self
    where
        F: FnOnce(u32, TickGate) -> H,
    {
        let open = Rc::new(Cell::new(true));
        let handle = spawn(period_ms, TickGate(open.clone()));

        debug!({period_ms = period_ms}, "carousel ticker started");

        CarouselTicker {
            handle: Some(handle),
            open,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn teardown(&mut self) {
        self.open.set(false);

        if let Some(handle) = self.handle.take() {
            handle.cancel();
            debug!("carousel ticker cancelled");
        }
    }
}

impl<H: Cancel> Drop for CarouselTicker<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// the timer's view of its ticker
#[derive(Clone, Debug)]
pub struct TickGate(Rc<Cell<bool>>);

impl TickGate {
    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    // advances on behalf of the timer; a closed gate leaves the carousel alone
    pub fn advance(&self, carousel: &mut Carousel) -> Option<usize> {
        if !self.is_open() {
            return None;
        }

        Some(carousel.advance())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeTimer {
        cancels: Rc<Cell<u32>>,
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }

    // starts a ticker whose gate is kept so the test can fire ticks by hand
    fn start(timer: &FakeTimer) -> (CarouselTicker<FakeTimer>, TickGate) {
        let captured = Rc::new(RefCell::new(None));

        let slot = captured.clone();
        let timer = timer.clone();
        let ticker = CarouselTicker::start(4000, move |period, gate| {
            assert_eq!(period, 4000);
            *slot.borrow_mut() = Some(gate);
            timer
        });

        let gate = captured.borrow_mut().take().unwrap();
        (ticker, gate)
    }

    #[test]
    fn ticks_advance_while_running() {
        let timer = FakeTimer::default();
        let (ticker, gate) = start(&timer);
        let mut carousel = Carousel::new(3);

        assert!(ticker.is_running());
        assert_eq!(gate.advance(&mut carousel), Some(1));
        assert_eq!(gate.advance(&mut carousel), Some(2));
        assert_eq!(timer.cancels.get(), 0);
    }

    #[test]
    fn teardown_cancels_and_stops_ticks() {
        let timer = FakeTimer::default();
        let (mut ticker, gate) = start(&timer);
        let mut carousel = Carousel::new(3);
        gate.advance(&mut carousel);

        ticker.teardown();

        assert!(!ticker.is_running());
        assert_eq!(timer.cancels.get(), 1);
        assert!(!gate.is_open());
        assert_eq!(gate.advance(&mut carousel), None);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn dropping_cancels_exactly_once() {
        let timer = FakeTimer::default();
        let (mut ticker, gate) = start(&timer);

        ticker.teardown();
        drop(ticker);

        assert_eq!(timer.cancels.get(), 1);
        assert!(!gate.is_open());
    }

    #[test]
    fn drop_without_teardown_cancels() {
        let timer = FakeTimer::default();
        let (ticker, gate) = start(&timer);

        drop(ticker);

        assert_eq!(timer.cancels.get(), 1);
        assert_eq!(gate.advance(&mut Carousel::new(3)), None);
    }
}
