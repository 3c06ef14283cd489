use quiz_core::Clock;
use quiz_core::model::QuestionId;

/// Hands out creation-time ids for authored questions.
///
/// Ids are the clock's milliseconds, bumped past the previous id when two
/// questions are created within the same millisecond (or the clock is fixed).
#[derive(Debug, Clone)]
pub struct QuestionIdAllocator {
    clock: Clock,
    last: Option<u64>,
}

impl QuestionIdAllocator {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock, last: None }
    }

    pub fn next_id(&mut self) -> QuestionId {
        let now = self.clock.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        QuestionId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;

    #[test]
    fn ids_come_from_the_clock() {
        let mut ids = QuestionIdAllocator::new(fixed_clock());
        assert_eq!(ids.next_id(), QuestionId::new(1_700_000_000_000));
    }

    #[test]
    fn ids_strictly_increase_under_a_fixed_clock() {
        let mut ids = QuestionIdAllocator::new(fixed_clock());
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(c.value() - a.value(), 2);
    }

    #[test]
    fn ids_jump_to_the_clock_once_it_passes_the_last_id() {
        let mut ids = QuestionIdAllocator::new(fixed_clock());
        let first = ids.next_id();
        let bumped = ids.next_id();
        assert_eq!(bumped.value(), first.value() + 1);

        ids.clock.advance(chrono::Duration::seconds(1));
        let later = ids.next_id();
        assert_eq!(later.value(), first.value() + 1_000);
        assert!(later > bumped);
    }

    #[test]
    fn ids_keep_increasing_when_the_clock_lags() {
        let mut ids = QuestionIdAllocator::new(fixed_clock());
        ids.clock.advance(chrono::Duration::seconds(1));
        let ahead = ids.next_id();

        // Clock moves back below the last id handed out.
        ids.clock = fixed_clock();
        assert_eq!(ids.next_id().value(), ahead.value() + 1);
    }
}
